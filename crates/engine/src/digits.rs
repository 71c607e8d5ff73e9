//! Base-10 digit arithmetic used to derive search bounds.

/// Number of decimal digits in `n`. Zero has one digit.
#[inline]
pub const fn count_digits(mut n: u64) -> u32 {
    if n == 0 {
        return 1;
    }
    let mut count = 0;
    while n != 0 {
        n /= 10;
        count += 1;
    }
    count
}

/// `10^exp` by exponentiation by squaring. Callers keep `exp <= 19`.
#[inline]
pub const fn pow10(mut exp: u32) -> u64 {
    let mut base: u64 = 10;
    let mut acc: u64 = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            acc *= base;
        }
        exp >>= 1;
        if exp > 0 {
            base *= base;
        }
    }
    acc
}

/// Splits `n` into its leading and trailing `total_digits / 2` digits.
///
/// `total_digits` must be even.
#[inline]
pub const fn split_halves(n: u64, total_digits: u32) -> (u64, u64) {
    let divisor = pow10(total_digits / 2);
    (n / divisor, n % divisor)
}
