// crates/shared-kernel/src/value_objects/mod.rs
pub mod interval;
pub mod total;

pub use interval::Interval;
pub use total::RunningTotal;
