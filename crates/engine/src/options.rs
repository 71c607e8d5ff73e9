use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// `Part one:  N` lines
    #[default]
    Plain,
    Table,
    Json,
}

/// Which queries a run evaluates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Part {
    /// Two-fold repeats per interval
    One,
    /// Any repeat count over the interval union
    Two,
    #[default]
    Both,
}

impl Part {
    #[inline]
    pub const fn includes_one(self) -> bool {
        matches!(self, Self::One | Self::Both)
    }

    #[inline]
    pub const fn includes_two(self) -> bool {
        matches!(self, Self::Two | Self::Both)
    }
}
