// crates/shared-kernel/src/lib.rs
pub use error::{
    DomainError, DomainResult, ErrorContext, InfrastructureError, RepdigitError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Interval, RunningTotal};
