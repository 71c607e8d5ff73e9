use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Interval endpoint {value} has {digits} digits, more than the supported {max}")]
    EndpointOutOfRange { value: u64, digits: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
