// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] repdigit_shared_kernel::RepdigitError),

    #[error(transparent)]
    Engine(#[from] repdigit_engine::error::EngineError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
