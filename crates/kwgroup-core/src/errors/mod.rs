//! Error types. The grouping run itself is infallible; these cover the edges
//! where configuration and raw input are decoded.

mod config_error;
mod input_error;

pub use config_error::ConfigError;
pub use input_error::InputError;

/// Top-level error for the keyword grouping crates.
#[derive(Debug, thiserror::Error)]
pub enum KwGroupError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("input error: {0}")]
    Input(#[from] InputError),
}

pub type KwGroupResult<T> = Result<T, KwGroupError>;
