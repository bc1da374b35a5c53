pub mod config;
pub use config::{BinningConfig, Config, ExportConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistobinError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HistobinError>;

impl HistobinError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
