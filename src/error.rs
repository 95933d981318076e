use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("rates file error: {0}")]
    RatesError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;
