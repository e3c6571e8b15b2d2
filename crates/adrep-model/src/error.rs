use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
