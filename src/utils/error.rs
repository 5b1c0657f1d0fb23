use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Browser protocol error: {0}")]
    CdpError(#[from] chromiumoxide::error::CdpError),

    #[error("Browser error: {message}")]
    BrowserError { message: String },

    #[error("Navigation timed out after {seconds} seconds")]
    NavigationTimeout { seconds: u64 },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CheckError>;
