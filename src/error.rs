use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream API returned an unexpected status
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Server kept throttling past the configured retry budget
    #[error("Rate limited by upstream after {attempts} attempts")]
    RateLimited { attempts: u32 },

    /// HTTP request error (preserves reqwest::Error for failure classification)
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Part-list input could not be read
    #[error("Import error: {0}")]
    Import(String),

    /// Result workbook could not be written
    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}
