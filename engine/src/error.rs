use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    #[error("Review store error: {0}")]
    ReviewStoreError(String),

    #[error("Profile aggregation error: {0}")]
    AggregationError(String),

    // Catch-all for anyhow errors bubbling out of the parsers.
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}
