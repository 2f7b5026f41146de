use thiserror::Error;

/// Top-level error type for the figure pipeline
#[derive(Error, Debug)]
pub enum FigureError {
    #[error("Data error: {0}")]
    DataError(#[from] DataError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to render figure '{0}': {1}")]
    RenderError(String, String),
}

/// Errors raised while shaping raw measurement tables
#[derive(Error, Debug, PartialEq)]
pub enum DataError {
    #[error("Invalid measurement in series '{series}', entry '{entry}': division by zero")]
    InvalidMeasurement { series: String, entry: String },

    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    #[error("Unknown benchmark: {0}")]
    UnknownBenchmark(String),
}

/// Type alias for Result with FigureError
pub type FigureResult<T> = Result<T, FigureError>;
