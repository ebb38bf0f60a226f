use thiserror::Error;

/// Errors produced by the formatting and export pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// A value handed to the formatter or an `Observation` constructor was
    /// outside its contract (negative population, non-4-digit year, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A series failed the `DataSet` invariants at construction.
    #[error("malformed data set: {0}")]
    MalformedDataSet(String),

    /// An export payload could not be produced.
    #[error("serialization failed: {0}")]
    Serialization(#[from] SerializationError),
}

/// Failure modes of the CSV/XLSX exporters.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("nothing to export: empty row set")]
    Empty,

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV buffer error: {0}")]
    Buffer(String),
}

pub type Result<T> = std::result::Result<T, Error>;
