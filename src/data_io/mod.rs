pub mod metadata;
pub mod schema;
pub mod table;
pub mod time_axis;
pub mod writer;

pub use metadata::{FileMetadata, GridLocation};
pub use schema::{Dim, VariableSpec, FORCING_VARIABLES, MEASUREMENT_HEIGHT, MISSING_VALUE};
pub use table::{TableError, TimeSeriesRecord, TimeSeriesTable};
pub use time_axis::TimeRange;
pub use writer::{ForcingScaffold, ForcingWriter};

use thiserror::Error;

/// Errors raised while building a forcing file
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("NetCDF error: {0}")]
    Netcdf(#[from] netcdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Time step must be positive, got {0} s")]
    InvalidTimeStep(i64),

    #[error("Grid extent must be at least 1, got {0}")]
    InvalidGridExtent(usize),

    #[error("Time series table is empty")]
    EmptyTable,

    #[error("Variable not found: {0}")]
    UnknownVariable(String),

    #[error("Variable {variable} expects {expected} values, got {found}")]
    LengthMismatch {
        variable: String,
        expected: usize,
        found: usize,
    },
}
