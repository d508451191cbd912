pub mod config;
pub mod conversions;
pub mod data_io;
pub mod logging;

pub use data_io::{
    FileMetadata, ForcingScaffold, ForcingWriter, GridLocation, TimeRange, TimeSeriesRecord,
    TimeSeriesTable, WriteError,
};
