//! Table loading for PBDB downloads.
//!
//! Reads occurrence downloads into Polars DataFrames so their headers can be
//! translated by `pbdb-map`, and writes the result back out.

pub mod csv;
pub mod error;

pub use csv::{CsvOptions, read_csv_frame, read_csv_header, write_csv_frame};
pub use error::{IngestError, Result};
