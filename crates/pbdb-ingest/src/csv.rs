//! CSV reading and writing through Polars.

use std::fs::File;
use std::path::Path;

use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Options for loading a PBDB download.
#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    /// Field delimiter (PBDB serves `,` for csv and `\t` for tsv).
    pub separator: u8,
    /// Infer column types from the first rows instead of keeping every value as text.
    pub infer_types: bool,
    /// Stop after this many data rows (`Some(0)` reads the header only).
    pub max_rows: Option<usize>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            separator: b',',
            infer_types: false,
            max_rows: None,
        }
    }
}

impl CsvOptions {
    /// Options for tab-separated downloads.
    #[must_use]
    pub fn tsv() -> Self {
        Self {
            separator: b'\t',
            ..Self::default()
        }
    }

    /// Picks the separator from the file extension (`.tsv`/`.txt` -> tab).
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("tsv" | "txt") => Self::tsv(),
            _ => Self::default(),
        }
    }

    /// Same options, reading no data rows.
    #[must_use]
    pub fn header_only(self) -> Self {
        Self {
            max_rows: Some(0),
            ..self
        }
    }
}

/// Reads a CSV file with a single header row into a DataFrame.
pub fn read_csv_frame(path: &Path, options: CsvOptions) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let infer_length = if options.infer_types { Some(100) } else { Some(0) };
    let separator = options.separator;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(infer_length)
        .with_n_rows(options.max_rows)
        .map_parse_options(|parse| parse.with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded CSV"
    );
    Ok(df)
}

/// Reads only the header row of a CSV file.
pub fn read_csv_header(path: &Path, options: CsvOptions) -> Result<Vec<String>> {
    let df = read_csv_frame(path, options.header_only())?;
    Ok(df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect())
}

/// Writes a DataFrame as CSV with a header row.
pub fn write_csv_frame(df: &mut DataFrame, path: &Path, options: CsvOptions) -> Result<()> {
    let mut file = File::create(path).map_err(|source| IngestError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(options.separator)
        .finish(df)
        .map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote CSV"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn keeps_values_as_text_by_default() {
        let file = create_temp_csv("oid,eag\n001,66.0\n");
        let df = read_csv_frame(file.path(), CsvOptions::default()).unwrap();
        let oid = df.column("oid").unwrap();
        assert_eq!(oid.str().unwrap().get(0), Some("001"));
    }

    #[test]
    fn separator_from_extension() {
        assert_eq!(CsvOptions::for_path(Path::new("occs.TSV")).separator, b'\t');
        assert_eq!(CsvOptions::for_path(Path::new("occs.csv")).separator, b',');
        assert_eq!(CsvOptions::for_path(Path::new("occs")).separator, b',');
    }

    #[test]
    fn header_only_skips_data_rows() {
        let file = create_temp_csv("oid,tna,eag\n001,Canis,66.0\n002,Felis,5.3\n");
        let df = read_csv_frame(file.path(), CsvOptions::default().header_only()).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 3);

        let header = read_csv_header(file.path(), CsvOptions::default()).unwrap();
        assert_eq!(header, vec!["oid", "tna", "eag"]);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_csv_frame(Path::new("/nonexistent/occs.csv"), CsvOptions::default())
            .unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
