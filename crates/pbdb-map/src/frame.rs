//! Column renaming on host tables.
//!
//! The dictionary never owns table data. It asks a [`ColumnFrame`] for its
//! header, computes the rename pairs, and hands them back to the table's own
//! rename primitive.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Display;

use polars::prelude::{DataFrame, PolarsResult};
use thiserror::Error;
use tracing::debug;

use pbdb_model::Direction;

use crate::dictionary::FieldDictionary;

/// A tabular structure with a renameable header.
pub trait ColumnFrame {
    type Error: Display;

    fn column_names(&self) -> Vec<String>;

    /// Applies old -> new renames; names not listed keep their position and name.
    fn rename_columns(&mut self, renames: &[(String, String)]) -> Result<(), Self::Error>;
}

impl ColumnFrame for DataFrame {
    type Error = polars::prelude::PolarsError;

    fn column_names(&self) -> Vec<String> {
        self.get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn rename_columns(&mut self, renames: &[(String, String)]) -> PolarsResult<()> {
        let lookup: HashMap<&str, &str> = renames
            .iter()
            .map(|(old, new)| (old.as_str(), new.as_str()))
            .collect();
        let names: Vec<String> = self
            .get_column_names()
            .into_iter()
            .map(|name| {
                lookup
                    .get(name.as_str())
                    .map_or_else(|| name.to_string(), |new| (*new).to_string())
            })
            .collect();
        self.set_column_names(names)
    }
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("renaming would produce duplicate column '{column}' from {}", .sources.join(", "))]
    DuplicateColumn {
        column: String,
        sources: Vec<String>,
    },

    #[error("failed to rename columns: {0}")]
    Rename(String),
}

pub type FrameResult<T> = std::result::Result<T, FrameError>;

impl FieldDictionary {
    /// Renames the frame's columns in place and returns the renames applied.
    ///
    /// # Errors
    ///
    /// Fails without touching the frame when two columns would end up with the
    /// same name (e.g. `cid` and `cln` both become `collection_no`), or when the
    /// frame's own rename fails.
    pub fn translate_frame_in_place<F: ColumnFrame>(
        &self,
        frame: &mut F,
        direction: Direction,
    ) -> FrameResult<Vec<(String, String)>> {
        let columns = frame.column_names();
        let renames = self.rename_map(&columns, direction);
        if renames.is_empty() {
            return Ok(renames);
        }
        check_unique(&columns, &self.translate_columns(&columns, direction))?;
        frame
            .rename_columns(&renames)
            .map_err(|error| FrameError::Rename(error.to_string()))?;
        debug!(
            direction = %direction,
            renamed = renames.len(),
            columns = columns.len(),
            "translated frame header"
        );
        Ok(renames)
    }

    /// Returns a renamed copy of the frame; the input is left as-is.
    ///
    /// # Errors
    ///
    /// See [`Self::translate_frame_in_place`].
    pub fn translate_frame<F: ColumnFrame + Clone>(
        &self,
        frame: &F,
        direction: Direction,
    ) -> FrameResult<F> {
        let mut out = frame.clone();
        self.translate_frame_in_place(&mut out, direction)?;
        Ok(out)
    }
}

fn check_unique(before: &[String], after: &[String]) -> FrameResult<()> {
    let mut sources: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for (old, new) in before.iter().zip(after) {
        sources.entry(new.as_str()).or_default().insert(old.as_str());
    }
    for (column, origins) in sources {
        // Only distinct input names merging counts; repeats of one input name
        // are the host's concern.
        if origins.len() > 1 {
            return Err(FrameError::DuplicateColumn {
                column: column.to_string(),
                sources: origins.into_iter().map(str::to_string).collect(),
            });
        }
    }
    Ok(())
}
