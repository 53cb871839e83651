//! Translation direction between the compact and verbose vocabularies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DictionaryError;

/// Which way a column header is translated.
///
/// PBDB serves the same record with either three-letter compact field codes
/// (`tna`, `oid`) or full verbose names (`accepted_name`, `occurrence_id`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Compact code to verbose name (`tna` -> `accepted_name`).
    #[default]
    CompactToVerbose,
    /// Verbose name to compact code (`accepted_name` -> `tna`).
    VerboseToCompact,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::CompactToVerbose => "compact_to_verbose",
            Direction::VerboseToCompact => "verbose_to_compact",
        }
    }

    /// The direction that undoes this one.
    pub fn reverse(self) -> Self {
        match self {
            Direction::CompactToVerbose => Direction::VerboseToCompact,
            Direction::VerboseToCompact => Direction::CompactToVerbose,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DictionaryError;

    /// Accepts exactly `compact_to_verbose` or `verbose_to_compact`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact_to_verbose" => Ok(Direction::CompactToVerbose),
            "verbose_to_compact" => Ok(Direction::VerboseToCompact),
            _ => Err(DictionaryError::InvalidDirection {
                value: s.to_string(),
            }),
        }
    }
}
