//! Compact/verbose field dictionary for Paleobiology Database records.
//!
//! PBDB downloads name their columns either with short codes (`tna`, `oid`)
//! or with full names (`accepted_name`, `occurrence_id`). [`FieldDictionary`]
//! translates between the two, groups fields into categories, and carries the
//! curated field sets for common analyses.
//!
//! ```
//! use pbdb_map::FieldDictionary;
//! use pbdb_model::Direction;
//!
//! let dict = FieldDictionary::pbdb();
//! let header = dict.translate_columns(&["oid", "tna", "extra"], Direction::CompactToVerbose);
//! assert_eq!(header, ["occurrence_id", "accepted_name", "extra"]);
//! ```

#![deny(unsafe_code)]

pub mod dictionary;
pub mod frame;
pub mod selection;
pub mod vocabulary;

pub use dictionary::{FieldDictionary, FieldDictionaryBuilder};
pub use frame::{ColumnFrame, FrameError, FrameResult};
pub use selection::AnalysisSelection;
