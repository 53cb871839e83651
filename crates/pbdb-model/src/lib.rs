pub mod diagnostics;
pub mod direction;
pub mod error;
pub mod field;

pub use diagnostics::{DictionaryDiagnostics, DictionaryStats, ReverseCollision, ShadowedCode};
pub use direction::Direction;
pub use error::{DictionaryError, ErrorKind, Result};
pub use field::{CategoryField, CategoryListing, FieldEntry, FieldInfo, NOT_AVAILABLE};
