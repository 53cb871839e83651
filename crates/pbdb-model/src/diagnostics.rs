//! Build-time findings about the literal vocabulary.
//!
//! The field table is authored by hand; codes assigned twice and verbose names
//! reachable from two codes make the translation lossy. These records let
//! callers see exactly what was lost.

use serde::{Deserialize, Serialize};

/// A compact code that was assigned more than once; the later value won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowedCode {
    pub compact_code: String,
    /// Verbose name that was overwritten.
    pub replaced: String,
    /// Verbose name now bound to the code.
    pub replacement: String,
}

/// A verbose name reached from two compact codes; reverse lookup keeps `kept`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseCollision {
    pub verbose_name: String,
    pub dropped: String,
    pub kept: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryDiagnostics {
    pub shadowed_codes: Vec<ShadowedCode>,
    pub reverse_collisions: Vec<ReverseCollision>,
    /// (category, verbose name) pairs with no compact code.
    pub unmapped_category_fields: Vec<(String, String)>,
    /// (analysis, verbose name) pairs with no compact code.
    pub unmapped_analysis_fields: Vec<(String, String)>,
}

impl DictionaryDiagnostics {
    pub fn issue_count(&self) -> usize {
        self.shadowed_codes.len()
            + self.reverse_collisions.len()
            + self.unmapped_category_fields.len()
            + self.unmapped_analysis_fields.len()
    }

    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }
}

/// Size summary of a built dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryStats {
    /// Entries in the effective field table (unique compact codes).
    pub field_count: usize,
    /// Entries supplied to the builder, duplicates included.
    pub literal_entry_count: usize,
    /// Entries in the reverse index (unique verbose names).
    pub reverse_count: usize,
    pub category_count: usize,
    pub analysis_count: usize,
}
