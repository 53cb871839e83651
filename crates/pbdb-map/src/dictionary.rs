//! The compact/verbose field dictionary.
//!
//! A [`FieldDictionary`] is built once, either from the built-in PBDB
//! vocabulary ([`FieldDictionary::pbdb`]) or from custom data through
//! [`FieldDictionaryBuilder`], and is read-only afterwards. All queries take
//! `&self`, so one handle can be shared across threads freely.

use std::collections::HashMap;

use tracing::debug;

use pbdb_model::{
    CategoryField, CategoryListing, DictionaryDiagnostics, DictionaryError, DictionaryStats,
    Direction, FieldEntry, FieldInfo, Result, ReverseCollision, ShadowedCode,
};

use crate::vocabulary::{ANALYSES, CATEGORIES, FIELD_TABLE};

/// Immutable bidirectional field-name dictionary.
#[derive(Debug, Clone)]
pub struct FieldDictionary {
    /// Effective field table, unique compact codes, display order.
    entries: Vec<FieldEntry>,
    /// Compact code -> index into `entries`.
    forward: HashMap<String, usize>,
    /// Verbose name -> compact code.
    reverse: HashMap<String, String>,
    categories: Vec<(String, Vec<String>)>,
    analyses: Vec<(String, Vec<String>)>,
    literal_entry_count: usize,
    shadowed: Vec<ShadowedCode>,
    collisions: Vec<ReverseCollision>,
}

impl FieldDictionary {
    /// Builds the built-in PBDB occurrence vocabulary.
    pub fn pbdb() -> Self {
        let mut builder = Self::builder();
        for (compact, verbose) in FIELD_TABLE {
            builder = builder.field(*compact, *verbose);
        }
        for (name, fields) in CATEGORIES {
            builder = builder.category(*name, fields.iter().copied());
        }
        for (name, fields) in ANALYSES {
            builder = builder.analysis(*name, fields.iter().copied());
        }
        builder.build()
    }

    pub fn builder() -> FieldDictionaryBuilder {
        FieldDictionaryBuilder::default()
    }

    /// Verbose name for a compact code.
    pub fn compact_to_verbose(&self, compact_code: &str) -> Option<&str> {
        self.forward
            .get(compact_code)
            .map(|&index| self.entries[index].verbose_name.as_str())
    }

    /// Compact code for a verbose name.
    pub fn verbose_to_compact(&self, verbose_name: &str) -> Option<&str> {
        self.reverse.get(verbose_name).map(String::as_str)
    }

    /// Counterpart of a single column name, if the dictionary knows it.
    pub fn translate_name(&self, name: &str, direction: Direction) -> Option<&str> {
        match direction {
            Direction::CompactToVerbose => self.compact_to_verbose(name),
            Direction::VerboseToCompact => self.verbose_to_compact(name),
        }
    }

    /// Best-effort rename of a table header.
    ///
    /// Every known name is replaced by its counterpart; unknown names pass
    /// through unchanged. The output has the same length and order as the input.
    pub fn translate_columns<S: AsRef<str>>(
        &self,
        columns: &[S],
        direction: Direction,
    ) -> Vec<String> {
        columns
            .iter()
            .map(|column| {
                let column = column.as_ref();
                match self.translate_name(column, direction) {
                    Some(translated) => translated.to_string(),
                    None => column.to_string(),
                }
            })
            .collect()
    }

    /// [`Self::translate_columns`] with the direction given as a flag string.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::InvalidDirection`] for anything other than
    /// `compact_to_verbose` or `verbose_to_compact`.
    pub fn translate_columns_named<S: AsRef<str>>(
        &self,
        columns: &[S],
        direction: &str,
    ) -> Result<Vec<String>> {
        let direction: Direction = direction.parse()?;
        Ok(self.translate_columns(columns, direction))
    }

    /// Old -> new pairs for the columns that actually change name.
    pub fn rename_map<S: AsRef<str>>(
        &self,
        columns: &[S],
        direction: Direction,
    ) -> Vec<(String, String)> {
        columns
            .iter()
            .filter_map(|column| {
                let column = column.as_ref();
                self.translate_name(column, direction)
                    .filter(|translated| *translated != column)
                    .map(|translated| (column.to_string(), translated.to_string()))
            })
            .collect()
    }

    /// Recommended verbose fields for an analysis, as an owned copy.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::UnknownAnalysis`] listing the valid names.
    pub fn fields_for_analysis(&self, analysis: &str) -> Result<Vec<String>> {
        self.analyses
            .iter()
            .find(|(name, _)| name == analysis)
            .map(|(_, fields)| fields.clone())
            .ok_or_else(|| DictionaryError::UnknownAnalysis {
                name: analysis.to_string(),
                available: self.analysis_names().map(str::to_string).collect(),
            })
    }

    /// Resolves a compact code or verbose name to its full metadata.
    ///
    /// Compact codes are tried first, then verbose names. The category is the
    /// first one, in declared order, that lists the verbose name.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::UnknownField`] if neither lookup matches.
    pub fn describe_field(&self, field_name: &str) -> Result<FieldInfo> {
        let (compact, verbose) = self
            .resolve(field_name)
            .ok_or_else(|| DictionaryError::UnknownField {
                name: field_name.to_string(),
            })?;
        Ok(FieldInfo {
            compact_code: compact.to_string(),
            verbose_name: verbose.to_string(),
            category: self.category_of(verbose).map(str::to_string),
        })
    }

    fn resolve<'a>(&'a self, name: &'a str) -> Option<(&'a str, &'a str)> {
        if let Some(verbose) = self.compact_to_verbose(name) {
            return Some((name, verbose));
        }
        self.verbose_to_compact(name).map(|compact| (compact, name))
    }

    /// First category listing the verbose name.
    pub fn category_of(&self, verbose_name: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|(_, fields)| fields.iter().any(|field| field == verbose_name))
            .map(|(name, _)| name.as_str())
    }

    /// Every category with its fields, in declared order.
    pub fn list_fields_by_category(&self) -> Vec<CategoryListing> {
        self.categories
            .iter()
            .map(|(category, fields)| CategoryListing {
                category: category.clone(),
                fields: fields
                    .iter()
                    .map(|verbose| CategoryField {
                        compact_code: self.verbose_to_compact(verbose).map(str::to_string),
                        verbose_name: verbose.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Effective field table in display order.
    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    pub fn analysis_names(&self) -> impl Iterator<Item = &str> {
        self.analyses.iter().map(|(name, _)| name.as_str())
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            field_count: self.entries.len(),
            literal_entry_count: self.literal_entry_count,
            reverse_count: self.reverse.len(),
            category_count: self.categories.len(),
            analysis_count: self.analyses.len(),
        }
    }

    /// Lossy spots in the vocabulary: overwritten codes, reverse collisions,
    /// and category/analysis names with no compact code.
    pub fn diagnostics(&self) -> DictionaryDiagnostics {
        DictionaryDiagnostics {
            shadowed_codes: self.shadowed.clone(),
            reverse_collisions: self.collisions.clone(),
            unmapped_category_fields: self.unmapped(&self.categories),
            unmapped_analysis_fields: self.unmapped(&self.analyses),
        }
    }

    fn unmapped(&self, groups: &[(String, Vec<String>)]) -> Vec<(String, String)> {
        groups
            .iter()
            .flat_map(|(group, fields)| {
                fields
                    .iter()
                    .filter(|field| !self.reverse.contains_key(field.as_str()))
                    .map(move |field| (group.clone(), field.clone()))
            })
            .collect()
    }
}

impl Default for FieldDictionary {
    fn default() -> Self {
        Self::pbdb()
    }
}

/// Incremental construction of a [`FieldDictionary`].
///
/// Re-adding a compact code replaces its verbose name in place, keeping the
/// position of the first insertion. Re-adding a category or analysis replaces
/// its field list.
#[derive(Debug, Default)]
pub struct FieldDictionaryBuilder {
    entries: Vec<FieldEntry>,
    positions: HashMap<String, usize>,
    shadowed: Vec<ShadowedCode>,
    literal_entry_count: usize,
    categories: Vec<(String, Vec<String>)>,
    analyses: Vec<(String, Vec<String>)>,
}

impl FieldDictionaryBuilder {
    #[must_use]
    pub fn field(
        mut self,
        compact_code: impl Into<String>,
        verbose_name: impl Into<String>,
    ) -> Self {
        let entry = FieldEntry::new(compact_code, verbose_name);
        self.literal_entry_count += 1;
        match self.positions.get(&entry.compact_code) {
            Some(&index) => {
                let existing = &mut self.entries[index];
                if existing.verbose_name != entry.verbose_name {
                    self.shadowed.push(ShadowedCode {
                        compact_code: entry.compact_code.clone(),
                        replaced: existing.verbose_name.clone(),
                        replacement: entry.verbose_name.clone(),
                    });
                }
                existing.verbose_name = entry.verbose_name;
            }
            None => {
                self.positions
                    .insert(entry.compact_code.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
        self
    }

    #[must_use]
    pub fn category<I, S>(mut self, name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        upsert_group(&mut self.categories, name.into(), fields);
        self
    }

    #[must_use]
    pub fn analysis<I, S>(mut self, name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        upsert_group(&mut self.analyses, name.into(), fields);
        self
    }

    pub fn build(self) -> FieldDictionary {
        let mut reverse: HashMap<String, String> = HashMap::with_capacity(self.entries.len());
        let mut collisions = Vec::new();
        for entry in &self.entries {
            if let Some(dropped) =
                reverse.insert(entry.verbose_name.clone(), entry.compact_code.clone())
            {
                collisions.push(ReverseCollision {
                    verbose_name: entry.verbose_name.clone(),
                    dropped,
                    kept: entry.compact_code.clone(),
                });
            }
        }

        for shadow in &self.shadowed {
            debug!(
                compact_code = %shadow.compact_code,
                replaced = %shadow.replaced,
                replacement = %shadow.replacement,
                "compact code assigned twice; later value wins"
            );
        }
        for collision in &collisions {
            debug!(
                verbose_name = %collision.verbose_name,
                dropped = %collision.dropped,
                kept = %collision.kept,
                "verbose name reached from two compact codes"
            );
        }
        debug!(
            fields = self.entries.len(),
            literal_entries = self.literal_entry_count,
            reverse = reverse.len(),
            categories = self.categories.len(),
            analyses = self.analyses.len(),
            "field dictionary built"
        );

        FieldDictionary {
            entries: self.entries,
            forward: self.positions,
            reverse,
            categories: self.categories,
            analyses: self.analyses,
            literal_entry_count: self.literal_entry_count,
            shadowed: self.shadowed,
            collisions,
        }
    }
}

fn upsert_group<I, S>(groups: &mut Vec<(String, Vec<String>)>, name: String, fields: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
    match groups.iter_mut().find(|(existing, _)| *existing == name) {
        Some((_, existing)) => *existing = fields,
        None => groups.push((name, fields)),
    }
}
