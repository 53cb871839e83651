//! Picking an analysis's recommended fields out of a table header.

use serde::{Deserialize, Serialize};

use pbdb_model::{Direction, Result};

use crate::dictionary::FieldDictionary;

/// Analysis fields split by whether the table carries them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSelection {
    pub analysis: String,
    /// Column names to select, in the analysis's recommended order.
    pub present: Vec<String>,
    /// Recommended verbose fields with no matching column.
    pub missing: Vec<String>,
}

impl AnalysisSelection {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl FieldDictionary {
    /// Matches an analysis's verbose fields against a table header.
    ///
    /// A field counts as present when the header carries either its verbose
    /// name or its compact code, so compact downloads can be subset before
    /// they are translated. `present` holds the names as they appear in the
    /// header.
    ///
    /// # Errors
    ///
    /// Fails like [`FieldDictionary::fields_for_analysis`] for an unknown analysis.
    pub fn select_analysis_columns<S: AsRef<str>>(
        &self,
        columns: &[S],
        analysis: &str,
    ) -> Result<AnalysisSelection> {
        let fields = self.fields_for_analysis(analysis)?;
        let has = |name: &str| columns.iter().any(|column| column.as_ref() == name);
        let mut selection = AnalysisSelection {
            analysis: analysis.to_string(),
            ..AnalysisSelection::default()
        };
        for field in fields {
            if has(field.as_str()) {
                selection.present.push(field);
                continue;
            }
            match self.translate_name(&field, Direction::VerboseToCompact) {
                Some(compact) if has(compact) => selection.present.push(compact.to_string()),
                _ => selection.missing.push(field),
            }
        }
        Ok(selection)
    }
}
