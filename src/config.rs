//! Configuration for the clause compiler.
//!
//! The configuration can be built in code or loaded from a JSON file. Missing
//! fields take their defaults:
//!
//! ```json
//! {
//!   "boundary_sentinel": "\u0003",
//!   "syllable_joiner": "+",
//!   "include_initials": true,
//!   "max_candidates": 16,
//!   "ambiguous_syllables": null
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::phonetic::AmbiguitySet;
use crate::analysis::phonetic::pinyin::DEFAULT_MAX_CANDIDATES;
use crate::error::{PinyinFtsError, Result};

/// Boundary marker placed after an ambiguous syllable inside its phrase quotes.
///
/// U+0003 is the convention of the pinyin FTS5 tokenizer this crate targets. Check it
/// against the tokenizer actually deployed before relying on it.
pub const DEFAULT_BOUNDARY_SENTINEL: char = '\u{3}';

/// FTS5 phrase concatenation operator.
pub const DEFAULT_SYLLABLE_JOINER: &str = "+";

/// Configuration for [`ClauseCompiler`](crate::query::compiler::ClauseCompiler).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Sentinel appended to quoted ambiguous syllables.
    pub boundary_sentinel: char,

    /// Operator joining the syllables of one candidate reading.
    pub syllable_joiner: String,

    /// Whether the initials reading is offered as an extra candidate.
    pub include_initials: bool,

    /// Maximum decompositions requested from the built-in analyzer.
    pub max_candidates: usize,

    /// Replacement ambiguity set. `None` uses the standard set.
    pub ambiguous_syllables: Option<Vec<String>>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            boundary_sentinel: DEFAULT_BOUNDARY_SENTINEL,
            syllable_joiner: DEFAULT_SYLLABLE_JOINER.to_string(),
            include_initials: true,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            ambiguous_syllables: None,
        }
    }
}

impl CompilerConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PinyinFtsError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: CompilerConfig = serde_json::from_str(&content).map_err(|e| {
            PinyinFtsError::config(format!(
                "Failed to parse config JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        info!("Loaded compiler config from {}", path.display());
        Ok(config)
    }

    /// Reject settings that would let the compiled clause break its own quoting.
    pub fn validate(&self) -> Result<()> {
        if self.syllable_joiner.is_empty() {
            return Err(PinyinFtsError::config("syllable_joiner must not be empty"));
        }
        if self
            .syllable_joiner
            .chars()
            .any(|c| matches!(c, '"' | '\'' | '(' | ')') || c.is_whitespace())
        {
            return Err(PinyinFtsError::config(format!(
                "syllable_joiner {:?} contains quotes, parentheses or whitespace",
                self.syllable_joiner
            )));
        }
        if matches!(self.boundary_sentinel, '"' | '\'') {
            return Err(PinyinFtsError::config(
                "boundary_sentinel must not be a quote character",
            ));
        }
        if self.max_candidates == 0 {
            return Err(PinyinFtsError::config("max_candidates must be at least 1"));
        }
        if let Some(syllables) = &self.ambiguous_syllables
            && let Some(bad) = syllables
                .iter()
                .find(|s| s.is_empty() || !s.bytes().all(|b| b.is_ascii_alphanumeric()))
        {
            return Err(PinyinFtsError::config(format!(
                "ambiguous syllable {bad:?} is not ASCII alphanumeric"
            )));
        }
        Ok(())
    }

    /// The ambiguity set selected by this configuration.
    pub fn ambiguity_set(&self) -> Arc<AmbiguitySet> {
        match &self.ambiguous_syllables {
            Some(syllables) => Arc::new(AmbiguitySet::from_syllables(syllables.iter().cloned())),
            None => AmbiguitySet::standard(),
        }
    }
}
