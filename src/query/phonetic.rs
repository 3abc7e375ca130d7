//! Phonetic clause construction for ASCII-letter tokens.
//!
//! Every candidate reading returned by the analyzer becomes one alternative, the
//! initials reading becomes one more, and the literal spelling always closes the
//! disjunction so a record spelled exactly like the input is never lost to an
//! analyzer miss.

use log::{debug, warn};

use crate::analysis::phonetic::{AmbiguitySet, PhoneticAnalyzer, PhoneticGroup};
use crate::config::CompilerConfig;
use crate::query::clause::TokenClause;
use crate::query::literal::quote_phrase;

/// Builds [`TokenClause::Phonetic`] clauses.
pub struct PhoneticClauseBuilder<'a> {
    analyzer: &'a dyn PhoneticAnalyzer,
    ambiguity: &'a AmbiguitySet,
    config: &'a CompilerConfig,
}

impl<'a> PhoneticClauseBuilder<'a> {
    pub fn new(
        analyzer: &'a dyn PhoneticAnalyzer,
        ambiguity: &'a AmbiguitySet,
        config: &'a CompilerConfig,
    ) -> Self {
        PhoneticClauseBuilder {
            analyzer,
            ambiguity,
            config,
        }
    }

    /// Candidate readings of `token`: the analyzer's decompositions followed by the
    /// initials reading. Malformed groups are dropped.
    pub fn candidate_groups(&self, token: &str) -> Vec<PhoneticGroup> {
        let mut groups = self.analyzer.decompose(token);
        if self.config.include_initials {
            let initials = self.analyzer.initials(token);
            if !initials.is_empty() {
                groups.push(PhoneticGroup::new(vec![initials]));
            }
        }

        groups.retain(|group| {
            let keep = group.is_well_formed();
            if !keep {
                warn!(
                    "Dropping malformed reading {:?} from analyzer '{}' for token {token:?}",
                    group.syllables(),
                    self.analyzer.name()
                );
            }
            keep
        });
        groups
    }

    /// Render the syllables of one reading, quoting non-final ambiguous syllables
    /// together with the boundary sentinel.
    pub fn render_syllables(&self, group: &PhoneticGroup) -> Vec<String> {
        let syllables = group.syllables();
        let last = syllables.len().saturating_sub(1);
        syllables
            .iter()
            .enumerate()
            .map(|(j, syllable)| {
                if syllables.len() > 1 && j != last && self.ambiguity.contains(syllable) {
                    format!("\"{}{}\"", syllable, self.config.boundary_sentinel)
                } else {
                    syllable.clone()
                }
            })
            .collect()
    }

    /// Build the clause for an eligible token.
    pub fn build(&self, token: &str) -> TokenClause {
        let alternatives: Vec<String> = self
            .candidate_groups(token)
            .iter()
            .map(|group| self.render_syllables(group).join(self.config.syllable_joiner.as_str()))
            .collect();

        debug!("Token: {token}, phonetic alternatives: {alternatives:?}");

        TokenClause::Phonetic {
            token: token.to_string(),
            alternatives,
            literal: quote_phrase(token),
        }
    }
}
