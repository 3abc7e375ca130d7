//! Phonetic analysis of Latin-script input.
//!
//! A [`PhoneticAnalyzer`] reads a string of ASCII letters as Chinese phonetics. It
//! returns every plausible way of splitting the input into syllables, plus an
//! abbreviated "initials" reading. The clause compiler consumes analyzers only
//! through this trait.
//!
//! # Available Implementations
//!
//! - [`PinyinAnalyzer`](pinyin::PinyinAnalyzer) - Segments input against the Mandarin syllable table
//! - [`NoopPhoneticAnalyzer`](noop::NoopPhoneticAnalyzer) - Never produces candidates
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use pinyin_fts::analysis::phonetic::{PhoneticAnalyzer, PhoneticGroup};
//!
//! struct FixedAnalyzer;
//!
//! impl PhoneticAnalyzer for FixedAnalyzer {
//!     fn decompose(&self, _text: &str) -> Vec<PhoneticGroup> {
//!         vec![PhoneticGroup::from(vec!["ni", "hao"])]
//!     }
//!
//!     fn initials(&self, _text: &str) -> String {
//!         "nh".to_string()
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "fixed"
//!     }
//! }
//! ```

pub mod ambiguity;
pub mod noop;
pub mod pinyin;
pub mod syllables;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::ambiguity::AmbiguitySet;
pub use self::noop::NoopPhoneticAnalyzer;
pub use self::pinyin::PinyinAnalyzer;

/// One candidate reading of a Latin token: an ordered sequence of syllables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneticGroup(Vec<String>);

impl PhoneticGroup {
    pub fn new(syllables: Vec<String>) -> Self {
        PhoneticGroup(syllables)
    }

    pub fn syllables(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_syllables(self) -> Vec<String> {
        self.0
    }

    /// A group is well formed when it has at least one syllable and every syllable
    /// is a non-empty run of ASCII letters or digits that is not a match operator.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && self.0.iter().all(|s| {
                !s.is_empty()
                    && s.bytes().all(|b| b.is_ascii_alphanumeric())
                    && !is_match_keyword(s)
            })
    }
}

/// FTS5 reads these bare words as operators rather than terms.
const MATCH_KEYWORDS: [&str; 4] = ["AND", "OR", "NOT", "NEAR"];

fn is_match_keyword(word: &str) -> bool {
    MATCH_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(word))
}

impl<S: Into<String>> From<Vec<S>> for PhoneticGroup {
    fn from(syllables: Vec<S>) -> Self {
        PhoneticGroup(syllables.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for PhoneticGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Trait for analyzers that read Latin text as Chinese phonetics.
///
/// Implementations must be deterministic and safe for concurrent read-only use.
pub trait PhoneticAnalyzer: Send + Sync {
    /// All candidate syllable decompositions of `text`. May be empty.
    fn decompose(&self, text: &str) -> Vec<PhoneticGroup>;

    /// The abbreviated first-letter-per-syllable reading of `text`. May be empty.
    fn initials(&self, text: &str) -> String;

    /// Get the name of this analyzer (for logging and CLI output).
    fn name(&self) -> &'static str;
}
