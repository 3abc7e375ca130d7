//! Syllables that need explicit phrase boundaries when they are not last.
//!
//! A syllable such as `xi` is also the start of `xian`, `xiang`, `xiao`... Placed
//! mid-phrase and left bare, the engine's pinyin tokenizer may read it as the prefix
//! of a longer syllable. The clause builder quotes members of this set together with
//! a boundary sentinel.

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::phonetic::syllables;

static STANDARD: LazyLock<Arc<AmbiguitySet>> = LazyLock::new(|| {
    let table = syllables::all();
    let ambiguous = table.iter().filter(|s| {
        s.len() >= 2
            && table
                .iter()
                .any(|other| other.len() > s.len() && other.starts_with(**s))
    });
    Arc::new(AmbiguitySet::from_syllables(ambiguous.copied()))
});

/// Immutable set of ambiguous syllables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbiguitySet {
    syllables: AHashSet<String>,
}

impl AmbiguitySet {
    /// The shared standard set: every syllable of two or more letters that is a
    /// strict prefix of another syllable in the table.
    pub fn standard() -> Arc<AmbiguitySet> {
        Arc::clone(&STANDARD)
    }

    pub fn from_syllables<I, S>(syllables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AmbiguitySet {
            syllables: syllables.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, syllable: &str) -> bool {
        self.syllables.contains(syllable)
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}
