//! No-op phonetic analyzer.

use crate::analysis::phonetic::{PhoneticAnalyzer, PhoneticGroup};

/// A phonetic analyzer that never produces candidates.
///
/// With it every token compiles to a literal phrase, which is the plain
/// search used for free-text bodies such as chat messages.
#[derive(Clone, Debug, Default)]
pub struct NoopPhoneticAnalyzer;

impl NoopPhoneticAnalyzer {
    pub fn new() -> Self {
        NoopPhoneticAnalyzer
    }
}

impl PhoneticAnalyzer for NoopPhoneticAnalyzer {
    fn decompose(&self, _text: &str) -> Vec<PhoneticGroup> {
        Vec::new()
    }

    fn initials(&self, _text: &str) -> String {
        String::new()
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
