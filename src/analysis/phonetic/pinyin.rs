//! Dictionary-based pinyin analyzer.
//!
//! Splits ASCII input into every sequence of complete Mandarin syllables that spells
//! it exactly. `xian` reads both as `xian` and as `xi an`; both are returned so the
//! compiler can offer each reading as an alternative.

use log::debug;

use crate::analysis::classifier::is_phonetic_eligible;
use crate::analysis::phonetic::syllables::{self, MAX_SYLLABLE_LEN};
use crate::analysis::phonetic::{PhoneticAnalyzer, PhoneticGroup};

/// Default cap on the decompositions returned per input.
pub const DEFAULT_MAX_CANDIDATES: usize = 16;

/// Upper bound on segmentations enumerated before sorting.
const MAX_ENUMERATED: usize = 256;

/// Pinyin analyzer backed by the static syllable table.
#[derive(Clone, Debug)]
pub struct PinyinAnalyzer {
    max_candidates: usize,
}

impl Default for PinyinAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PinyinAnalyzer {
    pub fn new() -> Self {
        PinyinAnalyzer {
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Limit the number of decompositions returned. Values below one are raised to one.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates.max(1);
        self
    }

    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    /// Decompositions ordered by syllable count, then lexicographically.
    fn segmentations(&self, text: &str) -> Vec<Vec<String>> {
        if !is_phonetic_eligible(text) {
            return Vec::new();
        }
        let input = text.to_ascii_lowercase();
        let n = input.len();

        // reachable[i]: input[i..] splits into complete syllables
        let mut reachable = vec![false; n + 1];
        reachable[n] = true;
        for i in (0..n).rev() {
            reachable[i] = (1..=MAX_SYLLABLE_LEN.min(n - i))
                .any(|len| reachable[i + len] && syllables::is_syllable(&input[i..i + len]));
        }
        if !reachable[0] {
            return Vec::new();
        }

        let mut found = Vec::new();
        let mut path = Vec::new();
        walk(&input, 0, &reachable, &mut path, &mut found);

        found.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        found.truncate(self.max_candidates);
        found
            .into_iter()
            .map(|seg| seg.into_iter().map(str::to_string).collect())
            .collect()
    }
}

fn walk<'a>(
    input: &'a str,
    start: usize,
    reachable: &[bool],
    path: &mut Vec<&'a str>,
    found: &mut Vec<Vec<&'a str>>,
) {
    if found.len() >= MAX_ENUMERATED {
        return;
    }
    if start == input.len() {
        found.push(path.clone());
        return;
    }

    let longest = MAX_SYLLABLE_LEN.min(input.len() - start);
    for len in (1..=longest).rev() {
        let end = start + len;
        let piece = &input[start..end];
        if reachable[end] && syllables::is_syllable(piece) {
            path.push(piece);
            walk(input, end, reachable, path, found);
            path.pop();
        }
    }
}

impl PhoneticAnalyzer for PinyinAnalyzer {
    fn decompose(&self, text: &str) -> Vec<PhoneticGroup> {
        let groups: Vec<PhoneticGroup> = self
            .segmentations(text)
            .into_iter()
            .map(PhoneticGroup::new)
            .collect();
        debug!("pinyin decompose {text:?}: {} candidate(s)", groups.len());
        groups
    }

    fn initials(&self, text: &str) -> String {
        match self.segmentations(text).into_iter().next() {
            Some(best) if best.len() >= 2 => best
                .iter()
                .filter_map(|syllable| syllable.chars().next())
                .collect(),
            _ => String::new(),
        }
    }

    fn name(&self) -> &'static str {
        "pinyin"
    }
}
