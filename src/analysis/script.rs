//! Script segmentation for mixed Latin/Chinese tokens.
//!
//! A whitespace-delimited token such as `ABC中文DEF` is split into maximal runs of a
//! single script class so that each run can be routed on its own. Tokens containing
//! anything other than letters and Han ideographs (digits, punctuation, symbols) are
//! never split: [`segment`] returns `None` and the caller keeps the token whole.
//!
//! # Examples
//!
//! ```
//! use pinyin_fts::analysis::script::{segment, ScriptClass};
//!
//! let runs = segment("ABC中文DEF").unwrap();
//! assert_eq!(runs.len(), 3);
//! assert_eq!(runs[1].text, "中文");
//! assert_eq!(runs[1].class, ScriptClass::Cjk);
//!
//! // Digits veto segmentation for the whole token.
//! assert!(segment("abc123").is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Script class of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptClass {
    /// Alphabetic characters outside the Han script.
    Latin,
    /// Han ideographs.
    Cjk,
    /// Digits, punctuation, symbols, whitespace and everything else.
    Other,
}

impl ScriptClass {
    /// Classify a single character.
    pub fn of(c: char) -> Self {
        if is_han(c) {
            ScriptClass::Cjk
        } else if c.is_alphabetic() {
            ScriptClass::Latin
        } else {
            ScriptClass::Other
        }
    }
}

impl fmt::Display for ScriptClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScriptClass::Latin => "latin",
            ScriptClass::Cjk => "cjk",
            ScriptClass::Other => "other",
        };
        f.write_str(name)
    }
}

/// A maximal run of one script class within a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRun {
    pub text: String,
    pub class: ScriptClass,
}

impl ScriptRun {
    fn new(text: String, class: ScriptClass) -> Self {
        ScriptRun { text, class }
    }
}

/// Returns true for code points of the Han script.
pub fn is_han(c: char) -> bool {
    matches!(c,
        '\u{2E80}'..='\u{2E99}' |   // CJK Radicals Supplement
        '\u{2E9B}'..='\u{2EF3}' |
        '\u{2F00}'..='\u{2FD5}' |   // Kangxi Radicals
        '\u{3005}' | '\u{3007}' |
        '\u{3021}'..='\u{3029}' |
        '\u{3038}'..='\u{303B}' |
        '\u{3400}'..='\u{4DBF}' |   // CJK Extension A
        '\u{4E00}'..='\u{9FFF}' |   // CJK Unified Ideographs
        '\u{F900}'..='\u{FA6D}' |   // CJK Compatibility Ideographs
        '\u{FA70}'..='\u{FAD9}' |
        '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
        '\u{2A700}'..='\u{2B73F}' | // CJK Extension C
        '\u{2B740}'..='\u{2B81F}' | // CJK Extension D
        '\u{2B820}'..='\u{2CEAF}' | // CJK Extension E
        '\u{2CEB0}'..='\u{2EBEF}' | // CJK Extension F
        '\u{2EBF0}'..='\u{2EE5F}' | // CJK Extension I
        '\u{2F800}'..='\u{2FA1F}' | // CJK Compatibility Supplement
        '\u{30000}'..='\u{3134F}' | // CJK Extension G
        '\u{31350}'..='\u{323AF}'   // CJK Extension H
    )
}

/// Split a token into maximal runs of one script class.
///
/// Returns `None` when any character classifies as [`ScriptClass::Other`]; the token
/// must then be treated as opaque literal text. Concatenating the returned runs in
/// order always reproduces `token`.
pub fn segment(token: &str) -> Option<Vec<ScriptRun>> {
    let mut runs = Vec::new();
    let mut current = String::new();
    let mut current_class: Option<ScriptClass> = None;

    for c in token.chars() {
        let class = match ScriptClass::of(c) {
            ScriptClass::Other => return None,
            class @ (ScriptClass::Latin | ScriptClass::Cjk) => class,
        };

        match current_class {
            Some(prev) if prev != class => {
                runs.push(ScriptRun::new(std::mem::take(&mut current), prev));
            }
            _ => {}
        }
        current_class = Some(class);
        current.push(c);
    }

    if let Some(class) = current_class {
        runs.push(ScriptRun::new(current, class));
    }

    Some(runs)
}
