//! Text analysis for query compilation.
//!
//! Script segmentation, routing of segmented tokens, and phonetic analysis of
//! Latin-script input.

pub mod classifier;
pub mod phonetic;
pub mod script;
