//! Pattern tables.
//!
//! Every table is an ordered `Vec<PatternRule>` built once behind a `Lazy`.
//! Order is part of each table's meaning: passes apply entries one after the
//! other against the progressively rewritten string, so a longer phrase has
//! to come before any shorter phrase it overlaps.

mod contractions;
mod fillers;
mod phrases;
mod vocabulary;


use crate::PatternRule;
use once_cell::sync::Lazy;

pub(crate) use fillers::{ASIDES, FILLERS, STARTERS};

/// Formal transitions and hedges ("Furthermore,", "it is important to note that").
pub(crate) static AI_PHRASES: Lazy<Vec<PatternRule>> = Lazy::new(phrases::ai_phrase_rules);

/// Intensifiers ("very", "extremely", "significantly").
pub(crate) static DRAMA: Lazy<Vec<PatternRule>> = Lazy::new(phrases::drama_rules);

/// Latinate/formal words to plain English. Deterministic.
pub(crate) static VOCABULARY: Lazy<Vec<PatternRule>> = Lazy::new(vocabulary::rules);

/// Expanded auxiliaries to contractions. Deterministic.
pub(crate) static CONTRACTIONS: Lazy<Vec<PatternRule>> = Lazy::new(contractions::rules);
