//! Flat phrase lists for the optional passes (`engine::optional`).
//!
//! None of these are used by the default pipeline: inserted fillers, asides
//! and conversational starters read as AI tells themselves, so they stay
//! opt-in.

/// Words slipped into a sentence after its first clause or in front of it.
pub(crate) const FILLERS: &[&str] = &[
    "honestly",
    "basically",
    "actually",
    "really",
    "frankly",
    "to be fair",
    "in a way",
];

/// Parenthetical asides placed before a sentence's final punctuation.
pub(crate) const ASIDES: &[&str] = &[
    "(at least in my experience)",
    "(which is kind of the point)",
    "(more or less)",
    "(surprisingly)",
    "(if that makes sense)",
    "(or so it seems)",
];

/// Conversational openers put in front of a sentence.
pub(crate) const STARTERS: &[&str] = &[
    "look,",
    "the thing is,",
    "so,",
    "see,",
    "here's the thing:",
    "truth is,",
    "honestly,",
];
