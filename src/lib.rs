extern crate self as humanizer;

use rand::Rng;
use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;
mod text;

pub mod tuning;

pub use api::{
    DiffResult, HumanizeVerbose, Intensity, Options, ParseIntensityError, ParseToneError, PassTrace, RunDetails, Tone,
    humanize_text, humanize_text_with, humanize_verbose_with, humanize_with_diff, humanize_with_diff_with,
};
pub use engine::{
    HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, Pass, PassSet, add_burstiness, add_burstiness_with, add_contractions,
    insert_asides, insert_asides_with, insert_fillers, insert_fillers_with, insert_sentence_starters,
    insert_sentence_starters_with, novelty_diff, replace_ai_phrases, replace_ai_phrases_with, simplify_vocabulary,
    strip_highlights,
};
pub use text::{normalize_whitespace, split_sentences};

// --- Internal types ---------------------------------------------------------

/// What a matched pattern is rewritten to.
///
/// `Choice` lists are never empty: the `rule!`/`phrase!` macros require at
/// least one candidate.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Resolution {
    Fixed(&'static str),
    Choice(&'static [&'static str]),
}

impl Resolution {
    /// Pick the replacement for one match. Every match draws independently.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        match self {
            Resolution::Fixed(s) => s,
            Resolution::Choice(candidates) => candidates[rng.gen_range(0..candidates.len())],
        }
    }

    /// All strings this resolution can produce.
    pub fn candidates(&self) -> &[&'static str] {
        match self {
            Resolution::Fixed(s) => std::slice::from_ref(s),
            Resolution::Choice(candidates) => candidates,
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, Resolution::Choice(_))
    }
}

/// One table entry: a case-insensitive, boundary-anchored matcher and its
/// resolution. `name` is the phrase the rule targets; traces and order tests
/// refer to rules by it.
pub(crate) struct PatternRule {
    pub name: &'static str,
    pub matcher: Regex,
    pub resolution: Resolution,
}

impl PatternRule {
    pub fn new(name: &'static str, matcher: Regex, resolution: Resolution) -> Self {
        PatternRule { name, matcher, resolution }
    }
}

impl std::fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.name)
            .field("matcher", &self.matcher.as_str())
            .field("resolution", &self.resolution)
            .finish()
    }
}
