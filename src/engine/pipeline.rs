//! Pass selection and orchestration.
//!
//! ```text
//! input ── phrases ── vocabulary ── contractions ──┐
//!                                                  │ balanced / heavy only
//!                                          burstiness
//!                                                  │ opt-in (PassSet)
//!                              starters ── fillers ── asides
//!                                                  │
//!                                  whitespace normalization ── output
//! ```
//!
//! Pass order is fixed; `PassSet` only decides which passes run. Burstiness
//! is additionally gated on intensity, so `light` never splits sentences no
//! matter which flags are set.

use super::burstiness::add_burstiness_with;
use super::metrics::{PassMetrics, RunMetrics, RunResult};
use super::optional::{insert_asides_with, insert_fillers_with, insert_sentence_starters_with};
use super::passes::{add_contractions, replace_ai_phrases_with, simplify_vocabulary};
use crate::api::{Intensity, Options};
use crate::text::{normalize_whitespace, sentence_count};
use rand::Rng;
use std::time::Instant;

bitflags::bitflags! {
    /// Which passes a run applies.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PassSet: u8 {
        const PHRASES      = 1 << 0;
        const VOCABULARY   = 1 << 1;
        const CONTRACTIONS = 1 << 2;
        const BURSTINESS   = 1 << 3;
        const STARTERS     = 1 << 4;
        const FILLERS      = 1 << 5;
        const ASIDES       = 1 << 6;

        const LEXICAL  = Self::PHRASES.bits() | Self::VOCABULARY.bits() | Self::CONTRACTIONS.bits();
        const OPTIONAL = Self::STARTERS.bits() | Self::FILLERS.bits() | Self::ASIDES.bits();
    }
}

impl PassSet {
    /// The default pipeline for `intensity`: the lexical passes, plus
    /// burstiness for `balanced` and `heavy`.
    pub fn canonical(intensity: Intensity) -> Self {
        match intensity {
            Intensity::Light => PassSet::LEXICAL,
            Intensity::Balanced | Intensity::Heavy => PassSet::LEXICAL | PassSet::BURSTINESS,
        }
    }

    /// The passes that actually run for `intensity`.
    pub fn effective(self, intensity: Intensity) -> Self {
        if intensity.splits_sentences() { self } else { self - PassSet::BURSTINESS }
    }
}

/// A single pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    Phrases,
    Vocabulary,
    Contractions,
    Burstiness,
    Starters,
    Fillers,
    Asides,
}

impl Pass {
    /// Execution order.
    pub const ORDER: [Pass; 7] = [
        Pass::Phrases,
        Pass::Vocabulary,
        Pass::Contractions,
        Pass::Burstiness,
        Pass::Starters,
        Pass::Fillers,
        Pass::Asides,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pass::Phrases => "phrases",
            Pass::Vocabulary => "vocabulary",
            Pass::Contractions => "contractions",
            Pass::Burstiness => "burstiness",
            Pass::Starters => "starters",
            Pass::Fillers => "fillers",
            Pass::Asides => "asides",
        }
    }

    pub fn flag(self) -> PassSet {
        match self {
            Pass::Phrases => PassSet::PHRASES,
            Pass::Vocabulary => PassSet::VOCABULARY,
            Pass::Contractions => PassSet::CONTRACTIONS,
            Pass::Burstiness => PassSet::BURSTINESS,
            Pass::Starters => PassSet::STARTERS,
            Pass::Fillers => PassSet::FILLERS,
            Pass::Asides => PassSet::ASIDES,
        }
    }

    fn apply<R: Rng + ?Sized>(self, text: &str, intensity: Intensity, rng: &mut R) -> String {
        match self {
            Pass::Phrases => replace_ai_phrases_with(text, rng),
            Pass::Vocabulary => simplify_vocabulary(text),
            Pass::Contractions => add_contractions(text),
            Pass::Burstiness => add_burstiness_with(text, rng),
            Pass::Starters => insert_sentence_starters_with(text, intensity, rng),
            Pass::Fillers => insert_fillers_with(text, intensity, rng),
            Pass::Asides => insert_asides_with(text, intensity, rng),
        }
    }
}

/// Runs the selected passes over one input.
#[derive(Debug, Clone)]
pub struct Pipeline {
    intensity: Intensity,
    passes: PassSet,
}

impl Pipeline {
    pub fn new(options: &Options) -> Self {
        Pipeline { intensity: options.intensity, passes: options.passes.effective(options.intensity) }
    }

    /// Passes this pipeline runs, in execution order.
    pub fn active_passes(&self) -> Vec<Pass> {
        Pass::ORDER.into_iter().filter(|p| self.passes.contains(p.flag())).collect()
    }

    pub fn run<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        let mut current = text.to_string();
        for pass in self.active_passes() {
            current = pass.apply(&current, self.intensity, &mut *rng);
        }
        normalize_whitespace(&current)
    }

    pub fn run_with_metrics<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> RunResult {
        let start = Instant::now();
        let mut metrics = RunMetrics::default();
        let mut current = text.to_string();

        for pass in self.active_passes() {
            let pass_start = Instant::now();
            let sentences_before = sentence_count(&current);
            let next = pass.apply(&current, self.intensity, &mut *rng);
            let pass_metrics = PassMetrics {
                pass,
                duration: pass_start.elapsed(),
                changed: next != current,
                sentences_before,
                sentences_after: sentence_count(&next),
            };
            log::debug!(
                "[pass] name={} changed={} sentences={}->{}",
                pass.name(),
                pass_metrics.changed,
                pass_metrics.sentences_before,
                pass_metrics.sentences_after
            );
            metrics.passes.push(pass_metrics);
            current = next;
        }

        let normalize_start = Instant::now();
        let output = normalize_whitespace(&current);
        metrics.normalize = normalize_start.elapsed();
        metrics.total = start.elapsed();

        RunResult { output, metrics }
    }
}
