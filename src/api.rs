use crate::engine::{self, PassSet, Pipeline};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How aggressively the pipeline rewrites.
///
/// The lexical passes run at every intensity. `Balanced` and `Heavy` also
/// split long sentences; the intensity also sets how often the opt-in passes
/// fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Balanced,
    #[default]
    Heavy,
}

impl Intensity {
    /// Whether the burstiness pass runs at this intensity.
    pub fn splits_sentences(self) -> bool {
        matches!(self, Intensity::Balanced | Intensity::Heavy)
    }

    pub fn filler_probability(self) -> f64 {
        match self {
            Intensity::Light => 0.05,
            Intensity::Balanced => 0.10,
            Intensity::Heavy => 0.20,
        }
    }

    pub fn aside_probability(self) -> f64 {
        match self {
            Intensity::Light => 0.03,
            Intensity::Balanced => 0.07,
            Intensity::Heavy => 0.12,
        }
    }

    pub fn starter_probability(self) -> f64 {
        match self {
            Intensity::Light => 0.05,
            Intensity::Balanced => 0.10,
            Intensity::Heavy => 0.15,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Balanced => "balanced",
            Intensity::Heavy => "heavy",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown intensity '{0}' (expected light, balanced or heavy)")]
pub struct ParseIntensityError(pub String);

impl FromStr for Intensity {
    type Err = ParseIntensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Intensity::Light),
            "balanced" => Ok(Intensity::Balanced),
            "heavy" => Ok(Intensity::Heavy),
            _ => Err(ParseIntensityError(s.to_string())),
        }
    }
}

/// Requested tone of voice.
///
/// Accepted so callers can pass it through, but no rule reads it yet: the
/// output is the same for every tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Natural,
    Casual,
    Formal,
    Academic,
    Creative,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tone '{0}' (expected natural, casual, formal, academic or creative)")]
pub struct ParseToneError(pub String);

impl FromStr for Tone {
    type Err = ParseToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "natural" => Ok(Tone::Natural),
            "casual" => Ok(Tone::Casual),
            "formal" => Ok(Tone::Formal),
            "academic" => Ok(Tone::Academic),
            "creative" => Ok(Tone::Creative),
            _ => Err(ParseToneError(s.to_string())),
        }
    }
}

/// Options that affect a rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub intensity: Intensity,
    /// Passed through from callers; has no effect on the rules.
    pub tone: Tone,
    /// Passes to run. Burstiness is dropped for `Light` regardless.
    pub passes: PassSet,
}

impl Options {
    /// The default pipeline for `intensity`.
    pub fn new(intensity: Intensity) -> Self {
        Options { intensity, tone: Tone::default(), passes: PassSet::canonical(intensity) }
    }

    /// Enable extra passes on top of the current selection.
    pub fn with_passes(mut self, extra: PassSet) -> Self {
        self.passes |= extra;
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::new(Intensity::default())
    }
}

/// Rewritten text plus an HTML view highlighting new words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    /// `plain` with novel words wrapped in `<span class="highlight">`.
    pub html: String,
    /// The rewritten text.
    pub plain: String,
    /// Number of highlighted words.
    pub changed_words: usize,
}

/// A compact per-pass trace.
#[derive(Debug, Clone, Serialize)]
pub struct PassTrace {
    pub pass: &'static str,
    pub duration: Duration,
    pub changed: bool,
    pub sentences_before: usize,
    pub sentences_after: usize,
}

/// Additional details returned by [`humanize_verbose_with`].
#[derive(Debug, Clone, Serialize)]
pub struct RunDetails {
    pub total: Duration,
    pub passes: Vec<PassTrace>,
    pub normalize: Duration,
    /// Names of the passes that ran, in order.
    pub active_passes: Vec<&'static str>,
}

/// Result from [`humanize_verbose_with`].
#[derive(Debug, Clone, Serialize)]
pub struct HumanizeVerbose {
    pub text: String,
    pub output: String,
    pub intensity: Intensity,
    pub tone: Tone,
    pub details: RunDetails,
}

/// Rewrite `text` with the default pipeline for `intensity`.
///
/// # Example
/// ```
/// use humanizer::{Intensity, humanize_text};
///
/// let out = humanize_text("We do not   utilize it.", Intensity::Light);
/// assert_eq!(out, "We don't use it.");
/// ```
pub fn humanize_text(text: &str, intensity: Intensity) -> String {
    humanize_text_with(text, &Options::new(intensity), &mut rand::thread_rng())
}

/// Rewrite `text` with explicit options and randomness source.
///
/// Use a seeded `StdRng` for reproducible output.
pub fn humanize_text_with<R: rand::Rng + ?Sized>(text: &str, options: &Options, rng: &mut R) -> String {
    Pipeline::new(options).run(text, rng)
}

/// Rewrite `text` and return both the plain result and a highlighted HTML view.
pub fn humanize_with_diff(text: &str, intensity: Intensity) -> DiffResult {
    humanize_with_diff_with(text, &Options::new(intensity), &mut rand::thread_rng())
}

pub fn humanize_with_diff_with<R: rand::Rng + ?Sized>(text: &str, options: &Options, rng: &mut R) -> DiffResult {
    let plain = humanize_text_with(text, options, rng);
    let (html, changed_words) = engine::novelty_diff(text, &plain);
    DiffResult { html, plain, changed_words }
}

/// Rewrite `text` and return per-pass traces alongside the output.
///
/// The plain [`humanize_text_with`] path does not collect these.
pub fn humanize_verbose_with<R: rand::Rng + ?Sized>(text: &str, options: &Options, rng: &mut R) -> HumanizeVerbose {
    let pipeline = Pipeline::new(options);
    let active_passes = pipeline.active_passes().into_iter().map(|p| p.name()).collect();
    let run = pipeline.run_with_metrics(text, rng);

    let passes = run
        .metrics
        .passes
        .iter()
        .map(|m| PassTrace {
            pass: m.pass.name(),
            duration: m.duration,
            changed: m.changed,
            sentences_before: m.sentences_before,
            sentences_after: m.sentences_after,
        })
        .collect();

    HumanizeVerbose {
        text: text.to_string(),
        output: run.output,
        intensity: options.intensity,
        tone: options.tone,
        details: RunDetails { total: run.metrics.total, passes, normalize: run.metrics.normalize, active_passes },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_parses_case_insensitively() {
        assert_eq!("Heavy".parse::<Intensity>(), Ok(Intensity::Heavy));
        assert_eq!(" light ".parse::<Intensity>(), Ok(Intensity::Light));
        assert!("extreme".parse::<Intensity>().is_err());
        assert_eq!(Intensity::default(), Intensity::Heavy);
    }

    #[test]
    fn tone_parses() {
        assert_eq!("academic".parse::<Tone>(), Ok(Tone::Academic));
        assert!("snarky".parse::<Tone>().is_err());
    }

    #[test]
    fn options_default_to_canonical_heavy() {
        let opts = Options::default();
        assert_eq!(opts.intensity, Intensity::Heavy);
        assert_eq!(opts.passes, PassSet::LEXICAL | PassSet::BURSTINESS);
        assert_eq!(Options::new(Intensity::Light).passes, PassSet::LEXICAL);
    }

    #[test]
    fn with_passes_adds_flags() {
        let opts = Options::new(Intensity::Balanced).with_passes(PassSet::FILLERS);
        assert!(opts.passes.contains(PassSet::FILLERS | PassSet::BURSTINESS));
    }

    #[test]
    fn diff_result_serializes() {
        let result = DiffResult { html: "a".into(), plain: "a".into(), changed_words: 0 };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"html":"a","plain":"a","changed_words":0}"#);
    }
}
