use super::builtins::apply_builtins;
use super::completion::{CompletionClient, mine_replacements};
use super::config::TuningConfig;
use super::detection::{DetectionClient, DetectionRequest};
use super::error::Result;
use super::replace::{Replacement, apply_replacements, cleanup};
use serde::Serialize;

/// Outcome of one [`TuningSession::run`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TuningReport {
    pub original: String,
    pub rewritten: String,
    pub score_before: f64,
    pub score_after: f64,
    /// Sentences at or above the threshold in the first detection pass.
    pub flagged_sentences: usize,
    /// Every pair mined, in the order they were received.
    pub replacements: Vec<Replacement>,
}

impl TuningReport {
    /// Positive when the rewrite lowered the detector score.
    pub fn improvement(&self) -> f64 {
        self.score_before - self.score_after
    }
}

/// One detect, mine, rewrite, re-detect loop.
///
/// Calls are made one after another. Any client error ends the run.
pub struct TuningSession<'a> {
    completion: &'a dyn CompletionClient,
    detection: &'a dyn DetectionClient,
    config: &'a TuningConfig,
}

impl<'a> TuningSession<'a> {
    pub fn new(
        completion: &'a dyn CompletionClient,
        detection: &'a dyn DetectionClient,
        config: &'a TuningConfig,
    ) -> Self {
        TuningSession { completion, detection, config }
    }

    pub fn run(&self, text: &str) -> Result<TuningReport> {
        let before = self.detection.detect(&DetectionRequest::new(self.config, text))?;
        log::info!("[tuning] score before: {:.3}", before.score);

        let mut flagged_sentences = 0;
        let mut replacements = Vec::new();
        for flagged in before.flagged(self.config.score_threshold) {
            flagged_sentences += 1;
            log::debug!("[tuning] flagged {:.3}: {:?}", flagged.score, flagged.sentence);
            replacements.extend(mine_replacements(self.completion, self.config, &flagged.sentence)?);
        }

        let rewritten = cleanup(&apply_replacements(&apply_builtins(text), &replacements));
        let after = self.detection.detect(&DetectionRequest::new(self.config, &rewritten))?;
        log::info!(
            "[tuning] score after: {:.3} ({} flagged, {} replacements)",
            after.score,
            flagged_sentences,
            replacements.len()
        );

        Ok(TuningReport {
            original: text.to_string(),
            rewritten,
            score_before: before.score,
            score_after: after.score,
            flagged_sentences,
            replacements,
        })
    }
}
