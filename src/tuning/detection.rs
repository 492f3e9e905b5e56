use super::config::TuningConfig;
use super::error::Result;
use serde::{Deserialize, Serialize};

/// Body of an AI-detection request. Sentence scores are always requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionRequest {
    pub key: String,
    pub text: String,
    pub sent_scores: bool,
}

impl DetectionRequest {
    pub fn new(config: &TuningConfig, text: &str) -> Self {
        DetectionRequest { key: config.detection_key.clone(), text: text.to_string(), sent_scores: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceScore {
    pub sentence: String,
    pub score: f64,
}

/// Detector verdict. `score` runs from 0 (human) to 1 (generated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub score: f64,
    #[serde(default)]
    pub sentence_scores: Vec<SentenceScore>,
}

impl DetectionResponse {
    /// Sentences scoring at or above `threshold`, in document order.
    pub fn flagged(&self, threshold: f64) -> impl Iterator<Item = &SentenceScore> {
        self.sentence_scores.iter().filter(move |s| s.score >= threshold)
    }
}

/// Sends AI-detection requests.
pub trait DetectionClient {
    fn detect(&self, request: &DetectionRequest) -> Result<DetectionResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_always_asks_for_sentence_scores() {
        let config = TuningConfig::new("a", "sapling");
        let json = serde_json::to_value(DetectionRequest::new(&config, "Text.")).unwrap();
        assert_eq!(json, serde_json::json!({"key": "sapling", "text": "Text.", "sent_scores": true}));
    }

    #[test]
    fn response_without_sentence_scores_decodes() {
        let response: DetectionResponse = serde_json::from_str(r#"{"score": 0.9}"#).unwrap();
        assert_eq!(response.score, 0.9);
        assert!(response.sentence_scores.is_empty());
    }

    #[test]
    fn flagged_filters_by_threshold() {
        let response: DetectionResponse = serde_json::from_str(
            r#"{"score": 0.7, "sentence_scores": [
                {"sentence": "A.", "score": 0.2},
                {"sentence": "B.", "score": 0.5},
                {"sentence": "C.", "score": 0.99}
            ]}"#,
        )
        .unwrap();
        let flagged: Vec<&str> = response.flagged(0.5).map(|s| s.sentence.as_str()).collect();
        assert_eq!(flagged, vec!["B.", "C."]);
    }
}
