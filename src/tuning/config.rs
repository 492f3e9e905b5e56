use super::error::{Result, TuningError};

pub const COMPLETION_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DETECTION_URL: &str = "https://api.sapling.ai/api/v1/aidetect";

pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
pub const SAPLING_API_KEY: &str = "SAPLING_API_KEY";

const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Settings for a tuning session.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningConfig {
    /// Bearer token for the completion endpoint.
    pub completion_key: String,
    /// Key sent in the detection request body.
    pub detection_key: String,
    pub completion_url: String,
    pub detection_url: String,
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    /// Sentences scoring at or above this are sent for replacement mining.
    /// `0.0` mines every sentence the detector returns.
    pub score_threshold: f64,
}

impl TuningConfig {
    pub fn new(completion_key: impl Into<String>, detection_key: impl Into<String>) -> Self {
        TuningConfig {
            completion_key: completion_key.into(),
            detection_key: detection_key.into(),
            completion_url: COMPLETION_URL.to_string(),
            detection_url: DETECTION_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 512,
            score_threshold: 0.5,
        }
    }

    /// Read `GROQ_API_KEY` and `SAPLING_API_KEY` from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`TuningConfig::from_env`], reading variables through `lookup`.
    /// Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &'static str| {
            lookup(name).filter(|v| !v.trim().is_empty()).ok_or(TuningError::MissingKey(name))
        };
        Ok(Self::new(get(GROQ_API_KEY)?, get(SAPLING_API_KEY)?))
    }
}
