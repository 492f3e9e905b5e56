//! Offline tuning harness.
//!
//! Used to find new table entries, not by the rewrite pipeline itself. A
//! [`TuningSession`] scores a text with an AI detector, asks a completion
//! model for substitutions in each flagged sentence, applies them on top of
//! the builtin table and scores the result again.
//!
//! No network code lives here: callers provide a [`Transport`] (wrapped in
//! [`HttpClient`]) or implement [`CompletionClient`] and [`DetectionClient`]
//! directly.
//!
//! ```no_run
//! use humanizer::tuning::{HttpClient, JsonPost, JsonResponse, Transport, TuningConfig, TuningSession};
//!
//! struct MyTransport;
//!
//! impl Transport for MyTransport {
//!     fn post_json(&self, request: &JsonPost) -> humanizer::tuning::Result<JsonResponse> {
//!         unimplemented!("send {} with your HTTP client", request.url)
//!     }
//! }
//!
//! let config = TuningConfig::from_env()?;
//! let client = HttpClient::new(&MyTransport, &config);
//! let report = TuningSession::new(&client, &client, &config).run("Furthermore, it is paramount.")?;
//! println!("{:.2} -> {:.2}", report.score_before, report.score_after);
//! # Ok::<(), humanizer::tuning::TuningError>(())
//! ```

mod builtins;
mod completion;
mod config;
mod detection;
mod error;
mod replace;
mod session;
mod transport;

pub use builtins::apply_builtins;
pub use completion::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, CompletionClient, build_replacement_request,
    mine_replacements, parse_replacements,
};
pub use config::{COMPLETION_URL, DETECTION_URL, GROQ_API_KEY, SAPLING_API_KEY, TuningConfig};
pub use detection::{DetectionClient, DetectionRequest, DetectionResponse, SentenceScore};
pub use error::{Result, TuningError};
pub use replace::{Replacement, apply_replacements, cleanup};
pub use session::{TuningReport, TuningSession};
pub use transport::{HttpClient, JsonPost, JsonResponse, Transport};
