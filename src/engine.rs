//! Rewriting engine.
//!
//! The engine is split into focused submodules under `src/engine/`; the
//! public API in `api.rs` only talks to [`Pipeline`] and [`novelty_diff`].
//!
//! ## How the parts work together
//!
//! ```text
//! rules (tables) ──┐
//!                  │  apply_table / apply_fixed_table   (apply.rs)
//!                  v
//! input ── Pipeline::run (pipeline.rs)
//!            - replace_ai_phrases        (passes.rs)
//!            - simplify_vocabulary       (passes.rs)
//!            - add_contractions          (passes.rs)
//!            - add_burstiness            (burstiness.rs, balanced/heavy)
//!            - starters/fillers/asides   (optional.rs, opt-in)
//!            - normalize whitespace
//!                  │
//!                  v
//!            rewritten text ── novelty_diff (diff.rs) ── { html, plain }
//! ```
//!
//! ## Responsibilities by module
//!
//! - `apply.rs`: one global scan per table entry, per-match candidate draws,
//!   case carry-over.
//! - `passes.rs`: the three lexical passes.
//! - `burstiness.rs`: probabilistic sentence splitting.
//! - `optional.rs`: filler, aside and starter insertion (off by default).
//! - `pipeline.rs`: `PassSet`, `Pass` and the orchestrating `Pipeline`.
//! - `diff.rs`: presence-set word diff and highlight markers.
//! - `metrics.rs`: per-pass timings for verbose runs.
//!
//! ## Randomness
//!
//! Every function that draws takes `&mut R where R: Rng + ?Sized`; the
//! argument-free variants use `rand::thread_rng()`. Nothing is shared
//! between calls.
//!
//! ## Debugging
//!
//! Passes log through the `log` facade: `debug` per pass and per split,
//! `trace` per table rule that matched. The CLI wires this to `RUST_LOG`.

#[path = "engine/apply.rs"]
mod apply;
#[path = "engine/burstiness.rs"]
mod burstiness;
#[path = "engine/diff.rs"]
mod diff;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/optional.rs"]
mod optional;
#[path = "engine/passes.rs"]
mod passes;
#[path = "engine/pipeline.rs"]
mod pipeline;


pub(crate) use apply::apply_fixed_table;
pub use burstiness::{add_burstiness, add_burstiness_with};
pub use diff::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, novelty_diff, strip_highlights};
#[allow(unused_imports)]
pub use metrics::{PassMetrics, RunMetrics, RunResult};
pub use optional::{
    insert_asides, insert_asides_with, insert_fillers, insert_fillers_with, insert_sentence_starters,
    insert_sentence_starters_with,
};
pub use passes::{add_contractions, replace_ai_phrases, replace_ai_phrases_with, simplify_vocabulary};
pub use pipeline::{Pass, PassSet, Pipeline};
