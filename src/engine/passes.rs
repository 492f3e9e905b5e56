//! Lexical passes: phrase/drama replacement, vocabulary simplification and
//! contraction formation. Only the phrase pass draws random numbers.

use super::apply::{apply_fixed_table, apply_table};
use crate::rules::{AI_PHRASES, CONTRACTIONS, DRAMA, VOCABULARY};
use rand::Rng;

/// Soften formal transitions, hedges and intensifiers using fresh randomness.
pub fn replace_ai_phrases(text: &str) -> String {
    replace_ai_phrases_with(text, &mut rand::thread_rng())
}

/// Soften formal transitions, hedges and intensifiers.
///
/// Applies the AI-phrase table, then the drama table. Each match draws its
/// own replacement from `rng`.
pub fn replace_ai_phrases_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let softened = apply_table(text, &AI_PHRASES, rng);
    apply_table(&softened, &DRAMA, rng)
}

/// Swap formal vocabulary for plain words ("utilize" -> "use").
pub fn simplify_vocabulary(text: &str) -> String {
    apply_fixed_table(text, &VOCABULARY)
}

/// Contract auxiliaries ("do not" -> "don't", "it is" -> "it's").
pub fn add_contractions(text: &str) -> String {
    apply_fixed_table(text, &CONTRACTIONS)
}
