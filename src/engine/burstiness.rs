//! Sentence splitting ("burstiness").
//!
//! Uniform sentence length is one of the signals AI detectors key on. This
//! pass breaks some long sentences in two, either at the first comma or at a
//! standalone "and"/"but", which is the only structural change the default
//! pipeline makes.

use crate::text::{capitalize_first, split_sentences};
use rand::Rng;

const COMMA_SPLIT_MIN_CHARS: usize = 60;
const COMMA_SPLIT_PROBABILITY: f64 = 0.5;
const CONNECTOR_SPLIT_MIN_CHARS: usize = 80;
const CONNECTOR_SPLIT_PROBABILITY: f64 = 0.4;

/// Split long sentences using fresh randomness.
pub fn add_burstiness(text: &str) -> String {
    add_burstiness_with(text, &mut rand::thread_rng())
}

/// Split long sentences, drawing the split decisions from `rng`.
///
/// Per sentence, in order:
/// 1. longer than 60 chars, has a comma, and a p=0.5 draw succeeds: split at
///    the first comma;
/// 2. otherwise, longer than 80 chars and a p=0.4 draw succeeds: split before
///    the first standalone "and"/"but" found after at least 30 chars;
/// 3. otherwise unchanged.
///
/// Sentences are rejoined with single spaces.
pub fn add_burstiness_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    split_sentences(text).into_iter().map(|sentence| vary_sentence(sentence, &mut *rng)).collect::<Vec<_>>().join(" ")
}

fn vary_sentence<R: Rng + ?Sized>(sentence: &str, rng: &mut R) -> String {
    let len = sentence.chars().count();

    if len > COMMA_SPLIT_MIN_CHARS && sentence.contains(',') && rng.gen_bool(COMMA_SPLIT_PROBABILITY) {
        return match split_at_comma(sentence) {
            Some(split) => {
                log::debug!("[burstiness] comma split len={}", len);
                split
            }
            None => sentence.to_string(),
        };
    }

    if len > CONNECTOR_SPLIT_MIN_CHARS && rng.gen_bool(CONNECTOR_SPLIT_PROBABILITY) {
        if let Some(split) = split_at_connector(sentence) {
            log::debug!("[burstiness] connector split len={}", len);
            return split;
        }
    }

    sentence.to_string()
}

/// "A, b, c." -> "A. B, c." Later commas stay in the second sentence.
fn split_at_comma(sentence: &str) -> Option<String> {
    let (head, tail) = sentence.split_once(',')?;
    let head = head.trim().trim_end_matches([';', ':']);
    let tail = tail.trim();
    if head.is_empty() || !tail.chars().any(char::is_alphanumeric) {
        return None;
    }
    Some(format!("{}. {}", head, capitalize_first(tail)))
}

/// "<30+ chars> and rest" -> "<30+ chars>. And rest"
fn split_at_connector(sentence: &str) -> Option<String> {
    let caps = regex!(r"(?i)^(.{30,}?)\s+(and|but)\s+(.+)$").captures(sentence)?;
    let head = caps[1].trim_end().trim_end_matches([',', ';', ':']);
    if head.is_empty() {
        return None;
    }
    Some(format!("{}. {} {}", head, capitalize_first(&caps[2]), &caps[3]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    /// Every `gen_bool` draw succeeds.
    fn always() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Every `gen_bool` draw fails.
    fn never() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    const COMMA_SENTENCE: &str =
        "When the weather turns cold in the northern valleys, farmers bring their herds down early.";
    const CONNECTOR_SENTENCE: &str =
        "The committee reviewed every single proposal in great detail and then selected the second one for funding.";

    #[test]
    fn splits_at_first_comma() {
        assert_eq!(
            add_burstiness_with(COMMA_SENTENCE, &mut always()),
            "When the weather turns cold in the northern valleys. Farmers bring their herds down early."
        );
    }

    #[test]
    fn later_commas_stay_in_second_sentence() {
        let input = "Although the forecast looked grim for most of the week, we went anyway, and it was lovely.";
        assert_eq!(
            add_burstiness_with(input, &mut always()),
            "Although the forecast looked grim for most of the week. We went anyway, and it was lovely."
        );
    }

    #[test]
    fn splits_before_connector() {
        assert_eq!(
            add_burstiness_with(CONNECTOR_SENTENCE, &mut always()),
            "The committee reviewed every single proposal in great detail. And then selected the second one for funding."
        );
    }

    #[test]
    fn connector_must_follow_thirty_chars() {
        let input = "Cats and dogs lived together in the old farmhouse by the river for many long years without trouble.";
        let out = add_burstiness_with(input, &mut always());
        assert_eq!(out, input, "no standalone and/but after 30 chars, nothing to split");
    }

    #[test]
    fn failed_draws_leave_sentences_alone() {
        let input = format!("{COMMA_SENTENCE} {CONNECTOR_SENTENCE}");
        assert_eq!(add_burstiness_with(&input, &mut never()), input);
    }

    #[test]
    fn short_sentences_are_never_split() {
        let input = "Short, sweet. Also short and fine.";
        assert_eq!(add_burstiness_with(input, &mut always()), input);
    }

    #[test]
    fn rejoins_with_single_spaces() {
        assert_eq!(add_burstiness_with("One.   Two!\n\nThree?", &mut never()), "One. Two! Three?");
    }

    #[test]
    fn trailing_comma_without_words_is_not_split() {
        let input = "This sentence is deliberately long enough to pass the sixty character limit,";
        assert_eq!(add_burstiness_with(input, &mut always()), input);
    }

    #[test]
    fn empty_input() {
        assert_eq!(add_burstiness_with("", &mut always()), "");
    }
}
