//! Opt-in passes: sentence starters, filler words and parenthetical asides.
//!
//! These are not part of the default pipeline because the phrases they add
//! are AI-detectable too. They stay available for callers that want a more
//! aggressive rewrite; enable them through `PassSet` on `Options`.
//!
//! Each pass walks the sentences and fires independently per sentence with
//! the probability `Intensity` assigns to it.

use crate::api::Intensity;
use crate::rules::{ASIDES, FILLERS, STARTERS};
use crate::text::{capitalize_first, decapitalize_sentence, split_sentences};
use rand::Rng;

const ASIDE_MIN_WORDS: usize = 8;
const FILLER_MIN_WORDS: usize = 5;

/// Put conversational openers ("Look,", "The thing is,") in front of sentences.
pub fn insert_sentence_starters(text: &str, intensity: Intensity) -> String {
    insert_sentence_starters_with(text, intensity, &mut rand::thread_rng())
}

pub fn insert_sentence_starters_with<R: Rng + ?Sized>(text: &str, intensity: Intensity, rng: &mut R) -> String {
    let p = intensity.starter_probability();
    map_sentences(text, |sentence| {
        if sentence.is_empty() || !rng.gen_bool(p) {
            return sentence.to_string();
        }
        let starter = pick(STARTERS, &mut *rng);
        format!("{} {}", capitalize_first(starter), decapitalize_sentence(sentence))
    })
}

/// Slip filler words ("honestly", "basically") into sentences.
pub fn insert_fillers(text: &str, intensity: Intensity) -> String {
    insert_fillers_with(text, intensity, &mut rand::thread_rng())
}

/// A filler goes right after the first comma when there is one
/// ("When it rained, honestly, we stayed"), otherwise in front of the
/// sentence ("Basically, we stayed").
pub fn insert_fillers_with<R: Rng + ?Sized>(text: &str, intensity: Intensity, rng: &mut R) -> String {
    let p = intensity.filler_probability();
    map_sentences(text, |sentence| {
        if sentence.split_whitespace().count() < FILLER_MIN_WORDS || !rng.gen_bool(p) {
            return sentence.to_string();
        }
        let filler = pick(FILLERS, &mut *rng);
        match sentence.split_once(',') {
            Some((head, tail)) if !tail.trim().is_empty() => format!("{head}, {filler}, {}", tail.trim_start()),
            _ => format!("{}, {}", capitalize_first(filler), decapitalize_sentence(sentence)),
        }
    })
}

/// Add a parenthetical aside before a sentence's final punctuation.
pub fn insert_asides(text: &str, intensity: Intensity) -> String {
    insert_asides_with(text, intensity, &mut rand::thread_rng())
}

pub fn insert_asides_with<R: Rng + ?Sized>(text: &str, intensity: Intensity, rng: &mut R) -> String {
    let p = intensity.aside_probability();
    map_sentences(text, |sentence| {
        if sentence.split_whitespace().count() < ASIDE_MIN_WORDS || !rng.gen_bool(p) {
            return sentence.to_string();
        }
        let aside = pick(ASIDES, &mut *rng);
        let body = sentence.trim_end_matches(['.', '!', '?']);
        let stop = &sentence[body.len()..];
        format!("{body} {aside}{stop}")
    })
}

fn map_sentences(text: &str, mut f: impl FnMut(&str) -> String) -> String {
    split_sentences(text).into_iter().map(&mut f).collect::<Vec<_>>().join(" ")
}

fn pick<R: Rng + ?Sized>(list: &'static [&'static str], rng: &mut R) -> &'static str {
    list[rng.gen_range(0..list.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    // Draws succeed and `gen_range` picks the first list entry.
    fn always() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn starters_lead_and_lowercase_the_sentence() {
        let out = insert_sentence_starters_with("The plan works. I agree.", Intensity::Heavy, &mut always());
        assert_eq!(out, "Look, the plan works. Look, I agree.");
    }

    #[test]
    fn fillers_follow_the_first_comma() {
        let out = insert_fillers_with("When it rained all day, we stayed inside.", Intensity::Heavy, &mut always());
        assert_eq!(out, "When it rained all day, honestly, we stayed inside.");
    }

    #[test]
    fn fillers_lead_sentences_without_commas() {
        let out = insert_fillers_with("We stayed inside all day.", Intensity::Heavy, &mut always());
        assert_eq!(out, "Honestly, we stayed inside all day.");
    }

    #[test]
    fn fillers_skip_short_sentences() {
        let input = "Too short here.";
        assert_eq!(insert_fillers_with(input, Intensity::Heavy, &mut always()), input);
    }

    #[test]
    fn asides_sit_before_final_punctuation() {
        let out = insert_asides_with(
            "The results were better than anyone on the team expected!",
            Intensity::Heavy,
            &mut always(),
        );
        assert_eq!(out, "The results were better than anyone on the team expected (at least in my experience)!");
    }

    #[test]
    fn asides_without_final_punctuation_go_at_the_end() {
        let out = insert_asides_with("one two three four five six seven eight", Intensity::Light, &mut always());
        assert_eq!(out, "one two three four five six seven eight (at least in my experience)");
    }

    #[test]
    fn failed_draws_change_nothing() {
        let mut never = StepRng::new(u64::MAX, 0);
        let input = "When it rained all day, we stayed inside and read a very long book.";
        assert_eq!(insert_sentence_starters_with(input, Intensity::Heavy, &mut never), input);
        assert_eq!(insert_fillers_with(input, Intensity::Heavy, &mut never), input);
        assert_eq!(insert_asides_with(input, Intensity::Heavy, &mut never), input);
    }
}
