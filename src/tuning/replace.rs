use crate::text::{capitalize_first, carry_case, normalize_whitespace, phrase_pattern, split_sentences};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// A literal substitution mined from a completion model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub old: String,
    pub new: String,
}

impl Replacement {
    /// False for pairs that can't change any text.
    pub fn is_effective(&self) -> bool {
        !self.old.trim().is_empty() && self.old != self.new
    }
}

/// Apply `replacements` as case-insensitive, boundary-aware literal matches.
///
/// Longer `old` strings go first so a phrase wins over a word inside it.
/// Ineffective pairs are skipped.
pub fn apply_replacements(text: &str, replacements: &[Replacement]) -> String {
    let mut ordered: Vec<&Replacement> = replacements.iter().filter(|r| r.is_effective()).collect();
    ordered.sort_by(|a, b| b.old.chars().count().cmp(&a.old.chars().count()));

    ordered.into_iter().fold(text.to_string(), |acc, replacement| {
        let pattern = phrase_pattern(&replacement.old);
        let matcher = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(err) => {
                log::warn!("[tuning] skipping replacement {:?}: {err}", replacement.old);
                return acc;
            }
        };
        matcher.replace_all(&acc, |caps: &Captures| carry_case(&caps[0], &replacement.new)).into_owned()
    })
}

/// Collapse whitespace and capitalize the start of every sentence.
pub fn cleanup(text: &str) -> String {
    let normalized = normalize_whitespace(text);
    split_sentences(&normalized).into_iter().map(capitalize_first).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &[(&str, &str)]) -> Vec<Replacement> {
        list.iter().map(|(old, new)| Replacement { old: old.to_string(), new: new.to_string() }).collect()
    }

    #[test]
    fn longest_old_wins() {
        let list = pairs(&[("make", "build"), ("make use of", "rely on")]);
        assert_eq!(apply_replacements("We make use of tools.", &list), "We rely on tools.");
    }

    #[test]
    fn matches_are_literal_and_bounded() {
        let list = pairs(&[("a.b", "x"), ("cat", "dog")]);
        assert_eq!(apply_replacements("a.b axb concat Cat", &list), "x axb concat Dog");
    }

    #[test]
    fn skips_ineffective_pairs() {
        let list = pairs(&[("", "boom"), ("same", "same")]);
        assert_eq!(apply_replacements("same text", &list), "same text");
    }

    #[test]
    fn cleanup_capitalizes_sentences() {
        assert_eq!(cleanup("  hello   there. how are you?  fine!"), "Hello there. How are you? Fine!");
        assert_eq!(cleanup(""), "");
        assert_eq!(cleanup("version 1.2 is out. ok"), "Version 1.2 is out. Ok");
    }
}
