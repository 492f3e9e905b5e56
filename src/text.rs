//! Text helpers shared by the tables, the passes and the tuning harness:
//! sentence segmentation, whitespace normalization, capitalization and
//! literal-phrase pattern building.

use regex::Regex;

/// Split `text` into sentences at every whitespace run that follows `.`, `!`
/// or `?`. Terminal punctuation stays with its sentence and the separating
/// whitespace is dropped.
///
/// Behaves like splitting on `(?<=[.!?])\s+`: an empty input yields one empty
/// piece, and trailing whitespace after a final stop yields a trailing empty
/// piece.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            out.push(&text[start..idx]);
            let mut end = idx + c.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(c);
    }

    out.push(&text[start..]);
    out
}

/// Number of non-empty sentences in `text`.
pub(crate) fn sentence_count(text: &str) -> usize {
    split_sentences(text).into_iter().filter(|s| !s.trim().is_empty()).count()
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase the first character, leaving the rest untouched.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character of a sentence so a phrase can be put in
/// front of it. Leaves "I", "I'm"-style words and acronyms alone.
pub(crate) fn decapitalize_sentence(s: &str) -> String {
    let first_word = s.split_whitespace().next().unwrap_or("");
    let bare = first_word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
    let keep = bare == "I"
        || bare.starts_with("I'")
        || (bare.chars().count() > 1 && bare.chars().all(|c| !c.is_lowercase()));
    if keep {
        return s.to_string();
    }

    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Carry the case of a match over to its replacement: an uppercase first
/// letter in `matched` uppercases the first letter of `replacement`.
pub(crate) fn carry_case(matched: &str, replacement: &str) -> String {
    if matched.chars().next().is_some_and(char::is_uppercase) {
        capitalize_first(replacement)
    } else {
        replacement.to_string()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Build a case-insensitive pattern matching `phrase` literally.
///
/// Words are escaped and joined with `\s+`; `\b` is added on each edge that
/// is a word character (so `"furthermore,"` still matches before a space).
pub(crate) fn phrase_pattern(phrase: &str) -> String {
    let mut pattern = String::from("(?i)");
    if phrase.chars().next().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    let body: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    pattern.push_str(&body.join(r"\s+"));
    if phrase.chars().last().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern
}

/// Compile a table pattern. Table patterns are string literals covered by
/// the table tests, so a failure here is a bug in a table.
pub(crate) fn compile_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid table pattern {pattern:?}: {err}"))
}
