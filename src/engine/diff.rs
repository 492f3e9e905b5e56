//! Word-level novelty diff.
//!
//! This is a presence-set diff, not an alignment: a rewritten token is
//! highlighted when its normalized form appears nowhere in the original.
//! Reordered words are never flagged, and an original word reused in a new
//! place is never flagged either.
//!
//! Every token is HTML-escaped before it goes into the annotated string, so
//! the only markup in it is the highlight markers themselves.

use std::collections::HashSet;

/// Opening marker wrapped around novel tokens.
pub const HIGHLIGHT_OPEN: &str = r#"<span class="highlight">"#;
/// Closing marker wrapped around novel tokens.
pub const HIGHLIGHT_CLOSE: &str = "</span>";

const MIN_NOVEL_CHARS: usize = 2;

/// Lowercase and drop `. , ! ? ; :` anywhere in the token.
pub(crate) fn normalize_token(token: &str) -> String {
    token.to_lowercase().chars().filter(|c| !matches!(c, '.' | ',' | '!' | '?' | ';' | ':')).collect()
}

/// Escape `& < > "` for inclusion in HTML text.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<").replace("&gt;", ">").replace("&quot;", "\"").replace("&amp;", "&")
}

/// Mark the tokens of `rewritten` that are new relative to `original`.
///
/// Returns the annotated HTML and the number of highlighted tokens. Tokens
/// are escaped and joined with single spaces, so for whitespace-normalized
/// `rewritten`, [`strip_highlights`] gives back `rewritten` exactly.
pub fn novelty_diff(original: &str, rewritten: &str) -> (String, usize) {
    let seen: HashSet<String> = original.split_whitespace().map(normalize_token).collect();

    let mut highlighted = 0usize;
    let words: Vec<String> = rewritten
        .split_whitespace()
        .map(|word| {
            let norm = normalize_token(word);
            let escaped = escape_html(word);
            if !seen.contains(&norm) && norm.chars().count() > MIN_NOVEL_CHARS {
                highlighted += 1;
                format!("{HIGHLIGHT_OPEN}{escaped}{HIGHLIGHT_CLOSE}")
            } else {
                escaped
            }
        })
        .collect();

    (words.join(" "), highlighted)
}

/// Remove highlight markers from `html` and undo the token escaping.
pub fn strip_highlights(html: &str) -> String {
    unescape_html(&html.replace(HIGHLIGHT_OPEN, "").replace(HIGHLIGHT_CLOSE, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_punctuation() {
        assert_eq!(normalize_token("Hello,"), "hello");
        assert_eq!(normalize_token("e.g.;"), "eg");
        assert_eq!(normalize_token("don't!"), "don't");
    }

    #[test]
    fn highlights_only_new_words_longer_than_two() {
        let (html, count) = novelty_diff("We utilize tools.", "We use tools. So it's new");
        assert_eq!(
            html,
            r#"We <span class="highlight">use</span> tools. So <span class="highlight">it's</span> <span class="highlight">new</span>"#
        );
        assert_eq!(count, 3);
    }

    #[test]
    fn presence_not_position() {
        let (html, count) = novelty_diff("alpha beta gamma", "Gamma, beta alpha!");
        assert_eq!(html, "Gamma, beta alpha!");
        assert_eq!(count, 0);
    }

    #[test]
    fn strip_restores_plain() {
        let plain = "Plus students use words they don't know.";
        let (html, _) = novelty_diff("Furthermore, students utilize words they do not know.", plain);
        assert_eq!(strip_highlights(&html), plain);
    }

    #[test]
    fn markup_in_the_text_is_escaped() {
        let plain = r#"<span class="highlight">x</span> and <b>bold</b> & more"#;
        let (html, count) = novelty_diff("and more", plain);
        assert_eq!(
            html,
            concat!(
                r#"<span class="highlight">&lt;span</span> "#,
                r#"<span class="highlight">class=&quot;highlight&quot;&gt;x&lt;/span&gt;</span> and "#,
                r#"<span class="highlight">&lt;b&gt;bold&lt;/b&gt;</span> &amp; more"#,
            )
        );
        assert_eq!(count, 3);
        assert_eq!(strip_highlights(&html), plain);
    }

    #[test]
    fn escaped_entities_in_the_text_survive() {
        let plain = "&amp; &lt;b&gt; &quot;";
        let (html, _) = novelty_diff("", plain);
        assert!(!html.contains("<b>"));
        assert_eq!(strip_highlights(&html), plain);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(novelty_diff("", ""), (String::new(), 0));
        assert_eq!(novelty_diff("anything", ""), (String::new(), 0));
    }
}
