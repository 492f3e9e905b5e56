//! The harness's own fixed replacement table, applied before any mined
//! replacements. Smaller and blunter than the pipeline's tables: one entry
//! per phrase, no randomness.

use crate::PatternRule;
use crate::engine::apply_fixed_table;
use once_cell::sync::Lazy;

static BUILTINS: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        phrase!("it is important to note that" => ""),
        phrase!("in order to" => "to"),
        phrase!("due to the fact that" => "because"),
        phrase!("a wide range of" => "lots of"),
        phrase!("plays a crucial role in" => "matters for"),
        phrase!("delve into" => "dig into"),
        phrase!("furthermore" => "also"),
        phrase!("moreover" => "also"),
        phrase!("additionally" => "also"),
        phrase!("utilize" => "use"),
        phrase!("leverage" => "use"),
        phrase!("crucial" => "key"),
        phrase!("will not" => "won't"),
        phrase!("cannot" => "can't"),
        phrase!("do not" => "don't"),
        phrase!("does not" => "doesn't"),
        phrase!("is not" => "isn't"),
        phrase!("are not" => "aren't"),
        phrase!("it is" => "it's"),
    ]
});

/// Run the builtin table over `text`. Output may carry doubled spaces
/// where a phrase was removed; [`super::cleanup`] takes care of those.
pub fn apply_builtins(text: &str) -> String {
    apply_fixed_table(text, &BUILTINS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::cleanup;

    #[test]
    fn rewrites_phrases_and_contractions() {
        let out = cleanup(&apply_builtins("Furthermore, it is important to note that we do not utilize it."));
        assert_eq!(out, "Also, we don't use it.");
    }

    #[test]
    fn word_swaps_run_before_contractions() {
        assert_eq!(apply_builtins("It is crucial"), "It's key");
        assert_eq!(apply_builtins("in order to win"), "to win");
    }

    #[test]
    fn leaves_unrelated_text_alone() {
        assert_eq!(apply_builtins("Nothing to see here."), "Nothing to see here.");
    }
}
