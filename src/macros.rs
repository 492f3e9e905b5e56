#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Table rule from a hand-written regular expression.
///
/// ```ignore
/// rule!(name: "furthermore,", re: r"(?i)\bfurthermore,\s*", to: ["and ", "plus ", "also ", ""])
/// ```
#[macro_export]
macro_rules! rule {
    (name: $name:expr, re: $pat:literal, to: [ $($cand:literal),+ $(,)? ] $(,)?) => {
        $crate::PatternRule::new(
            $name,
            $crate::text::compile_pattern($pat),
            $crate::Resolution::Choice(&[ $($cand),+ ]),
        )
    };
    (name: $name:expr, re: $pat:literal, to: $rep:literal $(,)?) => {
        $crate::PatternRule::new($name, $crate::text::compile_pattern($pat), $crate::Resolution::Fixed($rep))
    };
}

/// Table rule from a literal phrase. The matcher is built by
/// `text::phrase_pattern`: case-insensitive, escaped, `\b` on word edges and
/// `\s+` between words.
#[macro_export]
macro_rules! phrase {
    ($phrase:literal => [ $($cand:literal),+ $(,)? ]) => {
        $crate::PatternRule::new(
            $phrase,
            $crate::text::compile_pattern(&$crate::text::phrase_pattern($phrase)),
            $crate::Resolution::Choice(&[ $($cand),+ ]),
        )
    };
    ($phrase:literal => $rep:literal) => {
        $crate::PatternRule::new(
            $phrase,
            $crate::text::compile_pattern(&$crate::text::phrase_pattern($phrase)),
            $crate::Resolution::Fixed($rep),
        )
    };
}
