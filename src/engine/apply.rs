//! Table application.
//!
//! A table is applied entry by entry. Each entry does a single global
//! left-to-right scan over the current text, so an entry never re-matches
//! text it inserted during the same scan; later entries do see it.

use crate::text::carry_case;
use crate::{PatternRule, Resolution};
use rand::Rng;
use regex::Captures;

/// Apply one rule globally. Random resolutions draw once per match.
pub(crate) fn apply_rule<R: Rng + ?Sized>(text: &str, rule: &PatternRule, rng: &mut R) -> String {
    rewrite(text, rule, |resolution| resolution.pick(&mut *rng))
}

/// Apply every rule of `table` in declaration order.
pub(crate) fn apply_table<R: Rng + ?Sized>(text: &str, table: &[PatternRule], rng: &mut R) -> String {
    table.iter().fold(text.to_string(), |acc, rule| apply_rule(&acc, rule, &mut *rng))
}

/// Apply a table whose rules all have a single replacement. Takes no RNG.
pub(crate) fn apply_fixed_table(text: &str, table: &[PatternRule]) -> String {
    table.iter().fold(text.to_string(), |acc, rule| {
        rewrite(&acc, rule, |resolution| resolution.candidates().first().copied().unwrap_or_default())
    })
}

fn rewrite(text: &str, rule: &PatternRule, mut choose: impl FnMut(&Resolution) -> &'static str) -> String {
    let mut hits = 0usize;
    let out = rule.matcher.replace_all(text, |caps: &Captures| {
        hits += 1;
        let template = choose(&rule.resolution);
        let mut expanded = String::with_capacity(template.len());
        caps.expand(template, &mut expanded);
        carry_case(&caps[0], &expanded)
    });

    if hits > 0 {
        log::trace!("[rule] name=\"{}\" hits={}", rule.name, hits);
    }
    out.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn replaces_every_occurrence_and_carries_case() {
        let rule = phrase!("do not" => "don't");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(apply_rule("Do not run. We do not  walk.", &rule, &mut rng), "Don't run. We don't walk.");
    }

    #[test]
    fn expands_capture_groups() {
        let rule: PatternRule = rule!(name: "going to", re: r"(?i)\bgoing\s+to\s+(be)\b", to: "gonna ${1}");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(apply_rule("It is going to be fine", &rule, &mut rng), "It is gonna be fine");
    }

    #[test]
    fn later_entries_see_earlier_output() {
        let table = vec![phrase!("alpha" => "beta"), phrase!("beta" => "gamma")];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(apply_table("alpha", &table, &mut rng), "gamma");
        assert_eq!(apply_fixed_table("alpha", &table), "gamma");
    }

    #[test]
    fn single_scan_does_not_rematch_its_own_output() {
        let table = vec![phrase!("go" => "go go")];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(apply_table("go", &table, &mut rng), "go go");
    }

    #[test]
    fn choice_draws_from_candidates_only() {
        let rule = PatternRule::new(
            "x",
            crate::text::compile_pattern(r"(?i)\bx\b"),
            Resolution::Choice(&["a", "b", "c"]),
        );
        let mut rng = StdRng::seed_from_u64(7);
        let out = apply_rule("x x x x x x x x", &rule, &mut rng);
        assert!(out.split(' ').all(|w| ["a", "b", "c"].contains(&w)), "{out}");
    }
}
