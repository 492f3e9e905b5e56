use humanizer::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, HumanizeVerbose, PassTrace, novelty_diff, strip_highlights};
use std::time::Duration;

/// Report styling by role. With color off every method returns its input.
struct Style {
    color: bool,
}

impl Style {
    fn sgr(&self, codes: &str, s: impl AsRef<str>) -> String {
        if self.color { format!("\x1b[{codes}m{}\x1b[0m", s.as_ref()) } else { s.as_ref().to_string() }
    }

    fn title(&self, s: impl AsRef<str>) -> String {
        self.sgr("1;36", s)
    }

    fn section(&self, name: &str) -> String {
        self.sgr("90", format!("━━━ {name} ━━━"))
    }

    fn muted(&self, s: impl AsRef<str>) -> String {
        self.sgr("2", s)
    }

    fn pass(&self, s: impl AsRef<str>) -> String {
        self.sgr("34", s)
    }

    fn good(&self, s: impl AsRef<str>) -> String {
        self.sgr("32", s)
    }

    fn note(&self, s: impl AsRef<str>) -> String {
        self.sgr("33", s)
    }

    fn novel(&self, s: impl AsRef<str>) -> String {
        self.sgr("1;33", s)
    }
}

pub fn print_run(run: &HumanizeVerbose, color: bool) {
    let style = Style { color };
    println!("\n{}", style.title(format!("⚙  Humanizing ({}, {:?} tone)", run.intensity, run.tone)));

    println!("\n{}", style.section("Input"));
    println!("  {}", style.muted(run.text.trim()));

    println!("\n{}", style.section("Passes"));
    if run.details.passes.is_empty() {
        println!("{}", style.muted("  No passes enabled"));
    }
    for trace in &run.details.passes {
        println!("  {}", fmt_pass(trace, &style));
    }

    println!("\n{}", style.section("Output"));
    println!("  {}", highlight(&run.text, &run.output, &style));

    let in_passes: Duration = run.details.passes.iter().map(|p| p.duration).sum();
    println!("\n{}", style.section("Timing"));
    println!(
        "  Total: {}  │  Passes: {}  │  Normalize: {}",
        style.good(format!("{:?}", run.details.total)),
        style.pass(format!("{:?}", in_passes)),
        style.muted(format!("{:?}", run.details.normalize)),
    );
    println!();
}

fn fmt_pass(trace: &PassTrace, style: &Style) -> String {
    let status = if trace.changed { style.good("✓ changed") } else { style.muted("✗ unchanged") };
    let mut line = format!("{} {}", style.pass(format!("{:<13}", trace.pass)), status);
    if trace.sentences_after != trace.sentences_before {
        line.push_str(&format!(
            "  {} {}",
            style.muted("│ sentences:"),
            style.note(format!("{} → {}", trace.sentences_before, trace.sentences_after))
        ));
    }
    line.push_str(&format!("  {}", style.muted(format!("{:?}", trace.duration))));
    line
}

/// Output with novel words styled instead of wrapped in HTML markers.
fn highlight(original: &str, output: &str, style: &Style) -> String {
    let (html, changed) = novelty_diff(original, output);
    if changed == 0 {
        return output.to_string();
    }
    html.split(HIGHLIGHT_OPEN)
        .enumerate()
        .map(|(idx, chunk)| match (idx, chunk.split_once(HIGHLIGHT_CLOSE)) {
            (0, _) | (_, None) => strip_highlights(chunk),
            (_, Some((word, rest))) => format!("{}{}", style.novel(strip_highlights(word)), strip_highlights(rest)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncolored_highlight_is_the_output() {
        let style = Style { color: false };
        let output = "We don't use <b> & stuff.";
        assert_eq!(highlight("We do not utilize it.", output, &style), output);
    }

    #[test]
    fn colored_highlight_marks_only_new_words() {
        let style = Style { color: true };
        let out = highlight("We do not utilize it.", "We don't use it.", &style);
        assert_eq!(out, "We \x1b[1;33mdon't\x1b[0m \x1b[1;33muse\x1b[0m it.");
    }
}
