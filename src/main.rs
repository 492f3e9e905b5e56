//! Command-line front end for the humanizer pipeline.
//!
//! Reads text from `--input`, trailing arguments or stdin, rewrites it and
//! prints the plain result, the HTML diff, a JSON `DiffResult` or a colored
//! per-pass report.

mod debug_report;

use anyhow::{Context, Result};
use clap::Parser;
use humanizer::{
    Intensity, Options, PassSet, Tone, humanize_text_with, humanize_verbose_with, humanize_with_diff_with,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

/// Rewrite AI-sounding text so it reads more like a person wrote it.
#[derive(Parser, Debug)]
#[command(name = "humanizer", version, about, long_about = None)]
#[command(after_help = "Exit codes:\n  0  Success.\n  1  Internal error.\n  2  Invalid arguments or missing input.")]
struct Cli {
    /// Input text. If omitted, reads trailing arguments, or stdin when there are none.
    #[arg(short, long, value_name = "TEXT", conflicts_with = "words")]
    input: Option<String>,

    /// Rewrite strength: light, balanced or heavy
    #[arg(long, default_value_t = Intensity::Heavy, value_parser = parse_intensity)]
    intensity: Intensity,

    /// Tone of voice: natural, casual, formal, academic or creative (currently no effect)
    #[arg(long, default_value = "natural", value_parser = parse_tone)]
    tone: Tone,

    /// Insert conversational fillers
    #[arg(long)]
    fillers: bool,

    /// Insert parenthetical asides
    #[arg(long)]
    asides: bool,

    /// Prefix some sentences with casual starters
    #[arg(long)]
    starters: bool,

    /// Seed the random source for a reproducible run
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Print the HTML view with new words highlighted
    #[arg(long, conflicts_with_all = ["json", "report"])]
    diff: bool,

    /// Print the result as JSON ({"html", "plain", "changed_words"})
    #[arg(long, conflicts_with = "report")]
    json: bool,

    /// Print a per-pass report
    #[arg(long)]
    report: bool,

    /// Force ANSI color output
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output
    #[arg(long)]
    no_color: bool,

    /// Input text, as trailing words
    #[arg(trailing_var_arg = true, value_name = "INPUT")]
    words: Vec<String>,
}

impl Cli {
    fn options(&self) -> Options {
        let mut extra = PassSet::empty();
        extra.set(PassSet::FILLERS, self.fillers);
        extra.set(PassSet::ASIDES, self.asides);
        extra.set(PassSet::STARTERS, self.starters);
        Options::new(self.intensity).with_tone(self.tone).with_passes(extra)
    }

    fn color(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            io::stdout().is_terminal()
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_intensity(s: &str) -> Result<Intensity, String> {
    s.parse().map_err(|err: humanizer::ParseIntensityError| err.to_string())
}

fn parse_tone(s: &str) -> Result<Tone, String> {
    s.parse().map_err(|err: humanizer::ParseToneError| err.to_string())
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let input = read_input(&cli)?;
    if input.trim().is_empty() {
        eprintln!("error: no input provided\n\nFor more information, try '--help'.");
        return Ok(ExitCode::from(2));
    }

    let options = cli.options();
    let mut rng = cli.rng();
    log::debug!("[cli] intensity={} passes={:?} seed={:?}", options.intensity, options.passes, cli.seed);

    if cli.report {
        let verbose = humanize_verbose_with(&input, &options, &mut rng);
        debug_report::print_run(&verbose, cli.color());
    } else if cli.json {
        let result = humanize_with_diff_with(&input, &options, &mut rng);
        println!("{}", serde_json::to_string_pretty(&result).context("failed to encode result")?);
    } else if cli.diff {
        println!("{}", humanize_with_diff_with(&input, &options, &mut rng).html);
    } else {
        println!("{}", humanize_text_with(&input, &options, &mut rng));
    }

    Ok(ExitCode::SUCCESS)
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(input) = &cli.input {
        return Ok(input.clone());
    }
    if !cli.words.is_empty() {
        return Ok(cli.words.join(" "));
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_map_to_options() {
        let cli = Cli::parse_from(["humanizer", "--intensity", "light", "--fillers", "--asides", "hello", "there"]);
        let opts = cli.options();
        assert_eq!(opts.intensity, Intensity::Light);
        assert!(opts.passes.contains(PassSet::FILLERS | PassSet::ASIDES));
        assert!(!opts.passes.contains(PassSet::STARTERS));
        assert_eq!(read_input(&cli).unwrap(), "hello there");
    }

    #[test]
    fn rejects_unknown_intensity_and_double_input() {
        assert!(Cli::try_parse_from(["humanizer", "--intensity", "extreme", "x"]).is_err());
        assert!(Cli::try_parse_from(["humanizer", "-i", "a", "b"]).is_err());
        assert!(Cli::try_parse_from(["humanizer", "--diff", "--json", "x"]).is_err());
    }
}
