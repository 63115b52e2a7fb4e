//! Envregex - Command-line entry point
//!
//! Scans each input (argument or stdin line) for `{{variable}}`
//! placeholders and prints one JSON line per input.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use envregex_application::PlaceholderMatcher;
use envregex_domain::{MatcherSettings, OffsetMode, OffsetUnit};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Find `{{variable}}` placeholders in strings.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Strings to scan. Reads one per line from stdin when omitted.
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// How lead offsets are determined.
    #[arg(long, env = "ENVREGEX_OFFSET_MODE", default_value_t = OffsetMode::Occurrence)]
    offset_mode: OffsetMode,

    /// Unit offsets are counted in.
    #[arg(long, env = "ENVREGEX_OFFSET_UNIT", default_value_t = OffsetUnit::Utf8)]
    offset_unit: OffsetUnit,

    /// Print only whether each input contains a placeholder.
    #[arg(long, conflicts_with = "segments")]
    check: bool,

    /// Print literal and placeholder segments instead of matches.
    #[arg(long)]
    segments: bool,
}

impl Args {
    const fn settings(&self) -> MatcherSettings {
        MatcherSettings::new(self.offset_mode, self.offset_unit)
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Writes the result for one input and reports whether it held a placeholder.
fn scan_one(
    args: &Args,
    matcher: PlaceholderMatcher,
    input: &str,
    out: &mut impl Write,
) -> Result<bool> {
    if args.check {
        let found = matcher.contains_placeholder(input);
        writeln!(out, "{found}")?;
        return Ok(found);
    }

    let found = if args.segments {
        let segments = matcher.split_segments(input);
        let found = segments.iter().any(|s| s.is_placeholder());
        serde_json::to_writer(&mut *out, &segments)?;
        found
    } else {
        let matches = matcher.find_all_placeholders(input);
        serde_json::to_writer(&mut *out, &matches)?;
        !matches.is_empty()
    };
    writeln!(out)?;
    Ok(found)
}

fn run(args: &Args) -> Result<bool> {
    let matcher = PlaceholderMatcher::new(args.settings());
    tracing::debug!(settings = ?matcher.settings(), "starting scan");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut any_found = false;

    if args.inputs.is_empty() {
        for (index, line) in io::stdin().lock().lines().enumerate() {
            let line = line.with_context(|| format!("failed to read stdin line {}", index + 1))?;
            any_found |= scan_one(args, matcher, &line, &mut out)?;
        }
    } else {
        for input in &args.inputs {
            any_found |= scan_one(args, matcher, input, &mut out)?;
        }
    }

    out.flush()?;
    Ok(any_found)
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    let any_found = run(&args)?;
    if args.check && !any_found {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
