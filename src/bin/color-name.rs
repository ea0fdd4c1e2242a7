//! Command-line interface for color_name
//!
//! Names hex colors against the built-in palette or a palette file.
//!
//! Example:
//!   cargo run --bin color-name -- '#FEE7F1' 00ff00 --json
//!   cargo run --bin color-name -- --palette brand.json --expand-shorthand '#ABC'

use std::{path::PathBuf, process};

use anyhow::{Context, Result};
use clap::Parser;
use color_name::{ColorMatcher, MatchResult, MatcherConfig, ShorthandMode};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Name hex colors after the closest palette entry", long_about = None)]
struct Args {
    /// Hex colors to name: #RRGGBB, RRGGBB or #RGB
    #[arg(required_unless_present_any = ["list", "export_palette"])]
    colors: Vec<String>,

    /// JSON config file (palette_path, shorthand)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Palette file of [hex, category, name] entries; overrides the config
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Widen 3-digit codes CSS style (#ABC -> #AABBCC) instead of repeating them
    #[arg(long)]
    expand_shorthand: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Print the active palette
    #[arg(long)]
    list: bool,

    /// Write the active palette to a JSON file
    #[arg(long)]
    export_palette: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let matcher = build_matcher(&args)?;

    if args.list {
        for record in matcher.palette().records() {
            println!("{}", record);
        }
    }

    if let Some(path) = &args.export_palette {
        matcher
            .palette()
            .to_json_file(path)
            .with_context(|| format!("export palette to {}", path.display()))?;
        eprintln!("Palette saved to {}", path.display());
    }

    let mut failed = false;
    let mut results = Vec::with_capacity(args.colors.len());
    for color in &args.colors {
        match matcher.match_color(color) {
            Ok(result) => results.push(result),
            Err(error) => {
                eprintln!("{}", error);
                eprintln!("Suggestion: {}", error.user_message());
                failed = true;
            }
        }
    }

    print_results(&results, args.json)?;

    if failed {
        process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn build_matcher(args: &Args) -> Result<ColorMatcher> {
    let mut config = match &args.config {
        Some(path) => MatcherConfig::from_json_file(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => MatcherConfig::default(),
    };

    if args.palette.is_some() {
        config.palette_path = args.palette.clone();
    }
    if args.expand_shorthand {
        config.shorthand = ShorthandMode::Expand;
    }

    let matcher = ColorMatcher::from_config(&config).context("build color matcher")?;
    log::debug!(
        "matching against {} colors in {} categories",
        matcher.palette().len(),
        matcher.palette().categories().len()
    );
    Ok(matcher)
}

fn print_results(results: &[MatchResult], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(results).context("serialize results")?;
        println!("{}", out);
        return Ok(());
    }

    for result in results {
        let kind = if result.exact { "exact" } else { "nearest" };
        println!("{}\t{}\t{}\t{}", result.hex, result.color, result.color_name, kind);
    }
    Ok(())
}
