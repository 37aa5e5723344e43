//! Pair a population stored as plain text files and print the result.
//!
//! The directory must hold `raw_scores.txt`, `genders.txt` and
//! `gender_preferences.txt`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use lume_pairing::config::Settings;
use lume_pairing::core::StableMatcher;
use lume_pairing::models::{CandidatePolicy, MatchPair};
use lume_pairing::services::load_population;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "pair-files", version, about = "Stable pairing over a population directory")]
struct Cli {
    /// Directory holding the score matrix and label files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Seed for the side partition (defaults to matching.seed, else random)
    #[arg(short, long, env = "LUME_PAIRING_SEED")]
    seed: Option<u64>,

    /// Which receivers a proposer may propose to: compatible-only or all-opposite
    #[arg(short, long)]
    policy: Option<CandidatePolicy>,

    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn format_pairs(pairs: &[MatchPair]) -> String {
    let body: Vec<String> = pairs.iter().map(ToString::to_string).collect();
    format!("[{}]", body.join(", "))
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&settings.logging.level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let files = load_population(&cli.dir)
        .with_context(|| format!("failed to load population from {}", cli.dir.display()))?;

    let policy = cli.policy.unwrap_or(settings.matching.candidate_policy);
    let matcher = StableMatcher::new(policy);

    let outcome = match cli.seed.or(settings.matching.seed) {
        Some(seed) => matcher.run(&files.scores, &files.identities, &files.preferences, &mut StdRng::seed_from_u64(seed)),
        None => matcher.run(&files.scores, &files.identities, &files.preferences, &mut rand::rng()),
    }
    .context("pairing run failed")?;

    match cli.format {
        OutputFormat::Text => println!("{}", format_pairs(&outcome.pairs)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome.pairs)?),
    }

    if !outcome.unmatched_proposers.is_empty() || !outcome.unmatched_receivers.is_empty() {
        tracing::info!(
            "Unmatched proposers {:?}, unmatched receivers {:?}",
            outcome.unmatched_proposers,
            outcome.unmatched_receivers
        );
    }

    Ok(())
}
