use clap::Args;

use crate::cli::{DataArgs, OutputFormat};
use crate::core::result::PairwiseScore;
use crate::matrix::snapshot::SimilaritySnapshot;
use crate::parsing::url::problem_id_from_url;
use crate::query::engine::SimilarityEngine;

#[derive(Args)]
pub struct CompareArgs {
    /// First problem URL or name
    #[arg(required = true)]
    pub first: String,

    /// Second problem URL or name
    #[arg(required = true)]
    pub second: String,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Execute compare subcommand
///
/// # Errors
///
/// Returns an error if the data cannot be loaded, either problem is
/// unknown, or the score is malformed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let first = problem_id_from_url(&args.first)?;
    let second = problem_id_from_url(&args.second)?;
    let config = args.data.to_config()?;

    let rt = tokio::runtime::Runtime::new()?;
    let snapshot = rt.block_on(SimilaritySnapshot::load(&config))?;

    if verbose {
        eprintln!(
            "Loaded {} problems from {}",
            snapshot.problem_count(),
            config.base
        );
    }

    let engine = SimilarityEngine::new(&snapshot);
    let score = engine.pairwise_similarity(&first, &second)?;

    match format {
        OutputFormat::Text => print_text_comparison(&score),
        OutputFormat::Json => print_json_comparison(&score)?,
        OutputFormat::Tsv => print_tsv_comparison(&score),
    }

    Ok(())
}

fn print_text_comparison(score: &PairwiseScore) {
    println!("Comparison Results");
    println!("{}", "=".repeat(60));
    println!(
        "\nFirst:  {} ({})",
        score.first.display_title(),
        score.first
    );
    println!(
        "Second: {} ({})",
        score.second.display_title(),
        score.second
    );
    println!("\nSimilarity Score: {:.2}", score.score);
}

fn print_json_comparison(score: &PairwiseScore) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(score)?);
    Ok(())
}

fn print_tsv_comparison(score: &PairwiseScore) {
    println!("first\tsecond\tscore");
    println!("{}\t{}\t{:.2}", score.first, score.second, score.score);
}
