use clap::Args;

use crate::cli::{DataArgs, OutputFormat};
use crate::core::result::RankedResult;
use crate::core::types::ProblemId;
use crate::matrix::snapshot::SimilaritySnapshot;
use crate::parsing::url::problem_id_from_url;
use crate::query::engine::SimilarityEngine;
use crate::query::pagination::{Page, PAGE_SIZE};

#[derive(Args)]
pub struct FindArgs {
    /// Problem URL (https://leetcode.com/problems/<name>/) or bare problem name
    #[arg(required = true)]
    pub problem: String,

    /// Page of results to show (10 per page)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,

    /// Show every result instead of a single page
    #[arg(long, conflicts_with = "page")]
    pub all: bool,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Execute find subcommand
///
/// # Errors
///
/// Returns an error if the data cannot be loaded, the problem is unknown,
/// or a score in its column is malformed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FindArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let id = problem_id_from_url(&args.problem)?;
    let config = args.data.to_config()?;

    let rt = tokio::runtime::Runtime::new()?;
    let snapshot = rt.block_on(SimilaritySnapshot::load(&config))?;

    if verbose {
        eprintln!(
            "Loaded {} problems ({} with metadata) from {}",
            snapshot.problem_count(),
            snapshot.metadata().len(),
            config.base
        );
    }

    let engine = SimilarityEngine::new(&snapshot);
    let ranked = engine.rank_similar(&id)?;

    let page = if args.all {
        Page::new(&ranked, 1, ranked.len().max(1))
    } else {
        let number = usize::try_from(args.page).unwrap_or(usize::MAX);
        Page::new(&ranked, number, PAGE_SIZE)
    };

    match format {
        OutputFormat::Text => print_text_results(&id, &page),
        OutputFormat::Json => print_json_results(&id, &page)?,
        OutputFormat::Tsv => print_tsv_results(&page),
    }

    Ok(())
}

fn print_text_results(id: &ProblemId, page: &Page<RankedResult>) {
    println!("Problems similar to {} ({id})", id.display_title());
    println!("{}", "=".repeat(60));

    if page.items.is_empty() {
        println!("\nNo other problems in the similarity matrix.");
        return;
    }

    let offset = (page.number - 1) * PAGE_SIZE;
    for (i, result) in page.items.iter().enumerate() {
        println!(
            "\n#{} {} ({})",
            offset + i + 1,
            result.problem.display_title(),
            result.problem
        );
        println!("  Similarity Score: {:.2}", result.score);
        println!("  Difficulty: {}", result.difficulty);
        if !result.tags.is_empty() {
            println!("  Tagged Topics: {}", result.tags.join(", "));
        }
        println!("  URL: {}", result.problem.problem_url());
    }

    println!(
        "\nPage {} of {} ({} results)",
        page.number, page.total_pages, page.total_results
    );
}

fn print_json_results(id: &ProblemId, page: &Page<RankedResult>) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "problem": {
            "id": id,
            "title": id.display_title(),
            "url": id.problem_url(),
        },
        "page": page.number,
        "total_pages": page.total_pages,
        "total_results": page.total_results,
        "results": page.items,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(page: &Page<RankedResult>) {
    println!("problem\tscore\tdifficulty\ttags");
    for result in &page.items {
        println!(
            "{}\t{:.4}\t{}\t{}",
            result.problem,
            result.score,
            result.difficulty,
            result.tags.join(";"),
        );
    }
}
