// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (RUST_LOG controls the level, default "info")
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = "not valid" or failed pages,
//    2 = error)
// =============================================================================

mod cli;
mod crawl;
mod error;
mod puzzles;

use std::io;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, CrawlArgs};
use crawl::{CrawlConfig, CrawlSummary, PageStatus};
use puzzles::{Strategy, Verdict};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns the process exit code:
//   Ok(0) = everything valid / crawled
//   Ok(1) = a "Not valid" verdict or at least one failed page
//   Err   = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Interactive { mirror: false }) {
        Commands::Classify { sequence } => Ok(report_verdict(puzzles::classify(&sequence))),
        Commands::Brackets { sequence, mirror } => {
            let valid = puzzles::check_brackets(&sequence, strategy(mirror));
            Ok(report_verdict(Verdict::from(valid)))
        }
        Commands::Tree { expression } => handle_tree(&expression),
        Commands::Interactive { mirror } => {
            let report = puzzles::run_session(io::stdin().lock(), io::stdout().lock(), strategy(mirror))?;
            Ok(if report.all_ok() { 0 } else { 1 })
        }
        Commands::Crawl(args) => handle_crawl(&args).await,
    }
}

fn strategy(mirror: bool) -> Strategy {
    if mirror {
        Strategy::Mirror
    } else {
        Strategy::Nesting
    }
}

fn report_verdict(verdict: Verdict) -> i32 {
    println!("{}", verdict);
    if verdict.is_valid() {
        0
    } else {
        1
    }
}

// Handles the 'tree' subcommand
//
// A malformed expression is an input error, not an internal one, so it is
// reported on stderr with exit code 1
fn handle_tree(expression: &str) -> Result<i32> {
    let tree = match puzzles::parse_tree(expression) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Invalid tree: {}", e);
            return Ok(1);
        }
    };

    let ok = puzzles::print_tree_report(&mut io::stdout().lock(), tree.as_ref())?;
    Ok(if ok { 0 } else { 1 })
}

// Handles the 'crawl' subcommand
async fn handle_crawl(args: &CrawlArgs) -> Result<i32> {
    let config = CrawlConfig::from(args);

    println!("🔍 Crawling API index: {}", config.index_url);
    println!("📁 Writing notes to: {}", config.out_dir.display());

    let summary = crawl::run_crawl(&config).await?;

    print_results(&summary, args.json)?;

    Ok(if summary.failed() > 0 { 1 } else { 0 })
}

// Prints the summary either as a table or JSON
fn print_results(summary: &CrawlSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print_table(summary);
    }
    Ok(())
}

fn print_table(summary: &CrawlSummary) {
    println!("{:<60} {:<12} {:<30}", "PAGE", "STATUS", "DETAIL");
    println!("{}", "=".repeat(102));

    for page in &summary.pages {
        let (status, detail) = match &page.status {
            PageStatus::Written { symbol, notes, .. } => ("✅ WRITTEN", format!("{} ({} notes)", symbol, notes)),
            PageStatus::Empty => ("➖ EMPTY", String::new()),
            PageStatus::Superseded { symbol } => ("🔁 REPLACED", format!("{} documented again later", symbol)),
            PageStatus::Failed { reason } => ("❌ FAILED", reason.clone()),
        };

        // Truncate long URLs for display
        let url_display = if page.url.len() > 57 {
            format!("{}...", &page.url[..57])
        } else {
            page.url.clone()
        };

        println!("{:<60} {:<12} {:<30}", url_display, status, detail);
    }

    println!();
    println!("📊 Summary:");
    println!("   ✅ Written: {}", summary.written());
    println!("   ➖ Empty: {}", summary.empty());
    println!("   ❌ Failed: {}", summary.failed());
    println!("   📋 Total: {}", summary.pages.len());
}
