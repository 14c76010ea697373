// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Subcommands:
// - classify / brackets / tree: answer one puzzle and exit
// - interactive: the three-prompt console session
// - crawl: scrape the API documentation into notes files
//
// Running with no subcommand is the same as `interactive`.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::crawl::CrawlConfig;

#[derive(Parser, Debug)]
#[command(
    name = "note-scout",
    version,
    about = "String and tree puzzles, plus a crawler that collects API notes",
    long_about = "note-scout answers three small puzzles (letter frequencies, bracket nesting, \
                  binary tree traversal) and can crawl an API reference site, saving the \
                  cautions and notes of every documented member to one text file per API."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a string's letter frequencies are nearly uniform
    ///
    /// Example: note-scout classify aabbc
    Classify {
        /// The string to evaluate (letters only)
        sequence: String,
    },

    /// Check whether (), [] and {} are properly nested
    ///
    /// Example: note-scout brackets "([{}])"
    Brackets {
        /// The string of brackets to evaluate
        sequence: String,

        /// Use the mirror check: closers, read backwards, must pair with openers
        #[arg(long)]
        mirror: bool,
    },

    /// Print the traversals and sum of a tree
    ///
    /// Example: note-scout tree "Node(5, Node(3), Node(8))"
    Tree {
        /// Tree expression: Node(label, left, right) or None
        expression: String,
    },

    /// Prompt for all three puzzles on the console
    Interactive {
        /// Use the mirror check for the bracket prompt
        #[arg(long)]
        mirror: bool,
    },

    /// Crawl the API reference and write notes files
    ///
    /// Example: note-scout crawl --workers 4 --out-dir notes
    Crawl(CrawlArgs),
}

#[derive(clap::Args, Debug)]
pub struct CrawlArgs {
    /// Page that lists every API
    #[arg(long, default_value = crate::crawl::DEFAULT_INDEX_URL)]
    pub index_url: String,

    /// Origin that relative links are joined onto
    #[arg(long, default_value = crate::crawl::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Only links containing this text are crawled
    #[arg(long, default_value = crate::crawl::DEFAULT_PATH_FILTER)]
    pub path_filter: String,

    /// Directory for the notes files (created if missing)
    #[arg(long, default_value = crate::crawl::DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Number of detail pages fetched at once
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub workers: u16,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Pause after each detail page, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Print the summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl From<&CrawlArgs> for CrawlConfig {
    fn from(args: &CrawlArgs) -> Self {
        CrawlConfig {
            index_url: args.index_url.clone(),
            base_url: args.base_url.clone(),
            path_filter: args.path_filter.clone(),
            out_dir: args.out_dir.clone(),
            workers: usize::from(args.workers),
            timeout: Duration::from_secs(args.timeout_secs),
            delay: Duration::from_millis(args.delay_ms),
        }
    }
}
