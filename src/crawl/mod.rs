// src/crawl/mod.rs
// =============================================================================
// This module crawls a documentation site and saves flagged API notes.
//
// Stages:
// - discover: find detail-page links on the index page
// - extract: pull (member name, notes) groups out of one detail page
// - writer: save one "<symbol>.txt" file per API
// - pipeline: run the stages with timeouts, bounded concurrency and
//   per-page failure isolation
//
// Rust concepts:
// - Async programming: network requests and file writes
// - Streams: a bounded number of page fetches in flight
// =============================================================================

mod config;
mod discover;
mod extract;
mod pipeline;
mod writer;

pub use config::{CrawlConfig, DEFAULT_BASE_URL, DEFAULT_INDEX_URL, DEFAULT_OUT_DIR, DEFAULT_PATH_FILTER};
pub use pipeline::{run_crawl, CrawlSummary, PageStatus};
