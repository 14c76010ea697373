// src/crawl/pipeline.rs
// =============================================================================
// Runs a whole crawl: index page -> detail pages -> notes files.
//
// How it works:
// 1. Fetch the index page (if this fails there is nothing to do)
// 2. Discover detail-page links on it
// 3. Fetch and extract every detail page, up to `workers` at a time
// 4. Write one file per API symbol, in discovery order
// 5. Report what happened to every page
//
// Failure isolation:
// - A page that times out, returns an error status or has no title is
//   recorded as failed and the crawl moves on.
// - Files are written only for pages that were fully extracted.
// - When two pages name the same symbol, the later page wins.
//
// Ordering:
// - `buffered` (not `buffer_unordered`) yields results in input order, so
//   files and the summary come out the same no matter which fetch finishes
//   first.
// =============================================================================

use std::collections::HashMap;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::Serialize;
use url::Url;

use super::config::CrawlConfig;
use super::discover::discover_links;
use super::extract::{extract_record, ApiRecord};
use super::writer::write_record;
use crate::error::CrawlError;

// What happened to one detail page
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageStatus {
    /// Notes were found and written to `path`
    Written { symbol: String, path: String, notes: usize },
    /// The page had no flagged notes; nothing written
    Empty,
    /// A later page produced the same symbol and replaced this one
    Superseded { symbol: String },
    /// Fetching, extracting or writing failed
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct PageOutcome {
    pub url: String,
    #[serde(flatten)]
    pub status: PageStatus,
}

// The result of one crawl run
#[derive(Debug, Clone, Serialize)]
pub struct CrawlSummary {
    pub index_url: String,
    pub pages: Vec<PageOutcome>,
}

impl CrawlSummary {
    pub fn written(&self) -> usize {
        self.count(|s| matches!(s, PageStatus::Written { .. }))
    }

    pub fn empty(&self) -> usize {
        self.count(|s| matches!(s, PageStatus::Empty))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, PageStatus::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&PageStatus) -> bool) -> usize {
        self.pages.iter().filter(|p| pred(&p.status)).count()
    }
}

pub async fn run_crawl(config: &CrawlConfig) -> Result<CrawlSummary> {
    let index_url = Url::parse(&config.index_url)
        .with_context(|| format!("invalid index URL '{}'", config.index_url))?;
    let base_url = Url::parse(&config.base_url)
        .with_context(|| format!("invalid base URL '{}'", config.base_url))?;

    tokio::fs::create_dir_all(&config.out_dir)
        .await
        .with_context(|| format!("could not create output directory {}", config.out_dir.display()))?;

    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("could not build HTTP client")?;

    log::info!("Fetching index page {}", index_url);
    let index_html = fetch_page(&client, index_url.as_str())
        .await
        .with_context(|| format!("could not fetch index page {}", index_url))?;

    let links = discover_links(&index_html, &base_url, &config.path_filter);
    log::info!("Discovered {} API page(s)", links.len());

    let pages = fetch_all(&client, links, config).await;

    // Index of the last page that produced each symbol
    let mut winners: HashMap<&str, usize> = HashMap::new();
    for (i, (_, result)) in pages.iter().enumerate() {
        if let Ok(Some(record)) = result {
            winners.insert(record.symbol.as_str(), i);
        }
    }

    let mut outcomes = Vec::with_capacity(pages.len());
    for (i, (url, result)) in pages.iter().enumerate() {
        let status = match result {
            Err(e) => {
                log::warn!("Failed {}: {}", url, e);
                PageStatus::Failed { reason: e.to_string() }
            }
            Ok(None) => {
                log::debug!("No notes on {}", url);
                PageStatus::Empty
            }
            Ok(Some(record)) if winners.get(record.symbol.as_str()) != Some(&i) => {
                log::warn!("{} is documented again later; keeping the later page", record.symbol);
                PageStatus::Superseded {
                    symbol: record.symbol.clone(),
                }
            }
            Ok(Some(record)) => match write_record(&config.out_dir, record).await {
                Ok(path) => {
                    log::info!("Wrote {} note(s) for {}", record.note_count(), record.symbol);
                    PageStatus::Written {
                        symbol: record.symbol.clone(),
                        path: path.display().to_string(),
                        notes: record.note_count(),
                    }
                }
                Err(e) => {
                    let e = CrawlError::from(e);
                    log::warn!("Failed {}: {}", record.symbol, e);
                    PageStatus::Failed { reason: e.to_string() }
                }
            },
        };
        outcomes.push(PageOutcome {
            url: url.to_string(),
            status,
        });
    }

    Ok(CrawlSummary {
        index_url: index_url.to_string(),
        pages: outcomes,
    })
}

// Fetches and extracts every detail page with bounded concurrency
async fn fetch_all(
    client: &Client,
    links: Vec<Url>,
    config: &CrawlConfig,
) -> Vec<(Url, Result<Option<ApiRecord>, CrawlError>)> {
    let delay = config.delay;

    let tasks = links.into_iter().map(|url| {
        let client = client.clone();
        async move {
            log::debug!("Fetching {}", url);
            let result = process_page(&client, &url).await;

            // Polite crawling: small delay before this worker takes the next page
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            (url, result)
        }
    });

    stream::iter(tasks)
        .buffered(config.workers.max(1))
        .collect()
        .await
}

async fn process_page(client: &Client, url: &Url) -> Result<Option<ApiRecord>, CrawlError> {
    let html = fetch_page(client, url.as_str()).await?;
    extract_record(&html)
}

// Fetches a page and returns its HTML
async fn fetch_page(client: &Client, url: &str) -> Result<String, CrawlError> {
    let response = client.get(url).send().await.map_err(CrawlError::from_request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(CrawlError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(CrawlError::from_request)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. buffered vs buffer_unordered
//    - Both run up to N futures at once
//    - buffer_unordered yields results as they finish
//    - buffered yields them in the order the futures were created
//    - We need the second so the output does not depend on network timing
//
// 2. Why two error types?
//    - CrawlError is per page: we store it in the summary and keep going
//    - anyhow::Error is for the whole run: a bad index page ends it
//
// 3. Why collect before writing?
//    - We only know which page "wins" a symbol after seeing all of them
// -----------------------------------------------------------------------------
