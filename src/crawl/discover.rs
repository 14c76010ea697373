// src/crawl/discover.rs
// =============================================================================
// Link discovery: find the API detail pages listed on the index page.
//
// The index page lists every class in a table, so we only look at
// <a href> elements that sit inside <td> cells. A link survives when:
// - it contains the path filter (e.g. "/reference/android/")
// - it is relative (absolute links point at other sites)
// - it has no '#' (anchors into the same page or a page section)
//
// Surviving links are joined onto the base origin.
// Order and duplicates are preserved: N links in, N fetches out.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts detail-page URLs from the index page HTML
//
// Example:
//   html = "<td><a href='/reference/android/app/Activity'>Activity</a></td>"
//   base = "https://developer.android.com"
//   result = ["https://developer.android.com/reference/android/app/Activity"]
pub fn discover_links(html: &str, base: &Url, path_filter: &str) -> Vec<Url> {
    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // The selector is a constant, so a parse failure is a programmer error
    let selector = Selector::parse("td a[href]").unwrap();

    document
        .select(&selector)
        // Elements without an href attribute are dropped here
        .filter_map(|element| element.value().attr("href"))
        // Keep only relative API links
        .filter(|href| is_candidate(href, path_filter))
        // Turn "/reference/..." into a full URL on the base origin
        .filter_map(|href| match base.join(href) {
            Ok(url) => Some(url),
            Err(e) => {
                log::debug!("skipping unjoinable link {}: {}", href, e);
                None
            }
        })
        .collect()
}

fn is_candidate(href: &str, path_filter: &str) -> bool {
    href.contains(path_filter) && !href.contains('#') && !is_absolute(href)
}

// True for anything with a scheme ("https:", "mailto:", ...) or "//host"
fn is_absolute(href: &str) -> bool {
    href.starts_with("//") || Url::parse(href).is_ok()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does "td a[href]" mean?
//    - A CSS descendant selector: any <a> with an href, somewhere inside a <td>
//    - scraper evaluates it over the whole parsed document
//
// 2. Why filter_map?
//    - It maps and filters in one step: return Some(x) to keep, None to drop
//    - Here it drops elements without an href and links that fail to join
//
// 3. What does Url::join do?
//    - Resolves a relative link like a browser would
//    - "https://site.com" + "/reference/x" = "https://site.com/reference/x"
//
// 4. Why is Url::parse used to detect absolute links?
//    - Parsing without a base only succeeds when the text has a scheme
//    - "/reference/x" fails (relative), "https://x" and "mailto:a" succeed
// -----------------------------------------------------------------------------
