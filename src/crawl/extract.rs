// src/crawl/extract.rs
// =============================================================================
// Page extraction: pull the flagged notes out of one API detail page.
//
// What we look for:
// - <title>: its first word names the API ("Activity | Android Developers"
//   becomes "Activity")
// - <div data-version-added="..."> without an id: one documented member
// - inside that div, <h3 class="api-name" data-text="...">: the member name
// - inside that div, every <p class="...">: a note (caution, warning, ...)
//
// Every note has its whitespace collapsed to single spaces.
// =============================================================================

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::error::CrawlError;

// All notes found under one member heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteGroup {
    pub label: String,
    pub notes: Vec<String>,
}

// The notes collected for one API symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiRecord {
    pub symbol: String,
    pub groups: Vec<NoteGroup>,
}

impl ApiRecord {
    pub fn new(symbol: impl Into<String>) -> Self {
        ApiRecord {
            symbol: symbol.into(),
            groups: Vec::new(),
        }
    }

    // Adds notes under a label. A label seen before keeps its position
    // but takes the new notes.
    pub fn insert(&mut self, label: String, notes: Vec<String>) {
        match self.groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.notes = notes,
            None => self.groups.push(NoteGroup { label, notes }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    // Total number of (label, note) lines this record will produce
    pub fn note_count(&self) -> usize {
        self.groups.iter().map(|g| g.notes.len()).sum()
    }

    // Every (label, note) pair in document order
    pub fn lines(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups
            .iter()
            .flat_map(|g| g.notes.iter().map(move |note| (g.label.as_str(), note.as_str())))
    }
}

// Extracts the API record from a detail page
//
// Returns:
//   Ok(Some(record)) - the page has at least one flagged note
//   Ok(None)         - the page is fine but has nothing to report
//   Err(MissingTitle) - we cannot tell which API this page documents
pub fn extract_record(html: &str) -> Result<Option<ApiRecord>, CrawlError> {
    let document = Html::parse_document(html);

    // Constant selectors; parsing them cannot fail at runtime
    let title = Selector::parse("title").unwrap();
    let container = Selector::parse("div[data-version-added]:not([id])").unwrap();
    let heading = Selector::parse("h3.api-name").unwrap();
    let paragraph = Selector::parse("p[class]").unwrap();

    let symbol = document
        .select(&title)
        .next()
        .and_then(|t| collapse_text(t).split(' ').next().map(str::to_string))
        .filter(|s| !s.is_empty())
        .ok_or(CrawlError::MissingTitle)?;

    let mut record = ApiRecord::new(symbol);

    for div in document.select(&container) {
        // Every classed paragraph counts, even one with no text,
        // so each produces exactly one line in the notes file
        let notes: Vec<String> = div.select(&paragraph).map(collapse_text).collect();

        if notes.is_empty() {
            continue;
        }

        for h3 in div.select(&heading) {
            let label = match h3.value().attr("data-text") {
                Some(text) => text.trim().to_string(),
                None => collapse_text(h3),
            };
            if label.is_empty() {
                log::debug!("skipping unnamed heading in {}", record.symbol);
                continue;
            }
            record.insert(label, notes.clone());
        }
    }

    Ok(if record.is_empty() { None } else { Some(record) })
}

// All text under an element with runs of whitespace turned into one space
fn collapse_text(element: ElementRef<'_>) -> String {
    let text: String = element.text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is :not([id])?
//    - A CSS pseudo-class: matches elements that do NOT have an id attribute
//    - div[data-version-added]:not([id]) = flagged divs without an id
//
// 2. Html vs ElementRef
//    - Html is the whole parsed document
//    - ElementRef points at one element inside it; .select() on it only
//      searches that element's descendants
//
// 3. Why Result<Option<ApiRecord>, _>?
//    - Err: the page is broken (no title)
//    - Ok(None): the page is fine but has nothing for us
//    - Ok(Some(..)): we found notes
//    - Callers can tell "nothing to do" apart from "something went wrong"
//
// 4. Why is ApiRecord a Vec of groups and not a HashMap?
//    - HashMap forgets insertion order
//    - The output file must follow the page's order
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
          <head><title>Activity | Android Developers</title></head>
          <body>
            <div data-version-added="1" id="summary">
              <h3 class="api-name" data-text="ignored">ignored</h3>
              <p class="note">Skipped because the div has an id.</p>
            </div>
            <div data-version-added="1">
              <h3 class="api-name" data-text="onCreate">onCreate</h3>
              <p>Plain paragraph without a class.</p>
              <p class="caution">Do not   call
                 this directly.</p>
              <p class="note">Runs on the <code>main</code> thread.</p>
            </div>
            <div data-version-added="3">
              <h3 class="api-name" data-text="finish">finish</h3>
              <p>No flagged notes here.</p>
            </div>
            <div data-version-added="5">
              <h3 class="api-name" data-text="recreate">recreate</h3>
              <p class="warning">Restarts the activity.</p>
            </div>
          </body>
        </html>
    "#;

    #[test]
    fn test_extracts_groups_in_document_order() {
        let record = extract_record(PAGE).unwrap().unwrap();
        assert_eq!(record.symbol, "Activity");
        assert_eq!(
            record.groups,
            vec![
                NoteGroup {
                    label: "onCreate".to_string(),
                    notes: vec![
                        "Do not call this directly.".to_string(),
                        "Runs on the main thread.".to_string(),
                    ],
                },
                NoteGroup {
                    label: "recreate".to_string(),
                    notes: vec!["Restarts the activity.".to_string()],
                },
            ]
        );
        assert_eq!(record.note_count(), 3);
    }

    #[test]
    fn test_no_containers_gives_none() {
        let html = "<html><head><title>Bundle | Android</title></head><body><p class='x'>hi</p></body></html>";
        assert_eq!(extract_record(html).unwrap(), None);
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let html = "<html><body><div data-version-added='1'></div></body></html>";
        assert!(matches!(extract_record(html), Err(CrawlError::MissingTitle)));
    }

    #[test]
    fn test_heading_text_used_without_data_text() {
        let html = r#"
            <title>Intent</title>
            <div data-version-added="1">
              <h3 class="api-name"> putExtra </h3>
              <p class="note">Note.</p>
            </div>
        "#;
        let record = extract_record(html).unwrap().unwrap();
        assert_eq!(record.groups[0].label, "putExtra");
    }

    #[test]
    fn test_empty_classed_paragraphs_are_kept() {
        let html = r#"
            <title>Service</title>
            <div data-version-added="1">
              <h3 class="api-name" data-text="onBind">onBind</h3>
              <p class="note"></p>
              <p class="note">A</p>
            </div>
            <div data-version-added="2">
              <h3 class="api-name" data-text="stopSelf">stopSelf</h3>
              <p class="caution">   </p>
            </div>
        "#;
        let record = extract_record(html).unwrap().unwrap();
        assert_eq!(record.groups[0].notes, vec!["".to_string(), "A".to_string()]);

        // A container whose only classed paragraph is blank still yields a group
        assert_eq!(record.groups[1].label, "stopSelf");
        assert_eq!(record.groups[1].notes, vec!["".to_string()]);
        assert_eq!(record.note_count(), 3);
    }

    #[test]
    fn test_repeated_label_replaces_notes_in_place() {
        let mut record = ApiRecord::new("X");
        record.insert("a".into(), vec!["1".into()]);
        record.insert("b".into(), vec!["2".into()]);
        record.insert("a".into(), vec!["3".into()]);

        let lines: Vec<_> = record.lines().collect();
        assert_eq!(lines, vec![("a", "3"), ("b", "2")]);
    }
}
