// src/crawl/writer.rs
// =============================================================================
// Writes one notes file per API symbol.
//
// File name:  <out_dir>/<symbol>.txt   (created or overwritten)
// File body:  one line per note, "- <label>:<note>"
//
// The whole file is rendered in memory first and written in a single call,
// so a record either lands completely or not at all.
// =============================================================================

use std::path::{Path, PathBuf};

use tokio::fs;

use super::extract::ApiRecord;

// Renders a record into the text that goes into its file
pub fn render_record(record: &ApiRecord) -> String {
    let mut body = String::new();
    for (label, note) in record.lines() {
        body.push_str("- ");
        body.push_str(label);
        body.push(':');
        body.push_str(note);
        body.push('\n');
    }
    body
}

// Writes a record and returns the path of the file it wrote
pub async fn write_record(out_dir: &Path, record: &ApiRecord) -> std::io::Result<PathBuf> {
    fs::create_dir_all(out_dir).await?;

    let path = out_dir.join(file_name(&record.symbol));
    fs::write(&path, render_record(record)).await?;

    Ok(path)
}

// Symbols come from page titles, so keep them from escaping the directory
fn file_name(symbol: &str) -> String {
    let safe: String = symbol
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}.txt", safe)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why tokio::fs instead of std::fs?
//    - We are inside an async runtime
//    - tokio::fs runs the blocking file call on a helper thread, so other
//      tasks keep running
//
// 2. What is Path vs PathBuf?
//    - Path is borrowed (like &str), PathBuf is owned (like String)
//    - We take &Path and return the PathBuf we built
//
// 3. Why sanitize the file name?
//    - The symbol comes from a web page; "../x" would escape out_dir
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ApiRecord {
        let mut record = ApiRecord::new("Activity");
        record.insert("onCreate".into(), vec!["First.".into(), "Second.".into()]);
        record.insert("finish".into(), vec!["Third.".into()]);
        record
    }

    #[test]
    fn test_render_format() {
        assert_eq!(
            render_record(&record()),
            "- onCreate:First.\n- onCreate:Second.\n- finish:Third.\n"
        );
    }

    #[test]
    fn test_render_blank_note() {
        let mut record = ApiRecord::new("Service");
        record.insert("onBind".into(), vec!["".into(), "A".into()]);
        assert_eq!(render_record(&record), "- onBind:\n- onBind:A\n");
    }

    #[test]
    fn test_file_name_is_sanitized() {
        assert_eq!(file_name("Activity"), "Activity.txt");
        assert_eq!(file_name("../etc/passwd"), ".._etc_passwd.txt");
    }

    #[tokio::test]
    async fn test_write_creates_dir_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("outFiles");

        std::fs::create_dir_all(&out_dir).unwrap();
        std::fs::write(out_dir.join("Activity.txt"), "stale contents that are longer\n").unwrap();

        let path = write_record(&out_dir, &record()).await.unwrap();
        assert_eq!(path, out_dir.join("Activity.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), render_record(&record()));
    }

    #[tokio::test]
    async fn test_write_creates_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("nested").join("out");

        write_record(&out_dir, &record()).await.unwrap();
        assert!(out_dir.join("Activity.txt").exists());
    }
}
