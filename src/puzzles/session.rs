// src/puzzles/session.rs
// =============================================================================
// The interactive console session: three prompts, three answers.
//
// 1. A string to classify           -> "Valid" / "Not valid"
// 2. A string of brackets            -> "Valid" / "Not valid"
// 3. A tree expression               -> the three traversals and the sum
//
// The session is generic over BufRead/Write so tests can drive it with
// in-memory buffers instead of a real terminal.
// =============================================================================

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::brackets::{self, Strategy};
use super::parse::parse_tree;
use super::sequence::{classify, Verdict};
use super::tree::{format_labels, Node};

// What happened during one session, so main can pick an exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub sequence: Verdict,
    pub brackets: Verdict,
    pub tree_ok: bool,
}

impl SessionReport {
    pub fn all_ok(&self) -> bool {
        self.sequence.is_valid() && self.brackets.is_valid() && self.tree_ok
    }
}

pub fn run_session<R: BufRead, W: Write>(mut input: R, mut output: W, strategy: Strategy) -> Result<SessionReport> {
    let line = prompt(&mut input, &mut output, "Enter the string to evaluate: ")?;
    let sequence = classify(&line);
    writeln!(output, "{}", sequence)?;

    let line = prompt(&mut input, &mut output, "Enter the string of brackets to evaluate: ")?;
    let brackets = Verdict::from(brackets::check(&line, strategy));
    writeln!(output, "{}", brackets)?;

    let line = prompt(&mut input, &mut output, "Enter your tree: ")?;
    let tree_ok = match parse_tree(&line) {
        Ok(tree) => print_tree_report(&mut output, tree.as_ref())?,
        Err(e) => {
            writeln!(output, "Invalid tree: {}", e)?;
            false
        }
    };

    Ok(SessionReport {
        sequence,
        brackets,
        tree_ok,
    })
}

// Prints traversals and sum; returns false if the sum could not be computed
pub fn print_tree_report<W: Write>(output: &mut W, tree: Option<&Node>) -> Result<bool> {
    let Some(root) = tree else {
        writeln!(output, "Preorder: []")?;
        writeln!(output, "Inorder: []")?;
        writeln!(output, "Postorder: []")?;
        writeln!(output, "Tree sum: 0")?;
        return Ok(true);
    };

    writeln!(output, "Preorder: {}", format_labels(&root.pre_order()))?;
    writeln!(output, "Inorder: {}", format_labels(&root.in_order()))?;
    writeln!(output, "Postorder: {}", format_labels(&root.post_order()))?;

    match root.sum() {
        Ok(total) => {
            writeln!(output, "Tree sum: {}", total)?;
            Ok(true)
        }
        Err(e) => {
            writeln!(output, "Tree sum: error: {}", e)?;
            Ok(false)
        }
    }
}

// Writes the prompt and reads one line, without its line ending
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<String> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("failed to read from console")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (SessionReport, String) {
        let mut out = Vec::new();
        let report = run_session(Cursor::new(script), &mut out, Strategy::Nesting).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_session() {
        let (report, out) = run("aabbcc\n([{}])\nNode(5, Node(3), Node(8))\n");
        assert!(report.all_ok());
        assert_eq!(
            out,
            "Enter the string to evaluate: Valid\n\
             Enter the string of brackets to evaluate: Valid\n\
             Enter your tree: Preorder: [5, 3, 8]\n\
             Inorder: [3, 5, 8]\n\
             Postorder: [3, 8, 5]\n\
             Tree sum: 16\n"
        );
    }

    #[test]
    fn test_empty_tree_defaults() {
        let (report, out) = run("abc123\n(()\nNone\n");
        assert_eq!(report.sequence, Verdict::NotValid);
        assert_eq!(report.brackets, Verdict::NotValid);
        assert!(report.tree_ok);
        assert!(out.ends_with("Preorder: []\nInorder: []\nPostorder: []\nTree sum: 0\n"));
    }

    #[test]
    fn test_malformed_tree_is_reported() {
        let (report, out) = run("ab\n()\nNode(5\n");
        assert!(!report.tree_ok);
        assert!(out.contains("Invalid tree: expected"));
    }

    #[test]
    fn test_text_labels_cannot_be_summed() {
        let (report, out) = run("ab\n()\nNode('a', Node('b'))\n");
        assert!(!report.tree_ok);
        assert!(out.contains("Preorder: ['a', 'b']"));
        assert!(out.contains("Tree sum: error: cannot sum non-numeric label 'b'"));
    }

    #[test]
    fn test_decimal_labels_are_summed() {
        let (report, out) = run("ab\n()\nNode(1.5, Node(2))\n");
        assert!(report.tree_ok);
        assert!(out.contains("Inorder: [2, 1.5]"));
        assert!(out.ends_with("Tree sum: 3.5\n"));
    }

    #[test]
    fn test_runaway_tree_is_reported_not_fatal() {
        let script = format!("ab\n()\n{}\n", "Node(1,".repeat(100_000));
        let (report, out) = run(&script);
        assert!(!report.tree_ok);
        assert!(out.contains("Invalid tree: tree nested deeper than"));
    }

    #[test]
    fn test_windows_line_endings() {
        let (report, _) = run("aabbc\r\n[]\r\nNone\r\n");
        assert!(report.all_ok());
    }
}
