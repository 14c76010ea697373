// src/puzzles/parse.rs
// =============================================================================
// Builds a tree from a text expression such as
//
//     Node(5, Node(3), Node(8))
//     Node('root', None, Node('right'))
//     None
//
// This is a tiny recursive-descent parser: one function per grammar rule,
// each consuming input and returning either a value or a ParseError that
// says what was expected and where. Nothing in the input is ever executed.
//
// Grammar (whitespace allowed between tokens):
//
//     tree  := "None" | node
//     node  := "Node" "(" label [ "," child [ "," child ] ] ")"
//     child := node | "None"
//     label := number | 'text' | "text"
//     number := ["-"] digits [ "." [digits] ]
//
// Nesting is capped at MAX_DEPTH nodes so a hostile or runaway input comes
// back as ParseError::TooDeep instead of exhausting the stack.
// =============================================================================

use crate::error::ParseError;
use crate::puzzles::tree::{Label, Node};

// Deepest chain of nested Node(...) calls we accept
pub const MAX_DEPTH: usize = 256;

// Parses a whole tree expression
//
// Returns Ok(None) for an empty tree ("None" or blank input)
pub fn parse_tree(input: &str) -> Result<Option<Node>, ParseError> {
    let mut parser = Parser { input, pos: 0, depth: 0 };

    parser.skip_whitespace();
    if parser.at_end() {
        return Ok(None);
    }

    let tree = parser.child()?;

    parser.skip_whitespace();
    if !parser.at_end() {
        return Err(ParseError::TrailingInput {
            rest: parser.rest().to_string(),
            offset: parser.pos,
        });
    }

    Ok(tree)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    // How many node() calls are currently open
    depth: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    // Builds an "expected X, found Y" error at the current position
    fn unexpected(&self, expected: &'static str) -> ParseError {
        let found = match self.peek() {
            Some(c) => format!("'{}'", c),
            None => "end of input".to_string(),
        };
        ParseError::Unexpected {
            expected,
            found,
            offset: self.pos,
        }
    }

    // Consumes `keyword` if the input continues with it as a whole word
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        self.skip_whitespace();
        let rest = self.rest();
        if !rest.starts_with(keyword) {
            return false;
        }
        let boundary = rest[keyword.len()..]
            .chars()
            .next()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
        if boundary {
            self.pos += keyword.len();
        }
        boundary
    }

    fn eat_char(&mut self, wanted: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(wanted) {
            self.pos += wanted.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect_char(&mut self, wanted: char, expected: &'static str) -> Result<(), ParseError> {
        if self.eat_char(wanted) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    // child := node | "None"
    fn child(&mut self) -> Result<Option<Node>, ParseError> {
        if self.eat_keyword("None") {
            return Ok(None);
        }
        self.node().map(Some)
    }

    // node := "Node" "(" label [ "," child [ "," child ] ] ")"
    fn node(&mut self) -> Result<Node, ParseError> {
        self.skip_whitespace();
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_DEPTH,
                offset: self.pos,
            });
        }

        self.depth += 1;
        let node = self.node_body();
        self.depth -= 1;
        node
    }

    fn node_body(&mut self) -> Result<Node, ParseError> {
        if !self.eat_keyword("Node") {
            return Err(self.unexpected("'Node' or 'None'"));
        }
        self.expect_char('(', "'('")?;

        let label = self.label()?;
        let mut left = None;
        let mut right = None;

        // Both children are optional, but right needs left (or None) first
        if self.eat_char(',') {
            left = self.child()?;
            if self.eat_char(',') {
                right = self.child()?;
            }
        }

        self.expect_char(')', "')'")?;
        Ok(Node::new(label, left, right))
    }

    // label := number | 'text' | "text"
    fn label(&mut self) -> Result<Label, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(quote @ ('\'' | '"')) => self.text(quote),
            Some(c) if c == '-' || c.is_ascii_digit() => self.number(),
            _ => Err(self.unexpected("a label (number or quoted string)")),
        }
    }

    fn text(&mut self, quote: char) -> Result<Label, ParseError> {
        let start = self.pos;
        let body = &self.rest()[quote.len_utf8()..];
        match body.find(quote) {
            Some(end) => {
                let text = &body[..end];
                self.pos += quote.len_utf8() * 2 + end;
                Ok(Label::Text(text.to_string()))
            }
            None => Err(ParseError::UnterminatedString { offset: start }),
        }
    }

    // An integer ("-12") or a decimal ("2.5", "3.")
    fn number(&mut self) -> Result<Label, ParseError> {
        let start = self.pos;
        let rest = self.rest();
        let sign_len = usize::from(rest.starts_with('-'));
        let digits = count_digits(&rest[sign_len..]);

        if digits == 0 {
            self.pos += sign_len;
            return Err(self.unexpected("a digit"));
        }

        // Optional fractional part
        let mut len = sign_len + digits;
        let is_float = rest[len..].starts_with('.');
        if is_float {
            len += 1 + count_digits(&rest[len + 1..]);
        }

        let literal = &rest[..len];
        self.pos += len;

        if is_float {
            // Digits with at most one dot always parse as f64
            return literal
                .parse::<f64>()
                .map(Label::Float)
                .map_err(|_| ParseError::Unexpected {
                    expected: "a number",
                    found: format!("'{}'", literal),
                    offset: start,
                });
        }

        literal
            .parse::<i64>()
            .map(Label::Int)
            .map_err(|_| ParseError::IntegerOverflow {
                literal: literal.to_string(),
                offset: start,
            })
    }
}

// Length of the leading run of ASCII digits
fn count_digits(s: &str) -> usize {
    s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is recursive descent?
//    - Each grammar rule becomes a function
//    - A rule that contains another rule calls that function
//    - node() calls child(), which may call node() again
//
// 2. Why a depth limit?
//    - Every nested Node(...) uses one more stack frame
//    - Without a limit, very deep input would crash the program
//
// 3. Why track `pos` as a byte offset?
//    - &str slicing works on byte positions
//    - It also gives users a precise location in error messages
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::tree::Number;

    #[test]
    fn test_parse_three_nodes() {
        let tree = parse_tree("Node(5, Node(3), Node(8))").unwrap().unwrap();
        assert_eq!(tree, Node::new(5, Some(Node::leaf(3)), Some(Node::leaf(8))));
    }

    #[test]
    fn test_parse_none_and_blank() {
        assert_eq!(parse_tree("None").unwrap(), None);
        assert_eq!(parse_tree("   ").unwrap(), None);
        assert_eq!(parse_tree("").unwrap(), None);
    }

    #[test]
    fn test_parse_explicit_none_child() {
        let tree = parse_tree("Node(1, None, Node(-2))").unwrap().unwrap();
        assert!(tree.left().is_none());
        assert_eq!(tree.right().unwrap().label, Label::Int(-2));
    }

    #[test]
    fn test_parse_text_labels() {
        let tree = parse_tree(r#"Node('a', Node("b c"))"#).unwrap().unwrap();
        assert_eq!(tree.label, Label::from("a"));
        assert_eq!(tree.left().unwrap().label, Label::from("b c"));
    }

    #[test]
    fn test_parse_deep_nesting() {
        let tree = parse_tree("Node(1,Node(2,Node(3,Node(4))))").unwrap().unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.sum(), Ok(Number::Int(10)));
    }

    #[test]
    fn test_missing_paren() {
        let err = parse_tree("Node(5, Node(3)").unwrap_err();
        assert_eq!(
            err,
            ParseError::Unexpected {
                expected: "')'",
                found: "end of input".to_string(),
                offset: 15,
            }
        );
    }

    #[test]
    fn test_rejects_code() {
        assert!(parse_tree("__import__('os').system('ls')").is_err());
        assert!(parse_tree("Nodes(1)").is_err());
    }

    #[test]
    fn test_trailing_input() {
        let err = parse_tree("Node(1) junk").unwrap_err();
        assert!(matches!(err, ParseError::TrailingInput { offset: 8, .. }));
    }

    #[test]
    fn test_unterminated_string() {
        let err = parse_tree("Node('abc)").unwrap_err();
        assert_eq!(err, ParseError::UnterminatedString { offset: 5 });
    }

    #[test]
    fn test_integer_overflow() {
        let err = parse_tree("Node(99999999999999999999)").unwrap_err();
        assert!(matches!(err, ParseError::IntegerOverflow { offset: 5, .. }));
    }

    #[test]
    fn test_parse_decimal_labels() {
        let tree = parse_tree("Node(1.5, Node(2), Node(-0.25))").unwrap().unwrap();
        assert_eq!(tree.label, Label::Float(1.5));
        assert_eq!(tree.right().unwrap().label, Label::Float(-0.25));
        assert_eq!(tree.sum(), Ok(Number::Float(3.25)));

        // A trailing dot still makes a decimal
        let tree = parse_tree("Node(3.)").unwrap().unwrap();
        assert_eq!(tree.label, Label::Float(3.0));
    }

    #[test]
    fn test_runaway_nesting_is_an_error() {
        // Unclosed and far deeper than the limit; must not blow the stack
        let input = "Node(1,".repeat(200_000);
        let err = parse_tree(&input).unwrap_err();
        assert_eq!(
            err,
            ParseError::TooDeep {
                limit: MAX_DEPTH,
                offset: MAX_DEPTH * "Node(1,".len(),
            }
        );
    }

    #[test]
    fn test_nesting_at_limit_is_accepted() {
        let input = format!("{}{}", "Node(1,".repeat(MAX_DEPTH - 1), "Node(1)");
        let input = format!("{}{}", input, ")".repeat(MAX_DEPTH - 1));
        let tree = parse_tree(&input).unwrap().unwrap();
        assert_eq!(tree.len(), MAX_DEPTH);
    }

    #[test]
    fn test_lone_minus() {
        assert!(parse_tree("Node(-)").is_err());
    }
}
