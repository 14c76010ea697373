// src/puzzles/brackets.rs
// =============================================================================
// The bracket matcher: are (), [] and {} properly nested?
//
// Two strategies live here:
// - Nesting (default): a classic stack. Push openers, pop on closers.
// - Mirror: the closing brackets, read backwards, must pair up one-to-one
//   with the opening brackets read forwards. This is looser in some ways and
//   stricter in others ("()[]" fails it), so it is only kept for comparison.
//
// Anything that is not a bracket is ignored.
// =============================================================================

// Which checking algorithm to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Nesting,
    Mirror,
}

pub fn check(sequence: &str, strategy: Strategy) -> bool {
    match strategy {
        Strategy::Nesting => is_balanced(sequence),
        Strategy::Mirror => is_mirrored(sequence),
    }
}

// The closing bracket that pairs with an opening bracket
fn closer_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

// Stack-based check
//
// Instead of pushing the opener we push the closer we expect to see,
// so a closer only has to be compared with the top of the stack.
pub fn is_balanced(sequence: &str) -> bool {
    let mut expected = Vec::new();

    for c in sequence.chars() {
        if let Some(close) = closer_for(c) {
            expected.push(close);
        } else if is_closer(c) && expected.pop() != Some(c) {
            return false;
        }
    }

    expected.is_empty()
}

// Mirror check over the two bracket lists
pub fn is_mirrored(sequence: &str) -> bool {
    let opening: Vec<char> = sequence.chars().filter(|&c| closer_for(c).is_some()).collect();
    let closing: Vec<char> = sequence.chars().rev().filter(|&c| is_closer(c)).collect();

    if opening.len() != closing.len() {
        return false;
    }

    opening
        .iter()
        .zip(&closing)
        .all(|(&open, &close)| closer_for(open) == Some(close))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is Vec a good stack?
//    - push() adds to the end, pop() removes from the end, both O(1)
//    - pop() returns Option, so an empty stack is just None
//
// 2. What does zip do?
//    - Walks two iterators side by side, yielding pairs
//    - .all() stops at the first pair that fails
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_is_valid() {
        assert!(is_balanced("([{}])"));
        assert!(is_mirrored("([{}])"));
    }

    #[test]
    fn test_crossed_is_invalid() {
        assert!(!is_balanced("([)]"));
        assert!(!is_mirrored("([)]"));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!is_balanced("(()"));
        assert!(!is_mirrored("(()"));
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(is_balanced(""));
        assert!(is_mirrored(""));
    }

    #[test]
    fn test_other_characters_ignored() {
        assert!(is_balanced("fn main() { let v = [1, 2]; }"));
    }

    #[test]
    fn test_closer_before_opener() {
        assert!(!is_balanced(")("));
        assert!(!is_balanced("]"));
    }

    #[test]
    fn test_siblings_differ_between_strategies() {
        // Sibling groups nest fine but do not mirror
        assert!(check("()[]", Strategy::Nesting));
        assert!(!check("()[]", Strategy::Mirror));
    }

    #[test]
    fn test_default_strategy_is_nesting() {
        assert_eq!(Strategy::default(), Strategy::Nesting);
    }
}
