// src/puzzles/mod.rs
// =============================================================================
// The small standalone algorithms.
//
// Submodules:
// - sequence: near-uniform letter frequency classifier
// - brackets: bracket nesting checker
// - tree: binary tree, traversals and folds
// - parse: safe parser that builds trees from text
// - session: the interactive three-prompt console driver
//
// Everything here is synchronous and free of global state.
// =============================================================================

mod brackets;
mod parse;
mod sequence;
mod session;
mod tree;

pub use brackets::{check as check_brackets, Strategy};
pub use parse::parse_tree;
pub use sequence::{classify, Verdict};
pub use session::{print_tree_report, run_session};
