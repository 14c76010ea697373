// src/puzzles/tree.rs
// =============================================================================
// A small binary tree with the three classic traversals and a fold.
//
// Each Node owns its children through Box, so a child has exactly one
// parent and a cycle cannot be built. Trees are constructed once and never
// mutated afterwards.
//
// Every traversal goes through one recursive fold (`visit`) that hands
// labels to a combining function in the requested order. Traversals push
// into a single Vec; sums and other aggregates are folds over the same walk.
// =============================================================================

use std::convert::Infallible;
use std::fmt;

use crate::error::TreeError;

// The name/value stored in a node
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(n) => write!(f, "{}", n),
            Label::Float(x) => write_float(f, *x),
            Label::Text(s) => write!(f, "'{}'", s),
        }
    }
}

// The result of summing numeric labels
//
// Stays an integer while every label is an integer; one decimal label
// turns the whole sum into a float
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn plus(self, label: &Label) -> Result<Number, TreeError> {
        match (self, label) {
            (Number::Int(a), Label::Int(b)) => a.checked_add(*b).map(Number::Int).ok_or(TreeError::Overflow),
            (Number::Int(a), Label::Float(b)) => Ok(Number::Float(a as f64 + b)),
            (Number::Float(a), Label::Int(b)) => Ok(Number::Float(a + *b as f64)),
            (Number::Float(a), Label::Float(b)) => Ok(Number::Float(a + b)),
            (_, Label::Text(_)) => Err(TreeError::NonNumeric(label.to_string())),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) => write_float(f, *x),
        }
    }
}

// Whole floats keep a ".0" so they read differently from integers
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_finite() && x.fract() == 0.0 {
        write!(f, "{:.1}", x)
    } else {
        write!(f, "{}", x)
    }
}

impl From<i64> for Label {
    fn from(n: i64) -> Self {
        Label::Int(n)
    }
}

impl From<i32> for Label {
    fn from(n: i32) -> Self {
        Label::Int(i64::from(n))
    }
}

impl From<f64> for Label {
    fn from(x: f64) -> Self {
        Label::Float(x)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}

// Visit order for traversals and folds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// self, left, right
    Pre,
    /// left, self, right
    In,
    /// left, right, self
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub label: Label,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn new(label: impl Into<Label>, left: Option<Node>, right: Option<Node>) -> Self {
        Node {
            label: label.into(),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn leaf(label: impl Into<Label>) -> Self {
        Node::new(label, None, None)
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    // Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.fold(Order::Pre, 0, |count, _| count + 1)
    }

    pub fn pre_order(&self) -> Vec<Label> {
        self.traverse(Order::Pre)
    }

    pub fn in_order(&self) -> Vec<Label> {
        self.traverse(Order::In)
    }

    pub fn post_order(&self) -> Vec<Label> {
        self.traverse(Order::Post)
    }

    // Labels in the given order, collected into one Vec
    pub fn traverse(&self, order: Order) -> Vec<Label> {
        self.fold(order, Vec::new(), |mut labels, label| {
            labels.push(label.clone());
            labels
        })
    }

    // Reduces all labels to one value, visiting them in `order`
    pub fn fold<B, F>(&self, order: Order, init: B, mut f: F) -> B
    where
        F: FnMut(B, &Label) -> B,
    {
        let result: Result<B, Infallible> = self.try_fold(order, init, |acc, label| Ok(f(acc, label)));
        match result {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    // Like fold, but stops at the first error
    pub fn try_fold<B, E, F>(&self, order: Order, init: B, mut f: F) -> Result<B, E>
    where
        F: FnMut(B, &Label) -> Result<B, E>,
    {
        self.visit(order, init, &mut f)
    }

    // Sum of all numeric labels
    //
    // Fails on the first text label (in in-order position) or on
    // integer overflow
    pub fn sum(&self) -> Result<Number, TreeError> {
        self.try_fold(Order::In, Number::Int(0), Number::plus)
    }

    // The one recursive walk. The accumulator is threaded through by value,
    // so collecting into a Vec never copies partial results.
    fn visit<B, E, F>(&self, order: Order, mut acc: B, f: &mut F) -> Result<B, E>
    where
        F: FnMut(B, &Label) -> Result<B, E>,
    {
        if order == Order::Pre {
            acc = f(acc, &self.label)?;
        }
        if let Some(left) = self.left() {
            acc = left.visit(order, acc, f)?;
        }
        if order == Order::In {
            acc = f(acc, &self.label)?;
        }
        if let Some(right) = self.right() {
            acc = right.visit(order, acc, f)?;
        }
        if order == Order::Post {
            acc = f(acc, &self.label)?;
        }
        Ok(acc)
    }
}

// Formats labels like a list literal: [5, 3, 8] or ['a', 'b']
pub fn format_labels(labels: &[Label]) -> String {
    let parts: Vec<String> = labels.iter().map(Label::to_string).collect();
    format!("[{}]", parts.join(", "))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<Box<Node>>?
//    - A struct cannot contain itself directly (its size would be infinite)
//    - Box puts the child on the heap, so Node has a fixed size
//    - Option says the child may be missing
//
// 2. What is a fold?
//    - Start with a value, combine it with every element, end with one value
//    - Counting, summing and collecting into a Vec are all folds
//
// 3. What is Infallible?
//    - An error type with no values, so Result<T, Infallible> is always Ok
//    - `match never {}` proves to the compiler the Err arm cannot happen
//
// 4. Why does sum return Result?
//    - Text labels cannot be added, and i64 can overflow
//    - Returning an error is better than panicking or guessing
// -----------------------------------------------------------------------------
