//! Building and negating conditions.
//!
//! - [`translate_pair`] / [`translate_pairs`] turn (left, right) pairs into
//!   comparisons chosen by the shape of the right-hand side.
//! - [`compile_match`] turns LIKE text and regular expressions into match
//!   comparisons.
//! - [`invert`] produces the logical complement of a predicate.

mod invert;
mod pairs;
mod pattern;

pub use invert::invert;
pub use pairs::{translate_pair, translate_pairs, translate_pairs_with, ComparisonTarget};
pub use pattern::{compile_match, Pattern};
