//! Key structures --- expressions and the sentences built from them.
//!
//! An [expression](expression) is a tree over [atoms](atom) and the five connectives.
//! A [sentence](sentence) is the top-level shape of one input line: a plain formula, an equivalence claim, or an argument.
//!
//! Structures are produced by the [parser](crate::procedures::parse) and consumed by [evaluation](crate::procedures::evaluate).
//! They carry no truth values --- columns live in the [table database](crate::db::table), indexed by the [key](crate::db::Key) of the interned sub-expression.

pub mod atom;
pub mod expression;
pub mod sentence;
