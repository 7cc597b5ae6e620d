//! The procedures of an evaluation.
//!
//! In order of use: [tokenize], [parse], [evaluate], and --- for equivalence claims and arguments --- [classify].
//! Evaluation and classification are methods on a context, and are primarily placed here for documentation.

pub mod classify;
pub mod evaluate;
pub mod parse;
pub mod tokenize;
