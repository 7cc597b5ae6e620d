//! A library for building the truth table of a propositional formula, deciding equivalence claims, and classifying arguments.
//!
//! tabula evaluates formulas over single-letter atoms and the connectives ¬ ∧ ∨ → ↔ by brute-force enumeration of all 2ⁿ assignments, producing a column for every atom and every distinct sub-expression.
//!
//! An input line may be one of three sentences:
//! - A plain formula, in which case the table is the result.
//! - An equivalence claim `φ ≡ ψ`, in which case the two root columns are compared across every row.
//! - An argument `φ1, …, φn ⊢ ψ`, in which case the conclusion column is inspected on those rows where every premise holds.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! A context is built from a [configuration](crate::config) and evaluates one sentence at a time.
//! Internally, an evaluation is viewed in terms of two databases:
//! - Distinct sub-expressions are interned in a [key database](crate::db::key), each receiving a sequential [Key](crate::db::Key).
//! - The column of each key is stored in a [table database](crate::db::table), with every column aligned to the same enumeration of rows.
//!
//! Both databases are rebuilt at the start of every evaluation, so a context carries no state between sentences and independent contexts may be used from independent threads without locks.
//!
//! Useful starting points:
//! - The [evaluation procedure](crate::procedures::evaluate) for the post-order reduction of a formula to a column.
//! - The [classification procedure](crate::procedures::classify) for how arguments are judged.
//! - The [glyph sets](crate::config::glyphs) for the two supported input alphabets.
//!
//! # Examples
//!
//! + Modus ponens is a tautology.
//!
//! ```rust
//! # use tabula::config::Config;
//! # use tabula::context::Context;
//! # use tabula::reports::{ArgumentReport, Report};
//! let mut the_context = Context::from_config(Config::default());
//!
//! let report = the_context.evaluate("p→q,p⊢q").unwrap();
//! assert_eq!(report, Report::Argument(ArgumentReport::Tautology));
//! ```
//!
//! + Conjunction commutes.
//!
//! ```rust
//! # use tabula::config::Config;
//! # use tabula::context::Context;
//! # use tabula::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let report = the_context.evaluate("p∧q≡q∧p").unwrap();
//! assert_eq!(report, Report::Equivalence(true));
//! ```
//!
//! + Every sub-expression receives a column.
//!
//! ```rust
//! # use tabula::config::Config;
//! # use tabula::context::Context;
//! let mut the_context = Context::from_config(Config::default());
//!
//! the_context.evaluate("¬(p∧q)").unwrap();
//!
//! let labels = the_context.columns().iter().map(|(label, _)| label.to_string()).collect::<Vec<_>>();
//! assert_eq!(labels, vec!["p", "q", "p∧q", "¬(p∧q)"]);
//! ```
//!
//! # Resource bounds
//!
//! Memory and time are dominated by 2ⁿ-length columns multiplied by the count of distinct sub-expressions.
//! As such, a hard ceiling on the atom count is part of the [configuration](crate::config::Config::atom_limit), and an evaluation over too many atoms fails before any column is allocated.
//!
//! # Logs
//!
//! Calls to [log!](log) are made at notable points of an evaluation, under the targets listed in [misc::log].
//! No log implementation is provided by the library.
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/) logs of the parser alone can be filtered with `RUST_LOG=parser …`.

#![allow(mixed_script_confusables)]
#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod context;
pub mod procedures;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
