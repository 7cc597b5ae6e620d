//! Databases holding the information built up during an evaluation.
//!
//! - [The key database](crate::db::key)
//!   + An interner over sub-expressions. \
//!     Each structurally distinct sub-expression receives one sequential [Key], together with a rendered label and a node count.
//!     Atoms are interned first, in alphabetical order, so the atom keys are `0..n`.
//! - [The table database](crate::db::table)
//!   + One column of 2ⁿ cells per key, with every column aligned to the same enumeration of rows.
//!     Atom columns are seeded from a fixed bit-order convention, compound columns are written once each during evaluation.
//!
//! Both databases grow monotonically during an evaluation and are read-only afterwards.
//! A context replaces both with fresh instances at the start of each evaluation.

pub mod key;
pub mod table;

/// The key of an interned sub-expression, and the index of its column.
///
/// Keys are assigned sequentially from zero, so a key is usable as an index into any per-key structure.
pub type Key = u32;
