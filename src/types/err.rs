//! Error types used in the library.
//!
//! - All errors are terminal for the evaluation in which they arise --- a failed evaluation exposes no partial table, and as an evaluation is a pure function of its input, retrying has no value.
//! - Parse errors are external, and expected whenever input is read from a user.
//! - Table errors other than the atom limit indicate an internal invariant was broken, and are propagated rather than unwrapped so a caller is never taken down by a bug in the library.
//
//  As the names of the error enums overlap with corresponding areas of the library, err::{self} is often used to prefix use of the types with `err::`.

use crate::db::Key;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Parse(ParseError),
    Table(TableError),
}

/// Noted errors while tokenizing or parsing a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// No atoms were found in the input.
    Empty,

    /// A parenthesis without a mate.
    UnbalancedParentheses,

    /// A parenthesized group with nothing inside.
    EmptyParentheses,

    /// The token at the noted index could not be used.
    UnexpectedToken(usize),

    /// The input ended where an operand was required.
    UnexpectedEnd,

    /// An equivalence sign, turnstile, or premise comma, somewhere other than the top level of the sentence, or repeated.
    MisplacedStructure,

    /// A character belonging to no glyph of the active set.
    UnknownCharacter(char),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors in the table database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The sentence contains more atoms than the configured ceiling allows.
    ///
    /// Each column takes 2ⁿ cells, so this is checked before any column is allocated.
    AtomLimit { count: usize, limit: usize },

    /// A column was requested for a key which has none, or written out of key order.
    /// Either way an invariant of evaluation was broken, which is unexpected.
    KeyMiss(Key),
}

impl From<TableError> for ErrorKind {
    fn from(e: TableError) -> Self {
        ErrorKind::Table(e)
    }
}
