/*!
The context --- within which sentences are evaluated.

A context owns a [configuration](crate::config) together with the [key](crate::db::key) and [table](crate::db::table) databases of the most recent evaluation.
Both databases are replaced with fresh instances at the start of every [evaluate](Context::evaluate) call, so no state crosses from one sentence to the next, and independent contexts may evaluate concurrently without locks.

A failed evaluation clears both databases --- no partial table is ever exposed.

# Example
```rust
# use tabula::config::Config;
# use tabula::context::Context;
# use tabula::reports::{ArgumentReport, Report};
let mut the_context = Context::from_config(Config::default());

let report = the_context.evaluate("p∨q⊢p").unwrap();
assert_eq!(report, Report::Argument(ArgumentReport::Fallacy));

// Four rows, and a column for each of p, q, and p∨q.
assert_eq!(the_context.rows(), 4);
assert_eq!(the_context.columns().len(), 3);
```
*/

use crate::{
    config::Config,
    db::key::{KeyDB, Shape},
    db::table::TableDB,
    procedures::{parse::parse, tokenize::tokenize, tokenize::Token},
    reports::Report,
    structures::sentence::Sentence,
    types::err::{self},
};

/// The context.
pub struct Context {
    /// The configuration, fixed for the lifetime of the context.
    pub config: Config,

    /// The key database of the most recent evaluation.
    pub key_db: KeyDB,

    /// The table database of the most recent evaluation.
    pub table_db: TableDB,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            key_db: KeyDB::default(),
            table_db: TableDB::default(),

            config,
        }
    }

    /// Evaluates one sentence, rebuilding both databases.
    ///
    /// On success the databases hold a column for every atom and every distinct sub-expression of the sentence, and the report notes the result of any equivalence claim or argument.
    /// On failure the databases are left empty.
    pub fn evaluate(&mut self, input: &str) -> Result<Report, err::ErrorKind> {
        self.key_db = KeyDB::default();
        self.table_db = TableDB::default();

        match self.evaluate_sentence(input) {
            Ok(report) => Ok(report),

            Err(e) => {
                self.key_db = KeyDB::default();
                self.table_db = TableDB::default();
                Err(e)
            }
        }
    }

    fn evaluate_sentence(&mut self, input: &str) -> Result<Report, err::ErrorKind> {
        let tokens = tokenize(input, &self.config.glyphs)?;

        if !tokens.iter().any(|token| matches!(token, Token::Atom(_))) {
            return Err(err::ParseError::Empty.into());
        }

        let sentence = parse(&tokens)?;

        let atoms = sentence.atoms();
        self.table_db.seed(atoms.len(), self.config.atom_limit)?;
        for atom in atoms {
            self.key_db.intern(Shape::Atom(atom), &self.config.glyphs);
        }

        match &sentence {
            Sentence::Formula(e) => {
                self.reduce(e)?;
                Ok(Report::Table)
            }

            Sentence::Equivalence(l, r) => {
                let l_key = self.reduce(l)?;
                let r_key = self.reduce(r)?;

                Ok(Report::Equivalence(self.equivalent(l_key, r_key)?))
            }

            Sentence::Argument {
                premises,
                conclusion,
            } => {
                let mut premise_keys = Vec::with_capacity(premises.len());
                for premise in premises {
                    premise_keys.push(self.reduce(premise)?);
                }
                let conclusion_key = self.reduce(conclusion)?;

                Ok(Report::Argument(
                    self.classify(&premise_keys, conclusion_key)?,
                ))
            }
        }
    }

    /// The labelled columns of the most recent evaluation, in display order.
    ///
    /// Atom columns lead, alphabetically, followed by compound columns ordered innermost-first (by node count, ties broken by key).
    pub fn columns(&self) -> Vec<(&str, &[bool])> {
        self.key_db
            .display_keys()
            .into_iter()
            .filter_map(|key| match self.table_db.get(key) {
                Ok(column) => Some((self.key_db.label(key), column)),
                Err(_) => None,
            })
            .collect()
    }

    /// The count of rows of the most recent evaluation, 2ⁿ for n atoms.
    pub fn rows(&self) -> usize {
        self.table_db.rows()
    }

    /// The count of atoms of the most recent evaluation.
    pub fn atom_count(&self) -> usize {
        self.key_db
            .display_keys()
            .into_iter()
            .take_while(|key| self.key_db.size(*key) == 1)
            .count()
    }
}
