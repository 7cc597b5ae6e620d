/*!
Evaluating a formula --- reducing an expression tree to the key of a fully computed column.

Evaluation is one post-order traversal.
At each node the operand keys are obtained first, the node is [interned](crate::db::key::KeyDB::intern) as a [Shape](crate::db::key::Shape) over those keys, and --- if the key is fresh --- the column is computed row-by-row from the operand columns and stored.
A repeated sub-expression resolves to an already-stored key, so each distinct sub-expression is computed once however often it appears.

The boolean semantics, elementwise over columns:

| Connective | Row value |
|---|---|
| ¬a | complement(a) |
| a∧b | a ∧ b |
| a∨b | a ∨ b |
| a→b | ¬(a ∧ ¬b) |
| a↔b | a = b |

Atom keys are seeded before any traversal, so the operand columns of a compound are always present when the compound is reached --- a missing column is an invariant violation, surfaced as a [KeyMiss](crate::types::err::TableError::KeyMiss).
*/

use crate::{
    context::Context,
    db::{key::Shape, Key},
    misc::log::targets::{self},
    structures::expression::Expression,
    types::err::{self},
};

impl Context {
    /// Reduces `expression` to the key of a fully computed column.
    pub(crate) fn reduce(&mut self, expression: &Expression) -> Result<Key, err::ErrorKind> {
        let shape = match expression {
            Expression::Atom(atom) => Shape::Atom(*atom),

            Expression::Not(e) => Shape::Not(self.reduce(e)?),

            Expression::And(l, r) => Shape::And(self.reduce(l)?, self.reduce(r)?),

            Expression::Or(l, r) => Shape::Or(self.reduce(l)?, self.reduce(r)?),

            Expression::Implies(l, r) => Shape::Implies(self.reduce(l)?, self.reduce(r)?),

            Expression::Iff(l, r) => Shape::Iff(self.reduce(l)?, self.reduce(r)?),
        };

        let key = self.key_db.intern(shape, &self.config.glyphs);

        if !self.table_db.contains(key) {
            let column = self.compute(key, shape)?;

            log::trace!(target: targets::EVALUATION, "Computed {} ({key})", self.key_db.label(key));
            self.table_db.put(key, column)?;
        }

        Ok(key)
    }

    // The column of a fresh compound key, from the already-stored operand columns.
    fn compute(&self, key: Key, shape: Shape) -> Result<Vec<bool>, err::TableError> {
        let column = match shape {
            // Atoms are seeded up front, so a fresh atom key is an invariant violation.
            Shape::Atom(_) => return Err(err::TableError::KeyMiss(key)),

            Shape::Not(e) => self.table_db.get(e)?.iter().map(|a| !a).collect(),

            Shape::And(l, r) => self.combine(l, r, |a, b| a && b)?,

            Shape::Or(l, r) => self.combine(l, r, |a, b| a || b)?,

            Shape::Implies(l, r) => self.combine(l, r, |a, b| !(a && !b))?,

            Shape::Iff(l, r) => self.combine(l, r, |a, b| a == b)?,
        };

        Ok(column)
    }

    fn combine(
        &self,
        l: Key,
        r: Key,
        op: impl Fn(bool, bool) -> bool,
    ) -> Result<Vec<bool>, err::TableError> {
        let l_column = self.table_db.get(l)?;
        let r_column = self.table_db.get(r)?;

        Ok(l_column
            .iter()
            .zip(r_column)
            .map(|(a, b)| op(*a, *b))
            .collect())
    }
}
