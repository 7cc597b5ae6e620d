/*!
Expressions --- trees over atoms and the five connectives.

An expression is the parsed form of a formula, prior to any evaluation.
Parentheses in the input fix the shape of the tree and are not recorded: `(p∧q)` and `p∧q` are the same expression, and so receive the same [key](crate::db::Key) and the same column.

Labels are not rendered from expressions.
Instead, the [key database](crate::db::key) builds the label of each sub-expression from the labels of its operands as keys are interned, so a label is produced once however often the sub-expression appears.
*/

use std::collections::BTreeSet;

use crate::structures::atom::Atom;

/// An expression over atoms and the five connectives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    /// An atom.
    Atom(Atom),

    /// ¬e
    Not(Box<Expression>),

    /// l ∧ r
    And(Box<Expression>, Box<Expression>),

    /// l ∨ r
    Or(Box<Expression>, Box<Expression>),

    /// l → r
    Implies(Box<Expression>, Box<Expression>),

    /// l ↔ r
    Iff(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Collects the atoms of the expression into `atoms`.
    ///
    /// A [BTreeSet] is used so the collection is deduplicated and alphabetically sorted as it is built.
    pub fn collect_atoms(&self, atoms: &mut BTreeSet<Atom>) {
        match self {
            Expression::Atom(atom) => {
                atoms.insert(*atom);
            }

            Expression::Not(e) => e.collect_atoms(atoms),

            Expression::And(l, r)
            | Expression::Or(l, r)
            | Expression::Implies(l, r)
            | Expression::Iff(l, r) => {
                l.collect_atoms(atoms);
                r.collect_atoms(atoms);
            }
        }
    }
}
