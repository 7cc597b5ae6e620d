//! Sentences --- the top-level shape of one input line.

use std::collections::BTreeSet;

use crate::structures::{atom::Atom, expression::Expression};

/// The parsed form of one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sentence {
    /// A plain formula, whose table is the result.
    Formula(Expression),

    /// An equivalence claim between two formulas.
    Equivalence(Expression, Expression),

    /// An argument from some premises to a conclusion.
    Argument {
        premises: Vec<Expression>,
        conclusion: Expression,
    },
}

impl Sentence {
    /// The atoms of the sentence, deduplicated and alphabetically sorted.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        let mut atoms = BTreeSet::default();

        match self {
            Sentence::Formula(e) => e.collect_atoms(&mut atoms),

            Sentence::Equivalence(l, r) => {
                l.collect_atoms(&mut atoms);
                r.collect_atoms(&mut atoms);
            }

            Sentence::Argument {
                premises,
                conclusion,
            } => {
                for premise in premises {
                    premise.collect_atoms(&mut atoms);
                }
                conclusion.collect_atoms(&mut atoms);
            }
        }

        atoms
    }
}
