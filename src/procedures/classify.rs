/*!
Classifying equivalence claims and arguments.

Both procedures read fully computed columns, and neither writes to a database.

An equivalence claim holds iff the two root columns agree on every row.

An argument is judged on the rows where every premise holds.
The premise columns are ANDed row-wise into a mask, and the conclusion column is inspected on mask-true rows:
- every value true → [Tautology](ArgumentReport::Tautology),
- every value false → [Contradiction](ArgumentReport::Contradiction),
- mixed values → [Fallacy](ArgumentReport::Fallacy).

If the mask selects no rows the premises are jointly unsatisfiable and the conclusion is unconstrained.
This case is reported as [Vacuous](ArgumentReport::Vacuous) rather than raised as an error --- the computation is well-defined, and whether vacuity is acceptable is a question for the caller.
*/

use crate::{
    context::Context,
    db::Key,
    misc::log::targets::{self},
    reports::ArgumentReport,
    types::err::{self},
};

impl Context {
    /// True if the columns of `l` and `r` agree on every row.
    pub(crate) fn equivalent(&self, l: Key, r: Key) -> Result<bool, err::ErrorKind> {
        Ok(self.table_db.get(l)? == self.table_db.get(r)?)
    }

    /// Classifies the argument from `premises` to `conclusion`.
    pub(crate) fn classify(
        &self,
        premises: &[Key],
        conclusion: Key,
    ) -> Result<ArgumentReport, err::ErrorKind> {
        let mut mask = vec![true; self.table_db.rows()];

        for premise in premises {
            for (cell, value) in mask.iter_mut().zip(self.table_db.get(*premise)?) {
                *cell &= value;
            }
        }

        let conclusion_column = self.table_db.get(conclusion)?;

        let mut relevant = mask
            .iter()
            .zip(conclusion_column)
            .filter(|(live, _)| **live)
            .map(|(_, value)| *value);

        let classification = match relevant.next() {
            None => ArgumentReport::Vacuous,

            Some(first) => {
                if relevant.any(|value| value != first) {
                    ArgumentReport::Fallacy
                } else if first {
                    ArgumentReport::Tautology
                } else {
                    ArgumentReport::Contradiction
                }
            }
        };

        log::debug!(target: targets::CLASSIFICATION, "Classified an argument with {} premises: {classification}", premises.len());

        Ok(classification)
    }
}
