/*!
Reports for the context.
*/

/// High-level reports regarding an evaluation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The sentence was a plain formula --- the table itself is the result.
    Table,

    /// The sentence was an equivalence claim, true if both sides agree on every row.
    Equivalence(bool),

    /// The sentence was an argument, with the noted classification.
    Argument(ArgumentReport),
}

/// The classification of an argument.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ArgumentReport {
    /// The conclusion is true on every row where all premises hold.
    Tautology,

    /// The conclusion is false on every row where all premises hold.
    Contradiction,

    /// The conclusion varies across the rows where all premises hold.
    Fallacy,

    /// No row satisfies every premise, so the conclusion is unconstrained.
    Vacuous,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "Table"),
            Self::Equivalence(value) => write!(f, "is equivalent: {value}"),
            Self::Argument(classification) => write!(f, "{classification}"),
        }
    }
}

impl std::fmt::Display for ArgumentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tautology => write!(f, "Tautology"),
            Self::Contradiction => write!(f, "Contradiction"),
            Self::Fallacy => write!(f, "Fallacy"),
            Self::Vacuous => write!(f, "Vacuous"),
        }
    }
}
