/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made at notable points of an evaluation.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [tokenizer](crate::procedures::tokenize)
    pub const TOKENIZER: &str = "tokenizer";

    /// Logs related to the [parser](crate::procedures::parse)
    pub const PARSER: &str = "parser";

    /// Logs related to [evaluation](crate::procedures::evaluate)
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to [classification](crate::procedures::classify)
    pub const CLASSIFICATION: &str = "classification";

    /// Logs related to the [key database](crate::db::key)
    pub const KEY_DB: &str = "key_db";

    /// Logs related to the [table database](crate::db::table)
    pub const TABLE_DB: &str = "table_db";
}
