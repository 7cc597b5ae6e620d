/*!
Glyph sets --- the literal text standing for each connective and each structural symbol.

Two sets are built in:

| | ¬ | ∧ | ∨ | → | ↔ | ≡ | ⊢ |
|---|---|---|---|---|---|---|---|
| [unicode](GlyphSet::unicode) | `¬` | `∧` | `∨` | `→` | `↔` | `≡` | `⊢` |
| [ascii](GlyphSet::ascii) | `!` | `&` | `\|` | `->` | `<>` | `=` | `+` |

Exactly one set is active for a context, fixed by its [configuration](crate::config::Config).
Mixing sets within one input is not supported --- glyphs from the inactive set are unknown characters.
*/

/// The glyphs standing for each connective and structural symbol.
///
/// Glyphs may be more than one character (e.g. `->`), and no glyph may be a letter, a parenthesis, a comma, or whitespace, as those are claimed by the fixed part of the syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphSet {
    /// Negation.
    pub not: &'static str,

    /// Conjunction.
    pub and: &'static str,

    /// Disjunction.
    pub or: &'static str,

    /// The (material) conditional.
    pub implies: &'static str,

    /// The biconditional.
    pub iff: &'static str,

    /// The equivalence claim separator.
    pub equivalence: &'static str,

    /// The turnstile, separating the premises of an argument from its conclusion.
    pub turnstile: &'static str,
}

impl GlyphSet {
    /// The Unicode glyph set: `¬` `∧` `∨` `→` `↔` `≡` `⊢`.
    pub fn unicode() -> Self {
        GlyphSet {
            not: "¬",
            and: "∧",
            or: "∨",
            implies: "→",
            iff: "↔",
            equivalence: "≡",
            turnstile: "⊢",
        }
    }

    /// The ASCII glyph set: `!` `&` `|` `->` `<>` `=` `+`.
    pub fn ascii() -> Self {
        GlyphSet {
            not: "!",
            and: "&",
            or: "|",
            implies: "->",
            iff: "<>",
            equivalence: "=",
            turnstile: "+",
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        GlyphSet::unicode()
    }
}
