/*!
Configuration of a context.

All configuration for a context is fixed when the context is created.
As an evaluation is a pure function of the configuration and the input sentence, there is nothing to revise mid-evaluation, and no option carries state.
*/

pub mod glyphs;
pub use glyphs::GlyphSet;

/// The default ceiling on the count of distinct atoms in a sentence.
///
/// Each column of the table takes 2ⁿ cells for n atoms, so the ceiling is a guard against exhausting memory rather than a syntactic restriction.
pub const DEFAULT_ATOM_LIMIT: usize = 24;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The active glyph set, used when tokenizing input and when rendering labels.
    pub glyphs: GlyphSet,

    /// The ceiling on the count of distinct atoms in a sentence.
    pub atom_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            glyphs: GlyphSet::unicode(),
            atom_limit: DEFAULT_ATOM_LIMIT,
        }
    }
}

impl Config {
    /// The default configuration, with the ASCII glyph set active.
    pub fn ascii() -> Self {
        Config {
            glyphs: GlyphSet::ascii(),
            ..Config::default()
        }
    }
}
