/*!
The key database --- an interner over sub-expressions, accessed via a [KeyDB] struct.

Interning is by *shape*: a [Shape] is one node whose operands are already-interned keys, so a lookup hashes a constant-size value rather than a subtree.
As evaluation visits sub-expressions in post-order, every operand holds a key before its parent is interned, and structurally identical sub-expressions collapse to one key wherever they appear in the sentence.

Alongside the key, the database records:
- A rendered label, built once at intern time from the operand labels and the active glyph set.
- A node count, used to order columns for display (innermost sub-expressions first).
*/

use std::collections::HashMap;

use crate::{
    config::GlyphSet,
    db::Key,
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// One expression node over interned operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// An atom.
    Atom(Atom),

    /// The negation of a key.
    Not(Key),

    /// The conjunction of two keys.
    And(Key, Key),

    /// The disjunction of two keys.
    Or(Key, Key),

    /// The conditional from one key to another.
    Implies(Key, Key),

    /// The biconditional of two keys.
    Iff(Key, Key),
}

/// The key database.
#[derive(Debug, Default)]
pub struct KeyDB {
    /// The key of each interned shape.
    keys: HashMap<Shape, Key>,

    /// The rendered label of each key, indexed by key.
    labels: Vec<String>,

    /// The node count of each key, indexed by key.
    sizes: Vec<usize>,
}

impl KeyDB {
    /// The key of `shape`, interning the shape if it is new.
    ///
    /// The operands of `shape` must already be interned, as the label and size of a fresh key are derived from those of its operands.
    pub fn intern(&mut self, shape: Shape, glyphs: &GlyphSet) -> Key {
        if let Some(key) = self.keys.get(&shape) {
            return *key;
        }

        let (label, size) = match shape {
            Shape::Atom(atom) => (atom.to_string(), 1),

            Shape::Not(e) => {
                let label = format!("{}{}", glyphs.not, self.operand_label(e));
                (label, 1 + self.sizes[e as usize])
            }

            Shape::And(l, r) => (
                self.binary_label(l, glyphs.and, r),
                1 + self.sizes[l as usize] + self.sizes[r as usize],
            ),

            Shape::Or(l, r) => (
                self.binary_label(l, glyphs.or, r),
                1 + self.sizes[l as usize] + self.sizes[r as usize],
            ),

            Shape::Implies(l, r) => (
                self.binary_label(l, glyphs.implies, r),
                1 + self.sizes[l as usize] + self.sizes[r as usize],
            ),

            Shape::Iff(l, r) => (
                self.binary_label(l, glyphs.iff, r),
                1 + self.sizes[l as usize] + self.sizes[r as usize],
            ),
        };

        let key = self.labels.len() as Key;
        log::trace!(target: targets::KEY_DB, "Interned {label} as {key}");

        self.keys.insert(shape, key);
        self.labels.push(label);
        self.sizes.push(size);

        key
    }

    /// The key of `shape`, if the shape has been interned.
    pub fn key_of(&self, shape: &Shape) -> Option<Key> {
        self.keys.get(shape).copied()
    }

    /// The rendered label of `key`.
    pub fn label(&self, key: Key) -> &str {
        &self.labels[key as usize]
    }

    /// The node count of the sub-expression interned at `key`.
    pub fn size(&self, key: Key) -> usize {
        self.sizes[key as usize]
    }

    /// A count of interned keys.
    pub fn count(&self) -> usize {
        self.labels.len()
    }

    /// All keys, ordered for display: by node count, ties broken by key.
    ///
    /// As atoms are interned first and have size one, atom columns lead in alphabetical order, followed by compound columns innermost-first.
    pub fn display_keys(&self) -> Vec<Key> {
        let mut keys = (0..self.count() as Key).collect::<Vec<_>>();
        keys.sort_by_key(|key| self.sizes[*key as usize]);
        keys
    }

    fn operand_label(&self, key: Key) -> String {
        match self.sizes[key as usize] {
            1 => self.labels[key as usize].clone(),
            _ => format!("({})", self.labels[key as usize]),
        }
    }

    fn binary_label(&self, l: Key, glyph: &str, r: Key) -> String {
        format!("{}{}{}", self.operand_label(l), glyph, self.operand_label(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_memoized() {
        let glyphs = GlyphSet::unicode();
        let mut db = KeyDB::default();

        let p = db.intern(Shape::Atom('p'), &glyphs);
        let q = db.intern(Shape::Atom('q'), &glyphs);
        let p_and_q = db.intern(Shape::And(p, q), &glyphs);

        assert_eq!(p, db.intern(Shape::Atom('p'), &glyphs));
        assert_eq!(p_and_q, db.intern(Shape::And(p, q), &glyphs));
        assert_eq!(3, db.count());
    }

    #[test]
    fn labels_wrap_compound_operands() {
        let glyphs = GlyphSet::unicode();
        let mut db = KeyDB::default();

        let p = db.intern(Shape::Atom('p'), &glyphs);
        let q = db.intern(Shape::Atom('q'), &glyphs);
        let p_and_q = db.intern(Shape::And(p, q), &glyphs);
        let negation = db.intern(Shape::Not(p_and_q), &glyphs);

        assert_eq!("p∧q", db.label(p_and_q));
        assert_eq!("¬(p∧q)", db.label(negation));
        assert_eq!(4, db.size(negation));
    }

    #[test]
    fn display_order_is_by_size_then_key() {
        let glyphs = GlyphSet::unicode();
        let mut db = KeyDB::default();

        let p = db.intern(Shape::Atom('p'), &glyphs);
        let q = db.intern(Shape::Atom('q'), &glyphs);
        let p_and_q = db.intern(Shape::And(p, q), &glyphs);
        let q_or_p = db.intern(Shape::Or(q, p), &glyphs);
        let nested = db.intern(Shape::Iff(p_and_q, q_or_p), &glyphs);

        assert_eq!(vec![p, q, p_and_q, q_or_p, nested], db.display_keys());
    }
}
