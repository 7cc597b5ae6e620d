/*!
(The representation of) an atom (aka. a propositional 'variable').

An atom is a single ASCII letter, and its identity is that letter.
Case is significant, so `p` and `P` are distinct atoms.

The atoms of a sentence are collected after parsing, deduplicated, and sorted alphabetically.
The alphabetical index of an atom fixes both its [key](crate::db::Key) (atoms receive the first keys) and the period of its seeded column (see [seed](crate::db::table::TableDB::seed)).
*/

/// An atom, aka. a propositional 'variable'.
pub type Atom = char;

/// True if the character may be read as an atom.
pub fn is_atom(character: char) -> bool {
    character.is_ascii_alphabetic()
}
