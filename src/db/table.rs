/*!
The table database --- one column of 2ⁿ cells per key, accessed via a [TableDB] struct.

Every column is aligned to the same enumeration of rows: row r of any column is the value of that key's sub-expression under assignment r.
The assignment convention is fixed --- atom i is true at row r iff `(r mod 2^(i+1)) < 2^i` --- so atom i's column alternates in blocks of 2^i, beginning true.
For example, over three atoms:

```none
r  p  q  s
0  T  T  T
1  F  T  T
2  T  F  T
3  F  F  T
4  T  T  F
…
```

Atom columns are written when the database is [seeded](TableDB::seed), which also fixes n for the lifetime of the database.
Compound columns are written exactly once each, by [put](TableDB::put) --- a column is never overwritten, as re-deriving a key must produce the identical column.
*/

use crate::{
    db::Key,
    misc::log::targets::{self},
    types::err::{self},
};

/// The table database.
#[derive(Debug, Default)]
pub struct TableDB {
    /// The count of rows, fixed at 2ⁿ by seeding.
    rows: usize,

    /// The column of each key, indexed by key.
    columns: Vec<Vec<bool>>,
}

impl TableDB {
    /// Seeds the database with one column per atom, fixing the row count at 2ⁿ.
    ///
    /// Keys `0..atom_count` are the atom keys, in alphabetical order, matching the intern order of the [key database](crate::db::key).
    /// Fails without allocating if `atom_count` exceeds `atom_limit`.
    pub fn seed(&mut self, atom_count: usize, atom_limit: usize) -> Result<(), err::TableError> {
        if atom_count > atom_limit {
            return Err(err::TableError::AtomLimit {
                count: atom_count,
                limit: atom_limit,
            });
        }

        self.rows = 1 << atom_count;
        log::debug!(target: targets::TABLE_DB, "Seeded {atom_count} atoms over {} rows", self.rows);

        for i in 0..atom_count {
            let half_period = 1 << i;
            let period = half_period << 1;

            let column = (0..self.rows).map(|r| (r % period) < half_period).collect();
            self.columns.push(column);
        }

        Ok(())
    }

    /// The count of rows, 2ⁿ after seeding.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The column of `key`.
    pub fn get(&self, key: Key) -> Result<&[bool], err::TableError> {
        match self.columns.get(key as usize) {
            Some(column) => Ok(column),
            None => Err(err::TableError::KeyMiss(key)),
        }
    }

    /// True if `key` has a column.
    pub fn contains(&self, key: Key) -> bool {
        (key as usize) < self.columns.len()
    }

    /// Writes the column of `key`.
    ///
    /// Keys are sequential and columns are immutable once written, so the only acceptable key is the first without a column.
    pub fn put(&mut self, key: Key, column: Vec<bool>) -> Result<(), err::TableError> {
        if key as usize != self.columns.len() || column.len() != self.rows {
            return Err(err::TableError::KeyMiss(key));
        }

        self.columns.push(column);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_columns_alternate_in_blocks() {
        for atom_count in 1..=4 {
            let mut db = TableDB::default();
            assert!(db.seed(atom_count, 24).is_ok());
            assert_eq!(1 << atom_count, db.rows());

            for i in 0..atom_count {
                let column = db.get(i as Key).unwrap();
                let half_period = 1 << i;

                for (r, value) in column.iter().enumerate() {
                    assert_eq!(*value, (r % (half_period * 2)) < half_period);
                }
            }
        }
    }

    #[test]
    fn seeding_respects_the_atom_limit() {
        let mut db = TableDB::default();
        assert_eq!(
            Err(err::TableError::AtomLimit { count: 5, limit: 4 }),
            db.seed(5, 4)
        );
    }

    #[test]
    fn columns_are_written_once() {
        let mut db = TableDB::default();
        assert!(db.seed(1, 24).is_ok());

        assert!(db.put(1, vec![false, false]).is_ok());
        assert!(db.put(1, vec![true, true]).is_err());
        assert_eq!(Ok([false, false].as_slice()), db.get(1));
    }
}
