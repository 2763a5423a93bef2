/*!
A database of clauses, aka. the knowledge base.

Clauses are only ever added.
On addition a clause is checked, its duplicate literals are removed, and a tautology is not stored (as it holds on every valuation).

- Unit clauses are stored as literals.
- Other clauses are stored in a [SlotMap], and accessed through [ClauseKey]s.
  For each literal, the keys of the stored clauses containing that literal are kept as an occurrence list, for use during [BCP](crate::procedures::bcp).
*/

use slotmap::{new_key_type, SlotMap};

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

new_key_type! {
    /// A key to access a (non-unit) clause stored in the clause database.
    pub struct ClauseKey;
}

/// How a clause was recorded by the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was stored.
    Added,

    /// The clause was a unit, and stored as a literal.
    AddedUnit,

    /// The clause was a tautology, and so not stored.
    Tautology,
}

/// Checks a clause could be added to a database, without adding the clause.
pub fn check_clause(clause: &[CLiteral]) -> Result<(), err::ClauseError> {
    if clause.is_empty() {
        log::error!(target: targets::CLAUSE_DB, "Attempt to add an empty clause");
        return Err(err::ClauseError::Empty);
    }
    if clause.contains(&0) {
        log::error!(target: targets::CLAUSE_DB, "Attempt to add a clause containing zero: {}", clause.as_dimacs(false));
        return Err(err::ClauseError::ZeroLiteral);
    }
    Ok(())
}

/// A database of clauses.
#[derive(Clone, Default)]
pub struct ClauseDB {
    /// Unit clauses, in order of addition.
    units: Vec<CLiteral>,

    /// All other clauses.
    clauses: SlotMap<ClauseKey, CClause>,

    /// Keys of the stored clauses containing a literal, indexed by the [index](Literal::index) of the literal.
    occurrences: Vec<Vec<ClauseKey>>,

    /// The greatest atom in any clause.
    max_atom: Atom,
}

impl ClauseDB {
    /// Stores a clause, after a check.
    pub fn store(&mut self, clause: &[CLiteral]) -> Result<ClauseOk, err::ClauseError> {
        check_clause(clause)?;

        let mut clause = clause.to_vec();
        // Literals on the same atom are adjacent.
        clause.sort_unstable_by_key(|literal| (literal.atom(), literal.polarity()));
        clause.dedup();

        if clause
            .windows(2)
            .any(|pair| pair[0].atom() == pair[1].atom())
        {
            log::trace!(target: targets::CLAUSE_DB, "Skipped tautology: {}", clause.as_dimacs(false));
            return Ok(ClauseOk::Tautology);
        }

        for literal in &clause {
            self.max_atom = std::cmp::max(self.max_atom, literal.atom());
        }

        if let [unit] = clause.as_slice() {
            log::trace!(target: targets::CLAUSE_DB, "Unit: {unit}");
            self.units.push(*unit);
            return Ok(ClauseOk::AddedUnit);
        }

        let required = (self.max_atom as usize + 1) * 2;
        if self.occurrences.len() < required {
            self.occurrences.resize_with(required, Vec::default);
        }

        log::trace!(target: targets::CLAUSE_DB, "Clause: {}", clause.as_dimacs(false));
        let literals = clause.clone();
        let key = self.clauses.insert(clause);
        for literal in literals {
            self.occurrences[literal.index()].push(key);
        }

        Ok(ClauseOk::Added)
    }

    /// The unit clauses of the database.
    pub fn units(&self) -> &[CLiteral] {
        &self.units
    }

    /// The clause with the given key, if it exists.
    pub fn get(&self, key: ClauseKey) -> Option<&CClause> {
        self.clauses.get(key)
    }

    /// The keys of all stored clauses which contain the literal.
    pub fn occurrences_of(&self, literal: CLiteral) -> &[ClauseKey] {
        match self.occurrences.get(literal.index()) {
            Some(keys) => keys,
            None => &[],
        }
    }

    /// An iterator over every clause in the database, units included.
    pub fn all_clauses(&self) -> impl Iterator<Item = CClause> + '_ {
        self.units
            .iter()
            .map(|unit| vec![*unit])
            .chain(self.clauses.values().cloned())
    }

    /// The greatest atom in any clause, or zero if no clause has been added.
    pub fn max_atom(&self) -> Atom {
        self.max_atom
    }

    /// A count of all clauses in the database, units included.
    pub fn clause_count(&self) -> usize {
        self.units.len() + self.clauses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed() {
        let mut clause_db = ClauseDB::default();
        assert_eq!(clause_db.store(&[]), Err(err::ClauseError::Empty));
        assert_eq!(clause_db.store(&[1, 0, 2]), Err(err::ClauseError::ZeroLiteral));
        assert_eq!(clause_db.clause_count(), 0);
    }

    #[test]
    fn duplicates_and_tautologies() {
        let mut clause_db = ClauseDB::default();
        assert_eq!(clause_db.store(&[2, 2]), Ok(ClauseOk::AddedUnit));
        assert_eq!(clause_db.store(&[1, -3, -1]), Ok(ClauseOk::Tautology));
        assert_eq!(clause_db.store(&[-2, 1, 2]), Ok(ClauseOk::Tautology));
        assert_eq!(clause_db.store(&[4, 1, 4, -3]), Ok(ClauseOk::Added));
        assert_eq!(clause_db.all_clauses().last(), Some(vec![1, -3, 4]));

        assert_eq!(clause_db.units(), &[2]);
        assert_eq!(clause_db.clause_count(), 2);
        assert_eq!(clause_db.max_atom(), 4);
        assert_eq!(clause_db.occurrences_of(-3).len(), 1);
        assert!(clause_db.occurrences_of(3).is_empty());
        assert!(clause_db.occurrences_of(-9).is_empty());
    }
}
