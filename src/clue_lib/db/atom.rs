/*!
A database of atom related things.

Primarily, the current valuation and the trail of assignments which led to the valuation.

The trail is split into levels.
Level zero holds the unit clauses of the formula and any assumptions, and each further level begins with a decision.
As backtracking is chronological, each level also notes whether its decision has been flipped --- that is, whether the opposite decision was already tried.
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::{CValuation, Valuation},
};

/// A level of the trail, opened by a decision.
#[derive(Clone, Copy, Debug)]
pub struct Level {
    /// The index on the trail of the decision.
    pub start: usize,

    /// The decision.
    pub decision: CLiteral,

    /// Whether the decision is the negation of some earlier decision.
    pub flipped: bool,
}

/// The value of an atom conflicts with some literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValuationConflict(pub CLiteral);

/// The atom database.
#[derive(Clone, Default)]
pub struct AtomDB {
    /// The current valuation, indexed by atom.
    valuation: CValuation,

    /// Literals in the order they were assigned.
    trail: Vec<CLiteral>,

    /// The decision levels of the trail.
    levels: Vec<Level>,

    /// The index on the trail of the next literal to propagate.
    pub q_head: usize,
}

impl AtomDB {
    /// Ensures the valuation covers every atom up to and including `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        let required = atom as usize + 1;
        if self.valuation.len() < required {
            self.valuation.resize(required, None);
        }
    }

    /// Clears every value, and the trail.
    pub fn clear(&mut self) {
        self.valuation.iter_mut().for_each(|value| *value = None);
        self.trail.clear();
        self.levels.clear();
        self.q_head = 0;
    }

    /// The current valuation.
    pub fn valuation(&self) -> &CValuation {
        &self.valuation
    }

    /// The value of an atom, if the atom has some value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom).flatten()
    }

    /// The value of a literal, if the atom of the literal has some value.
    pub fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// Values the atom of the literal so the literal is true, and notes the literal on the trail.
    ///
    /// Nothing is done if the literal is already true, and a conflict is returned if the literal is false.
    pub fn set_value(&mut self, literal: CLiteral) -> Result<(), ValuationConflict> {
        self.ensure_atom(literal.atom());
        match self.valuation[literal.atom() as usize] {
            Some(value) if value == literal.polarity() => Ok(()),
            Some(_) => Err(ValuationConflict(literal)),
            None => {
                self.valuation[literal.atom() as usize] = Some(literal.polarity());
                self.trail.push(literal);
                Ok(())
            }
        }
    }

    /// Opens a new level with the given decision, and values the decision.
    pub fn decide(&mut self, decision: CLiteral, flipped: bool) -> Result<(), ValuationConflict> {
        self.levels.push(Level {
            start: self.trail.len(),
            decision,
            flipped,
        });
        self.set_value(decision)
    }

    /// Removes the top level, clearing the value of every atom assigned at the level.
    /// Returns the level, if some level above level zero existed.
    pub fn backtrack(&mut self) -> Option<Level> {
        let level = self.levels.pop()?;
        for literal in self.trail.split_off(level.start) {
            self.valuation[literal.atom() as usize] = None;
        }
        self.q_head = std::cmp::min(self.q_head, level.start);
        Some(level)
    }

    /// The literal on the trail at the given index.
    pub fn trail_literal(&self, index: usize) -> Option<CLiteral> {
        self.trail.get(index).copied()
    }

    /// The number of decision levels above level zero.
    pub fn level(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_backtrack() {
        let mut atom_db = AtomDB::default();
        assert_eq!(atom_db.set_value(1), Ok(()));
        assert_eq!(atom_db.decide(-2, false), Ok(()));
        assert_eq!(atom_db.set_value(3), Ok(()));

        assert_eq!(atom_db.set_value(-1), Err(ValuationConflict(-1)));
        assert_eq!(atom_db.literal_value(-2), Some(true));
        assert_eq!(atom_db.level(), 1);

        let level = atom_db.backtrack().unwrap();
        assert_eq!(level.decision, -2);
        assert_eq!(atom_db.value_of(2), None);
        assert_eq!(atom_db.value_of(3), None);
        assert_eq!(atom_db.value_of(1), Some(true));
        assert!(atom_db.backtrack().is_none());
    }
}
