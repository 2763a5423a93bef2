/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a vector of optional booleans, where each index of the vector is interpreted as an atom.
Index zero is never an atom, and is kept only so atoms may be used directly as indicies.

```rust
# use clue_lib::structures::valuation::Valuation;
let valuation = vec![None, None, Some(true), None];

assert_eq!(valuation.value_of(2), Some(Some(true)));
assert_eq!(valuation.value_of(7), None);
assert_eq!(valuation.unvalued_atoms().count(), 2);
assert_eq!(valuation.atom_valued_pairs().collect::<Vec<_>>(), vec![(2, true)]);
```
*/

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of a atom under the valuation, or otherwise nothing if the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// An iterator through all (Atom, Value) pairs for such that the atom has some value.
    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)>;

    /// An iterator through atoms which do not have some value (excluding the reserved zero index).
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// A count of all the atoms in the valuation (excluding the reserved zero index).
    fn atom_count(&self) -> usize;
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        match atom {
            0 => None,
            _ => self.get(atom as usize).copied(),
        }
    }

    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| value.map(|v| (atom as Atom, v)))
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| match value {
                None => Some(atom as Atom),
                Some(_) => None,
            })
    }

    fn atom_count(&self) -> usize {
        self.len().saturating_sub(1)
    }
}
