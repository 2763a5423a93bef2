/*!
(The representation of) an atom, aka. a 'variable'.

Each atom is a u32 *u* greater than zero.
The value `0` is reserved, as in the DIMACS format, to mean "no literal".

Atoms for the location of a card are minted by the [registry](crate::db::registry), which fixes the atom of the proposition "card *c* is at location *l*" to:

```none
l * card_count + c + 1
```

And so the atoms of a game are exactly [1..=locations * cards].

```rust
# use clue_lib::structures::atom::{Atom, ATOM_MAX};
let atom: Atom = 97;
assert!(atom <= ATOM_MAX);
```
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, bounded by the integer representation of literals.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
