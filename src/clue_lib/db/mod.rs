/*!
Databases of the library.

- The [registry] maps the names of a game to dense indices, and indices to atoms.
  It is built once and never revised.
- The [clause database](clause) stores the knowledge base of a [context](crate::context).
- The [atom database](atom) stores the valuation, and the trail of assignments, during a solve.
*/

pub mod atom;
pub mod clause;
pub mod registry;
