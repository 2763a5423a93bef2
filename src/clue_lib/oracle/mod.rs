/*!
The boundary between the encoding of a game and the satisfiability oracle.

An oracle holds a knowledge base --- a conjunction of clauses --- and supports two primitives:
- [add_clause](Oracle::add_clause), to conjoin a clause to the knowledge base, permanently.
- [test_literal](Oracle::test_literal), to determine whether the knowledge base entails a literal, entails its negation, or neither.

The bundled oracle is a [context](crate::context::Context).

```rust
# use clue_lib::context::Context;
# use clue_lib::oracle::{Entailment, Oracle};
let mut oracle = Context::default();

assert!(oracle.add_clause(&[1, 2]).is_ok());
assert!(oracle.add_clause(&[-1]).is_ok());

assert_eq!(oracle.test_literal(2), Ok(Entailment::True));
assert_eq!(oracle.test_literal(1), Ok(Entailment::False));
assert_eq!(oracle.test_literal(3), Ok(Entailment::Undetermined));
```
*/

use crate::{
    db::clause::check_clause,
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self},
};

/// What a knowledge base says of some literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entailment {
    /// The literal is true on every model of the knowledge base.
    True,

    /// The literal is false on every model of the knowledge base.
    False,

    /// The literal is true on some model, and false on some other model.
    Undetermined,
}

/// A satisfiability oracle.
pub trait Oracle {
    /// Conjoins the clause to the knowledge base.
    ///
    /// An empty clause, or a clause containing the zero literal, is an error and the knowledge base is unchanged.
    fn add_clause(&mut self, clause: &[CLiteral]) -> Result<(), err::ErrorKind>;

    /// Determines what the knowledge base says of the literal, without revising the knowledge base.
    ///
    /// If the knowledge base is unsatisfiable an [Inconsistent](err::OracleError::Inconsistent) error is returned.
    fn test_literal(&mut self, literal: CLiteral) -> Result<Entailment, err::ErrorKind>;

    /// Conjoins each clause to the knowledge base, if each clause is well formed.
    /// Otherwise, no clause is added.
    fn add_clauses(&mut self, clauses: &[CClause]) -> Result<(), err::ErrorKind> {
        for clause in clauses {
            check_clause(clause)?;
        }
        for clause in clauses {
            self.add_clause(clause)?;
        }
        Ok(())
    }
}
