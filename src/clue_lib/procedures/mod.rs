/*!
Procedures of a [context](crate::context::Context).

- [solve] determines the satisfiability of the clause database, perhaps given some assumptions.
- [bcp] propagates the consequences of an assignment.
- [decision] chooses a value for some atom without a value.
- [entailment] tests whether the clause database entails a literal.
*/

pub mod bcp;
pub mod decision;
pub mod entailment;
pub mod solve;
