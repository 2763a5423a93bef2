/*!
The context --- to which clauses are added and within which solves take place, etc.

A context is the bundled [oracle](crate::oracle).
It pairs a [clause database](crate::db::clause) with an [atom database](crate::db::atom), and determines satisfiability with a DPLL search.
See [procedures](crate::procedures) for the details of a solve.

# Example
```rust
# use clue_lib::context::Context;
# use clue_lib::reports::Report;
# use clue_lib::structures::valuation::Valuation;
let mut the_context = Context::default();

assert!(the_context.add_clause(&[1, 2]).is_ok());
assert!(the_context.add_clause(&[-1]).is_ok());

assert_eq!(the_context.solve(), Report::Satisfiable);
assert_eq!(the_context.model().value_of(2), Some(Some(true)));

assert_eq!(the_context.solve_given(&[-2]), Report::Unsatisfiable);
```
*/

mod counters;
pub use counters::Counters;

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::Config,
    db::{
        atom::AtomDB,
        clause::{ClauseDB, ClauseOk},
    },
    oracle::{Entailment, Oracle},
    structures::{literal::CLiteral, valuation::CValuation},
    types::err::{self},
};

/// The state of a context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Some clause was added since the last solve without assumptions.
    Input,

    /// The clause database is satisfiable, and a model is stored.
    Satisfiable,

    /// The clause database is unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context, using [StdRng] as a source of randomness.
#[derive(Clone)]
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    pub atom_db: AtomDB,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The status of the context.
    pub state: ContextState,

    /// Some model of the clause database, kept from the last satisfiable solve without assumptions.
    pub(crate) model: CValuation,

    /// The source of rng.
    pub(crate) rng: StdRng,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            counters: Counters::default(),
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            state: ContextState::Input,
            model: CValuation::default(),
        }
    }

    /// Adds a clause to the clause database.
    pub fn add_clause(&mut self, clause: &[CLiteral]) -> Result<ClauseOk, err::ClauseError> {
        let ok = self.clause_db.store(clause)?;
        if ok != ClauseOk::Tautology {
            self.atom_db.ensure_atom(self.clause_db.max_atom());
            if self.state == ContextState::Satisfiable {
                self.state = ContextState::Input;
            }
        }
        Ok(ok)
    }

    /// The model kept from the last satisfiable solve without assumptions.
    ///
    /// Empty, unless the state of the context is [Satisfiable](ContextState::Satisfiable).
    pub fn model(&self) -> &CValuation {
        &self.model
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Oracle for Context {
    fn add_clause(&mut self, clause: &[CLiteral]) -> Result<(), err::ErrorKind> {
        Context::add_clause(self, clause)?;
        Ok(())
    }

    fn test_literal(&mut self, literal: CLiteral) -> Result<Entailment, err::ErrorKind> {
        self.entailment(literal)
    }
}
