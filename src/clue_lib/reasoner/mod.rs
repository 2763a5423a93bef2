/*!
A reasoner about a game of Clue.

A reasoner owns a [registry](crate::db::registry) of the names in a game and an [oracle], which holds the knowledge base.
On construction the [axioms] of the game are added to the knowledge base, and after construction each observed [event](events) adds further clauses.
At any point a [query](query) may be made of what is known.

Writes and queries are methods taking `&mut self`, so a host sharing a reasoner must wrap it in some lock, and each event is applied whole before any query sees it.

# Example

```rust
# use clue_lib::config::Config;
# use clue_lib::reasoner::{Accusation, Reasoner, Suggestion};
# use clue_lib::reports::Belief;
let mut reasoner = Reasoner::from_config(&Config::default()).unwrap();

// Nobody could refute green's suggestion of the lead pipe.
reasoner.suggest(&Suggestion::new("gr", ["pe", "pi", "bi"])).unwrap();
assert_eq!(reasoner.belief("sc", "pi"), Ok(Belief::False));
assert_eq!(reasoner.belief("cf", "pi"), Ok(Belief::Unknown));

reasoner.accuse(&Accusation::new("gr", ["pe", "pi", "bi"], true)).unwrap();
let notepad = reasoner.snapshot().unwrap();
assert_eq!(notepad.solution(), vec!["pe", "pi", "bi"]);
```
*/

pub mod axioms;
pub mod events;
pub mod query;

pub use events::{Accusation, Event, Suggestion};

use crate::{
    config::{Config, Roster},
    context::Context,
    db::registry::{Location, Registry},
    misc::log::targets::{self},
    oracle::Oracle,
    types::err::{self},
};

/// A reasoner about a game, generic over the oracle used.
pub struct Reasoner<O: Oracle = Context> {
    /// The names of the game.
    registry: Registry,

    /// The oracle, which holds the knowledge base.
    oracle: O,

    /// The player whose hand was dealt, if any.
    perspective: Option<Location>,

    /// A count of the events applied.
    event_count: usize,
}

impl Reasoner<Context> {
    /// A reasoner for the roster of the config, using a [Context] built from the config as the oracle.
    pub fn from_config(config: &Config) -> Result<Self, err::ErrorKind> {
        Self::with_oracle(&config.roster, Context::from_config(config.clone()))
    }
}

impl<O: Oracle> Reasoner<O> {
    /// A reasoner for the roster, using the given oracle.
    ///
    /// The axioms of the game are added to the oracle.
    pub fn with_oracle(roster: &Roster, mut oracle: O) -> Result<Self, err::ErrorKind> {
        let registry = Registry::from_roster(roster)?;

        let axioms = axioms::clauses(&registry);
        log::info!(target: targets::AXIOMS, "Adding {} axioms", axioms.len());
        oracle.add_clauses(&axioms)?;

        Ok(Reasoner {
            registry,
            oracle,
            perspective: None,
            event_count: 0,
        })
    }

    /// The registry of the game.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// The player whose hand was most recently dealt, if any.
    pub fn perspective(&self) -> Option<Location> {
        self.perspective
    }

    /// A count of the events applied to the knowledge base.
    pub fn event_count(&self) -> usize {
        self.event_count
    }
}
