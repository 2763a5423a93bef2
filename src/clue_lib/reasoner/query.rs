/*!
Queries of what is known.

A [belief](Reasoner::belief) is the classification of an entailment test on a single atom, and a [snapshot](Reasoner::snapshot) is a belief for every atom.
Queries never revise the knowledge base.

A snapshot issues a test for each (location, card) pair, and so is the dominant cost of a game.
*/

use crate::{
    db::registry::{Card, Location},
    misc::log::targets::{self},
    oracle::Oracle,
    reasoner::Reasoner,
    reports::{Belief, Snapshot},
    types::err::{self},
};

impl<O: Oracle> Reasoner<O> {
    /// What is known of whether the named card is at the named location.
    pub fn belief(&mut self, location: &str, card: &str) -> Result<Belief, err::ErrorKind> {
        let location = self.registry.location(location)?;
        let card = self.registry.card(card)?;
        self.belief_of(location, card)
    }

    /// What is known of whether the card is at the location.
    pub fn belief_of(&mut self, location: Location, card: Card) -> Result<Belief, err::ErrorKind> {
        let literal = self.registry.literal(location, card, true);
        let entailment = self.oracle.test_literal(literal)?;
        Ok(Belief::from(entailment))
    }

    /// What is known of every (location, card) pair.
    pub fn snapshot(&mut self) -> Result<Snapshot, err::ErrorKind> {
        let Reasoner {
            registry,
            oracle,
            event_count,
            ..
        } = self;

        let snapshot = Snapshot::build(registry, |location, card| {
            let entailment = oracle.test_literal(registry.literal(location, card, true))?;
            Ok::<Belief, err::ErrorKind>(Belief::from(entailment))
        })?;

        log::debug!(target: targets::QUERY, "Snapshot after {event_count} events");
        Ok(snapshot)
    }
}
