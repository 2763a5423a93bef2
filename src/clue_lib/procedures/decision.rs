/*!
Methods for choosing the value of an atom.

The core decision procedure is straightforward:
- Search through all atoms in the context for an atom which is not assigned a value, and assign either true or false.

By default the first atom without a value is chosen, and valued false.
This suits the clauses of a game well, as at most one location holds each card.

# Randomness

With probability [random_decision_bias](crate::config::Config::random_decision_bias) some atom without a value is chosen at random, and the polarity of a decision is true with probability [polarity_lean](crate::config::Config::polarity_lean).
*/

use rand::{seq::IteratorRandom, Rng};

use crate::{
    context::Context,
    structures::{
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// Possible results from choosing a truth value to assign an atom.
pub enum DecisionOk {
    /// Some truth value was chosen for some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

impl Context {
    /// Chooses some atom without a value, and some value for the atom.
    pub fn make_decision(&mut self) -> DecisionOk {
        let random_choice = self.config.random_decision_bias > 0.0
            && self.rng.gen_bool(self.config.random_decision_bias);

        let chosen_atom = match random_choice {
            true => self
                .atom_db
                .valuation()
                .unvalued_atoms()
                .choose(&mut self.rng),
            false => self.atom_db.valuation().unvalued_atoms().next(),
        };

        match chosen_atom {
            Some(atom) => {
                self.counters.total_decisions += 1;
                let polarity =
                    self.config.polarity_lean > 0.0 && self.rng.gen_bool(self.config.polarity_lean);
                let decision = CLiteral::new(atom, polarity);
                log::trace!("Decision {decision}");
                DecisionOk::Literal(decision)
            }
            None => DecisionOk::Exhausted,
        }
    }
}
