/*!
Events of a game, and their encoding as clauses.

Three kinds of event are observed:
- A [hand](Reasoner::hand) is dealt to some player.
  This is private knowledge, seen only by the player dealt the hand.
- A [suggestion](Suggestion) is made, and perhaps refuted by some player, perhaps by showing some card.
- An [accusation](Accusation) is made, and is either correct or not.

For each event every name is resolved, and every clause is built, before any clause is added to the knowledge base.
And so, a rejected event leaves the knowledge base as it was.

# Suggestions

Players are asked to refute a suggestion in turn order, starting with the player after the suggester.
So, given a refuter, each player asked before the refuter holds none of the suggested cards.
And, given no refuter, no player other than the suggester holds any suggested card --- though the case file, and the suggester, may.

```rust
# use clue_lib::config::Config;
# use clue_lib::reasoner::{Reasoner, Suggestion};
# use clue_lib::reports::Belief;
let mut reasoner = Reasoner::from_config(&Config::default()).unwrap();

// Players are sc, mu, wh, gr, pe, pl, in turn order.
// So, pe and pl were asked before sc refuted.
let suggestion = Suggestion::new("gr", ["mu", "kn", "ha"]).refuted_by("sc");
reasoner.suggest(&suggestion).unwrap();

assert_eq!(reasoner.belief("pe", "kn"), Ok(Belief::False));
assert_eq!(reasoner.belief("pl", "ha"), Ok(Belief::False));
assert_eq!(reasoner.belief("mu", "kn"), Ok(Belief::Unknown));
```
*/

use serde::Serialize;

use crate::{
    db::registry::{Card, Location, Registry},
    misc::log::targets::{self},
    oracle::Oracle,
    reasoner::Reasoner,
    structures::clause::CClause,
    types::err::{self},
};

/// A suggestion of one suspect, one weapon, and one room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The player who made the suggestion.
    pub suggester: String,

    /// The suggested cards.
    pub cards: [String; 3],

    /// The player who refuted the suggestion, if any player could.
    pub refuter: Option<String>,

    /// The card shown by the refuter, if seen.
    pub shown: Option<String>,
}

impl Suggestion {
    /// A suggestion which nobody could refute.
    pub fn new(suggester: &str, cards: [&str; 3]) -> Self {
        Suggestion {
            suggester: suggester.to_string(),
            cards: cards.map(|card| card.to_string()),
            refuter: None,
            shown: None,
        }
    }

    /// The suggestion, refuted by the given player.
    pub fn refuted_by(mut self, refuter: &str) -> Self {
        self.refuter = Some(refuter.to_string());
        self
    }

    /// The suggestion, refuted by showing the given card.
    pub fn showing(mut self, card: &str) -> Self {
        self.shown = Some(card.to_string());
        self
    }
}

/// An accusation of one suspect, one weapon, and one room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Accusation {
    /// The player who made the accusation.
    pub accuser: String,

    /// The accused cards.
    pub cards: [String; 3],

    /// Whether the accused cards are the cards of the case file.
    pub correct: bool,
}

impl Accusation {
    /// An accusation of the given cards, with the outcome.
    pub fn new(accuser: &str, cards: [&str; 3], correct: bool) -> Self {
        Accusation {
            accuser: accuser.to_string(),
            cards: cards.map(|card| card.to_string()),
            correct,
        }
    }
}

/// Any observed event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Event {
    /// The cards of a hand, dealt to the owner.
    Hand { owner: String, cards: Vec<String> },

    Suggestion(Suggestion),

    Accusation(Accusation),
}

/// Clauses for a hand: each card is held by the owner, and so is not in the case file.
pub fn hand_clauses(registry: &Registry, owner: Location, cards: &[Card]) -> Vec<CClause> {
    let case_file = registry.case_file();
    let mut clauses = Vec::with_capacity(cards.len() * 2);
    for card in cards {
        clauses.push(vec![registry.literal(case_file, *card, false)]);
        clauses.push(vec![registry.literal(owner, *card, true)]);
    }
    clauses
}

/// Clauses for a suggestion.
///
/// A refutation is some refuter together with the card shown, if the card was seen.
pub fn suggestion_clauses(
    registry: &Registry,
    suggester: Location,
    cards: [Card; 3],
    refutation: Option<(Location, Option<Card>)>,
) -> Vec<CClause> {
    let mut clauses = Vec::default();
    let exclude = |location: Location, clauses: &mut Vec<CClause>| {
        for card in cards {
            clauses.push(vec![registry.literal(location, card, false)]);
        }
    };

    match refutation {
        None => {
            for player in registry.players().filter(|player| *player != suggester) {
                exclude(player, &mut clauses);
            }
        }

        Some((refuter, shown)) => {
            let mut player = registry.next_player(suggester);
            while player != refuter && player != suggester {
                exclude(player, &mut clauses);
                player = registry.next_player(player);
            }

            match shown {
                Some(card) => {
                    clauses.push(vec![registry.literal(refuter, card, true)]);
                    clauses.push(vec![registry.literal(registry.case_file(), card, false)]);
                }
                None => {
                    clauses.push(
                        cards
                            .iter()
                            .map(|card| registry.literal(refuter, *card, true))
                            .collect(),
                    );
                }
            }
        }
    }

    clauses
}

/// Clauses for an accusation.
///
/// A correct accusation places each card in the case file.
/// An incorrect accusation only shows the three cards are not *all* in the case file, and so is a single clause.
pub fn accusation_clauses(registry: &Registry, cards: [Card; 3], correct: bool) -> Vec<CClause> {
    let case_file = registry.case_file();
    match correct {
        true => cards
            .iter()
            .map(|card| vec![registry.literal(case_file, *card, true)])
            .collect(),
        false => vec![cards
            .iter()
            .map(|card| registry.literal(case_file, *card, false))
            .collect()],
    }
}

impl<O: Oracle> Reasoner<O> {
    /// Notes the cards of a hand dealt to the owner, and takes the perspective of the owner.
    pub fn hand(&mut self, owner: &str, cards: &[impl AsRef<str>]) -> Result<(), err::ErrorKind> {
        let owner = self.player(owner)?;
        if cards.is_empty() {
            return Err(err::PreconditionError::EmptyHand.into());
        }
        let cards = cards
            .iter()
            .map(|card| self.registry.card(card.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let clauses = hand_clauses(&self.registry, owner, &cards);
        self.commit(clauses)?;

        log::info!(target: targets::EVENTS,
            "Hand of {} cards for {}",
            cards.len(),
            self.registry.location_name(owner)
        );
        self.perspective = Some(owner);
        Ok(())
    }

    /// Notes a suggestion, and how it was refuted.
    pub fn suggest(&mut self, suggestion: &Suggestion) -> Result<(), err::ErrorKind> {
        let suggester = self.player(&suggestion.suggester)?;
        let cards = self.three_cards(&suggestion.cards)?;

        let refutation = match (&suggestion.refuter, &suggestion.shown) {
            (None, Some(_)) => return Err(err::PreconditionError::ShownWithoutRefuter.into()),
            (None, None) => None,
            (Some(refuter), shown) => {
                let refuter = self.player(refuter)?;
                if refuter == suggester {
                    return Err(err::PreconditionError::RefuterIsSuggester.into());
                }
                let shown = match shown {
                    Some(card) => {
                        let card = self.registry.card(card)?;
                        if !cards.contains(&card) {
                            return Err(err::PreconditionError::ShownNotSuggested.into());
                        }
                        Some(card)
                    }
                    None => None,
                };
                Some((refuter, shown))
            }
        };

        let clauses = suggestion_clauses(&self.registry, suggester, cards, refutation);
        self.commit(clauses)?;

        log::info!(target: targets::EVENTS,
            "Suggestion by {} of {:?}, refuted by {:?}",
            suggestion.suggester,
            suggestion.cards,
            suggestion.refuter
        );
        Ok(())
    }

    /// Notes an accusation, and whether it was correct.
    pub fn accuse(&mut self, accusation: &Accusation) -> Result<(), err::ErrorKind> {
        self.player(&accusation.accuser)?;
        let cards = self.three_cards(&accusation.cards)?;

        let clauses = accusation_clauses(&self.registry, cards, accusation.correct);
        self.commit(clauses)?;

        log::info!(target: targets::EVENTS,
            "Accusation by {} of {:?}, correct: {}",
            accusation.accuser,
            accusation.cards,
            accusation.correct
        );
        Ok(())
    }

    /// Notes any event.
    pub fn apply(&mut self, event: &Event) -> Result<(), err::ErrorKind> {
        match event {
            Event::Hand { owner, cards } => self.hand(owner, cards),
            Event::Suggestion(suggestion) => self.suggest(suggestion),
            Event::Accusation(accusation) => self.accuse(accusation),
        }
    }

    /// The location of a player, who must not be the case file.
    fn player(&self, name: &str) -> Result<Location, err::ErrorKind> {
        let location = self.registry.location(name)?;
        match self.registry.is_case_file(location) {
            true => Err(err::PreconditionError::CaseFileActor.into()),
            false => Ok(location),
        }
    }

    fn three_cards(&self, names: &[String; 3]) -> Result<[Card; 3], err::ErrorKind> {
        Ok([
            self.registry.card(&names[0])?,
            self.registry.card(&names[1])?,
            self.registry.card(&names[2])?,
        ])
    }

    /// Adds every clause of an event to the knowledge base.
    fn commit(&mut self, clauses: Vec<CClause>) -> Result<(), err::ErrorKind> {
        log::debug!(target: targets::EVENTS, "Event {}: {} clauses", self.event_count, clauses.len());
        self.oracle.add_clauses(&clauses)?;
        self.event_count += 1;
        Ok(())
    }
}
