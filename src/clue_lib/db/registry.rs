/*!
A registry of the names of a game.

The registry is a pair of fixed lookup tables, one for locations and one for cards, built once from a [roster](crate::config::Roster):
- Locations are the players, in turn order, followed by the case file.
  So, the case file has index `players`, one past the last player.
- Cards are the suspects, then the weapons, then the rooms, each in roster order.

Names are resolved to [Location]s and [Card]s, and only these (validated) indices are used to mint atoms.
In particular, an unknown name is an error, which a caller sees before any clause mentioning the name is built.

```rust
# use clue_lib::config::Roster;
# use clue_lib::db::registry::Registry;
let registry = Registry::from_roster(&Roster::default()).unwrap();

let cf = registry.location("cf").unwrap();
let rope = registry.card("ro").unwrap();

assert_eq!(cf, registry.case_file());
assert_eq!(registry.atom(cf, rope), 6 * 21 + 9 + 1);
assert!(registry.card("candlestick").is_err());
```
*/

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    config::{Category, Roster},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The index of a location, either some player or the case file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Location(usize);

impl Location {
    /// The index of the location in the registry.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The index of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Card(usize);

impl Card {
    /// The index of the card in the registry.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A bidirectional map between names and indices.
#[derive(Clone, Debug)]
pub struct Registry {
    /// Location names, indexed by location.
    location_names: Vec<String>,

    /// Locations, indexed by name.
    locations: HashMap<String, Location>,

    /// Card names, indexed by card.
    card_names: Vec<String>,

    /// Cards, indexed by name.
    cards: HashMap<String, Card>,

    /// The category of each card, indexed by card.
    categories: Vec<Category>,

    /// The cards of each category, in the order of [Category::ALL].
    category_cards: [Vec<Card>; 3],

    /// The number of (real) players.
    player_count: usize,
}

impl Registry {
    /// A registry for the given roster, if the roster is valid.
    pub fn from_roster(roster: &Roster) -> Result<Self, err::ErrorKind> {
        roster.validate()?;

        let location_names = roster
            .players
            .iter()
            .chain(std::iter::once(&roster.case_file))
            .cloned()
            .collect::<Vec<_>>();

        let locations = location_names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), Location(index)))
            .collect();

        let mut card_names = Vec::default();
        let mut categories = Vec::default();
        let mut category_cards: [Vec<Card>; 3] = Default::default();

        for (category_index, category) in Category::ALL.into_iter().enumerate() {
            for name in roster.cards_of(category) {
                category_cards[category_index].push(Card(card_names.len()));
                card_names.push(name.clone());
                categories.push(category);
            }
        }

        let cards = card_names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), Card(index)))
            .collect();

        let registry = Registry {
            location_names,
            locations,
            card_names,
            cards,
            categories,
            category_cards,
            player_count: roster.players.len(),
        };

        log::debug!(target: targets::REGISTRY,
            "Registry of {} locations and {} cards ({} atoms)",
            registry.location_count(),
            registry.card_count(),
            registry.atom_count()
        );

        Ok(registry)
    }

    /// The location with the given name.
    pub fn location(&self, name: &str) -> Result<Location, err::IdentifierError> {
        match self.locations.get(name) {
            Some(location) => Ok(*location),
            None => {
                log::info!(target: targets::REGISTRY, "Unknown location: {name}");
                Err(err::IdentifierError::UnknownLocation(name.to_string()))
            }
        }
    }

    /// The card with the given name.
    pub fn card(&self, name: &str) -> Result<Card, err::IdentifierError> {
        match self.cards.get(name) {
            Some(card) => Ok(*card),
            None => {
                log::info!(target: targets::REGISTRY, "Unknown card: {name}");
                Err(err::IdentifierError::UnknownCard(name.to_string()))
            }
        }
    }

    /// The case file, aka. the solution location.
    pub fn case_file(&self) -> Location {
        Location(self.player_count)
    }

    /// Whether the location is the case file.
    pub fn is_case_file(&self, location: Location) -> bool {
        location.0 == self.player_count
    }

    /// The players, in turn order.
    pub fn players(&self) -> impl Iterator<Item = Location> {
        (0..self.player_count).map(Location)
    }

    /// All locations: the players, in turn order, and then the case file.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        (0..self.location_count()).map(Location)
    }

    /// All cards: the suspects, then the weapons, then the rooms.
    pub fn cards(&self) -> impl Iterator<Item = Card> {
        (0..self.card_count()).map(Card)
    }

    /// The cards of some category.
    pub fn cards_of(&self, category: Category) -> &[Card] {
        match category {
            Category::Suspect => &self.category_cards[0],
            Category::Weapon => &self.category_cards[1],
            Category::Room => &self.category_cards[2],
        }
    }

    /// The category of a card.
    pub fn category_of(&self, card: Card) -> Category {
        self.categories[card.0]
    }

    /// The player whose turn follows the turn of the given player, wrapping around the table.
    ///
    /// The case file takes no turns, and is followed by the first player.
    pub fn next_player(&self, location: Location) -> Location {
        Location((location.0 + 1) % self.player_count)
    }

    /// The number of (real) players.
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// The number of locations, i.e. the players and the case file.
    pub fn location_count(&self) -> usize {
        self.player_count + 1
    }

    /// The number of cards.
    pub fn card_count(&self) -> usize {
        self.card_names.len()
    }

    /// The number of atoms, i.e. the number of (location, card) pairs.
    pub fn atom_count(&self) -> usize {
        self.location_count() * self.card_count()
    }

    /// The atom of the proposition "the card is at the location".
    pub fn atom(&self, location: Location, card: Card) -> Atom {
        debug_assert!(location.0 < self.location_count() && card.0 < self.card_count());
        (location.0 * self.card_count() + card.0 + 1) as Atom
    }

    /// The literal of the proposition "the card is at the location", with the given polarity.
    pub fn literal(&self, location: Location, card: Card, polarity: bool) -> CLiteral {
        CLiteral::new(self.atom(location, card), polarity)
    }

    /// The name of a location.
    pub fn location_name(&self, location: Location) -> &str {
        &self.location_names[location.0]
    }

    /// The name of a card.
    pub fn card_name(&self, card: Card) -> &str {
        &self.card_names[card.0]
    }
}
