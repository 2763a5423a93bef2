use serde::Serialize;

use crate::{
    db::registry::{Card, Location, Registry},
    reports::Belief,
};

/// A belief for every (location, card) pair, with a row for each card and a column for each location.
///
/// Columns are the players, in turn order, and then the case file.
/// Rows are the suspects, then the weapons, then the rooms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// The name of each location, by column.
    pub locations: Vec<String>,

    /// The name of each card, by row.
    pub cards: Vec<String>,

    /// Beliefs, row major.
    beliefs: Vec<Belief>,
}

impl Snapshot {
    /// A snapshot with the names of the registry, and every belief given by `belief`.
    pub(crate) fn build<E>(
        registry: &Registry,
        mut belief: impl FnMut(Location, Card) -> Result<Belief, E>,
    ) -> Result<Self, E> {
        let mut beliefs = Vec::with_capacity(registry.atom_count());
        for card in registry.cards() {
            for location in registry.locations() {
                beliefs.push(belief(location, card)?);
            }
        }

        Ok(Snapshot {
            locations: registry
                .locations()
                .map(|location| registry.location_name(location).to_string())
                .collect(),
            cards: registry
                .cards()
                .map(|card| registry.card_name(card).to_string())
                .collect(),
            beliefs,
        })
    }

    /// The belief at the given row (card) and column (location), if the card and location are part of the snapshot.
    pub fn get(&self, card: Card, location: Location) -> Option<Belief> {
        if card.index() >= self.cards.len() || location.index() >= self.locations.len() {
            return None;
        }
        self.beliefs
            .get(card.index() * self.locations.len() + location.index())
            .copied()
    }

    /// The beliefs of the card with the given name, by column, if the card is part of the snapshot.
    pub fn row(&self, card: &str) -> Option<&[Belief]> {
        let index = self.cards.iter().position(|name| name == card)?;
        let width = self.locations.len();
        Some(&self.beliefs[index * width..(index + 1) * width])
    }

    /// The beliefs of the location with the given name, by row, if the location is part of the snapshot.
    pub fn column(&self, location: &str) -> Option<Vec<Belief>> {
        let index = self.locations.iter().position(|name| name == location)?;
        Some(
            self.beliefs
                .iter()
                .skip(index)
                .step_by(self.locations.len())
                .copied()
                .collect(),
        )
    }

    /// The names of the cards known to be in the case file (the final column).
    pub fn solution(&self) -> Vec<&str> {
        let width = self.locations.len();
        self.cards
            .iter()
            .enumerate()
            .filter(|(index, _)| self.beliefs[index * width + width - 1] == Belief::True)
            .map(|(_, name)| name.as_str())
            .collect()
    }

    /// An iterator over the rows of the snapshot, as (card name, beliefs by column) pairs.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Belief])> {
        self.cards
            .iter()
            .map(|name| name.as_str())
            .zip(self.beliefs.chunks(self.locations.len()))
    }
}

impl std::fmt::Display for Snapshot {
    /// The notepad, as tab separated columns.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for location in &self.locations {
            write!(f, "\t{location}")?;
        }
        for (card, beliefs) in self.rows() {
            writeln!(f)?;
            write!(f, "{card}")?;
            for belief in beliefs {
                write!(f, "\t{belief}")?;
            }
        }
        Ok(())
    }
}
