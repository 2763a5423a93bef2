/*!
Configuration of a game, and of the oracle used to reason about the game.

The roster of a game fixes the players (in turn order), the name of the case file, and the cards of each category.
The remaining options are passed to the [context](crate::context) when it is used as the oracle.

```rust
# use clue_lib::config::{Category, Config};
let config = Config::default();

assert_eq!(config.roster.players.len(), 6);
assert_eq!(config.roster.cards_of(Category::Room).len(), 9);
assert!(config.roster.validate().is_ok());
```
*/

pub mod defaults;

use std::collections::HashSet;

use serde::Serialize;

use crate::types::err::{self};

pub type PolarityLean = f64;
pub type RandomDecisionBias = f64;

/// The three (disjoint) categories of cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Suspect,
    Weapon,
    Room,
}

impl Category {
    /// Each category, in the order cards are numbered.
    pub const ALL: [Category; 3] = [Category::Suspect, Category::Weapon, Category::Room];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Suspect => write!(f, "Suspect"),
            Self::Weapon => write!(f, "Weapon"),
            Self::Room => write!(f, "Room"),
        }
    }
}

/// The names of everything in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Roster {
    /// The players, in turn order.
    pub players: Vec<String>,

    /// The name of the case file.
    pub case_file: String,

    pub suspects: Vec<String>,
    pub weapons: Vec<String>,
    pub rooms: Vec<String>,
}

impl Roster {
    /// The cards of some category.
    pub fn cards_of(&self, category: Category) -> &[String] {
        match category {
            Category::Suspect => &self.suspects,
            Category::Weapon => &self.weapons,
            Category::Room => &self.rooms,
        }
    }

    /// Checks the roster describes some game.
    pub fn validate(&self) -> Result<(), err::ConfigError> {
        if self.players.is_empty() {
            return Err(err::ConfigError::NoPlayers);
        }

        let mut locations = HashSet::new();
        for location in self.players.iter().chain(std::iter::once(&self.case_file)) {
            if !locations.insert(location) {
                return Err(err::ConfigError::DuplicateLocation(location.clone()));
            }
        }

        let mut cards = HashSet::new();
        for category in Category::ALL {
            if self.cards_of(category).is_empty() {
                return Err(err::ConfigError::EmptyCategory(category));
            }
            for card in self.cards_of(category) {
                if !cards.insert(card) {
                    return Err(err::ConfigError::DuplicateCard(card.clone()));
                }
            }
        }

        Ok(())
    }
}

impl Default for Roster {
    /// The classic game, for six players.
    fn default() -> Self {
        use defaults::*;
        Roster {
            players: owned(&PLAYERS),
            case_file: CASE_FILE.to_string(),
            suspects: owned(&SUSPECTS),
            weapons: owned(&WEAPONS),
            rooms: owned(&ROOMS),
        }
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// The primary configuration structure.
#[derive(Clone, Debug, Serialize)]
pub struct Config {
    /// The names of everything in the game.
    pub roster: Roster,

    /// The probability of assigning positive polarity to an atom when freely choosing an atom.
    pub polarity_lean: PolarityLean,

    /// The probability of choosing an atom at random, rather than the first atom without a value.
    pub random_decision_bias: RandomDecisionBias,

    /// The seed for any source of randomness.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            roster: Roster::default(),
            polarity_lean: POLARITY_LEAN,
            random_decision_bias: RANDOM_DECISION_BIAS,
            seed: RNG_SEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_location() {
        let mut roster = Roster::default();
        roster.case_file = "sc".to_string();
        assert_eq!(
            roster.validate(),
            Err(err::ConfigError::DuplicateLocation("sc".to_string()))
        );
    }

    #[test]
    fn duplicate_card_across_categories() {
        let mut roster = Roster::default();
        roster.rooms.push("ro".to_string());
        assert_eq!(
            roster.validate(),
            Err(err::ConfigError::DuplicateCard("ro".to_string()))
        );
    }

    #[test]
    fn empty_category() {
        let mut roster = Roster::default();
        roster.weapons.clear();
        assert_eq!(
            roster.validate(),
            Err(err::ConfigError::EmptyCategory(Category::Weapon))
        );
    }

    #[test]
    fn no_players() {
        let mut roster = Roster::default();
        roster.players.clear();
        assert_eq!(roster.validate(), Err(err::ConfigError::NoPlayers));
    }
}
