/*!
Reports of a solve, and of what is known about a game.

- A [Report] is the result of a solve.
- A [Belief] is what is known of a single (location, card) pair.
- A [Snapshot] is a belief for every (location, card) pair, aka. a detective's notepad.
*/

mod snapshot;
pub use snapshot::Snapshot;

use serde::Serialize;

use crate::oracle::Entailment;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// What is known of whether a card is at a location.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Belief {
    /// The card is known to be at the location.
    True,

    /// The card is known not to be at the location.
    False,

    /// Whether the card is at the location is not known.
    Unknown,
}

impl Belief {
    /// The glyph used for the belief on a notepad.
    pub fn glyph(&self) -> char {
        match self {
            Self::True => 'Y',
            Self::False => 'n',
            Self::Unknown => '-',
        }
    }
}

impl From<Entailment> for Belief {
    fn from(value: Entailment) -> Self {
        match value {
            Entailment::True => Self::True,
            Entailment::False => Self::False,
            Entailment::Undetermined => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Belief {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
