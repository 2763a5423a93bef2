//! A library for deducing where the cards of a game of Clue are, using a satisfiability oracle.
//!
//! Each fact of interest --- "player *p* holds card *c*", "the case file holds card *c*" --- is an [atom](structures::atom).
//! The rules of the game are written once as [axioms](reasoner::axioms), and each observed game event (a dealt hand, a suggestion and its refutation, an accusation) is written as further clauses.
//! What is known about any atom is then a question for the [oracle]: is the atom entailed, is its negation entailed, or neither?
//!
//! # Orientation
//!
//! The library is designed around a [reasoner](reasoner::Reasoner), which owns:
//! - A [registry](db::registry::Registry) mapping the names of players and cards to dense indices, and indices to atoms.
//! - An [oracle](oracle::Oracle), which holds the knowledge base: an append-only conjunction of clauses.
//!
//! The bundled oracle is a [context](context::Context), a small DPLL solver in which clauses are stored in a [clause database](db::clause) and valuations in an [atom database](db::atom).
//! Any other implementation of [Oracle](oracle::Oracle) may be used in its place.
//!
//! A [transcript] of a game, one event per line, may be replayed into a reasoner.
//!
//! # Example
//!
//! ```rust
//! # use clue_lib::config::Config;
//! # use clue_lib::reasoner::{Reasoner, Suggestion};
//! # use clue_lib::reports::Belief;
//! let mut reasoner = Reasoner::from_config(&Config::default()).unwrap();
//!
//! reasoner.hand("sc", &["wh", "li", "st"]).unwrap();
//! assert_eq!(reasoner.belief("cf", "wh"), Ok(Belief::False));
//!
//! let suggestion = Suggestion::new("sc", ["sc", "ro", "lo"]).refuted_by("mu").showing("sc");
//! reasoner.suggest(&suggestion).unwrap();
//! assert_eq!(reasoner.belief("mu", "sc"), Ok(Belief::True));
//! assert_eq!(reasoner.belief("wh", "sc"), Ok(Belief::False));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, filtered by the targets listed in [misc::log].
//! No logger is installed by the library.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod oracle;
pub mod procedures;
pub mod reasoner;
pub mod reports;
pub mod structures;
pub mod transcript;
pub mod types;
