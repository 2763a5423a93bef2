//! Error types used in the library.
//!
//! - Identifier, precondition, and transcript errors are external --- e.g. a name which is not part of the game, or an event which could not have happened.
//!   In each case the event is rejected whole, and the knowledge base is exactly as it was before the call.
//! - Clause errors are internal, and indicate a defect in an encoding rather than in the game data.
//! - An oracle error of [Inconsistent](OracleError::Inconsistent) is terminal for a game: the knowledge base has no model, and so every query would be vacuous.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::config::Category;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Clause(ClauseError),
    Config(ConfigError),
    Identifier(IdentifierError),
    Oracle(OracleError),
    Precondition(PreconditionError),
    Transcript(TranscriptError),
}

/// Errors in the construction of a clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseError {
    /// Some attempt was made to add an empty clause.
    Empty,

    /// Some attempt was made to add a clause containing the zero literal.
    ZeroLiteral,
}

impl From<ClauseError> for ErrorKind {
    fn from(e: ClauseError) -> Self {
        ErrorKind::Clause(e)
    }
}

/// Errors in the configuration of a game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A game requires at least one player.
    NoPlayers,

    /// Some category of cards has no cards.
    EmptyCategory(Category),

    /// A location name was used twice (the case file is a location).
    DuplicateLocation(String),

    /// A card name was used twice, perhaps across categories.
    DuplicateCard(String),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Names which are not part of the game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IdentifierError {
    /// The name is neither a player nor the case file.
    UnknownLocation(String),

    /// The name is not a card.
    UnknownCard(String),
}

impl From<IdentifierError> for ErrorKind {
    fn from(e: IdentifierError) -> Self {
        ErrorKind::Identifier(e)
    }
}

/// Errors from the oracle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OracleError {
    /// The knowledge base is unsatisfiable.
    /// Either some player broke the rules, or some event was recorded incorrectly.
    Inconsistent,
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

/// Events which are structurally inconsistent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PreconditionError {
    /// A card was shown, though nobody refuted the suggestion.
    ShownWithoutRefuter,

    /// The card shown was not one of the suggested cards.
    ShownNotSuggested,

    /// A suggestion was refuted by the player who made it.
    RefuterIsSuggester,

    /// The case file was named as a player who acts (deals, suggests, refutes, or accuses).
    CaseFileActor,

    /// A hand was dealt without any cards.
    EmptyHand,
}

impl From<PreconditionError> for ErrorKind {
    fn from(e: PreconditionError) -> Self {
        ErrorKind::Precondition(e)
    }
}

/// Errors during parsing of a transcript.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TranscriptError {
    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The directive at a specific line is not known.
    UnknownDirective(usize),

    /// The directive at a specific line has the wrong number of arguments.
    ArgumentCount(usize),

    /// A roster directive at a specific line follows some event.
    MisplacedRoster(usize),

    /// No file was found.
    NoFile,
}

impl From<TranscriptError> for ErrorKind {
    fn from(e: TranscriptError) -> Self {
        ErrorKind::Transcript(e)
    }
}
