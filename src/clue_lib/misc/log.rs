/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for following a game, or for fixing issues with an encoding.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [registry](crate::db::registry)
    pub const REGISTRY: &str = "registry";

    /// Logs related to the [axioms](crate::reasoner::axioms) of a game
    pub const AXIOMS: &str = "axioms";

    /// Logs related to the encoding of [events](crate::reasoner::events)
    pub const EVENTS: &str = "events";

    /// Logs related to [queries](crate::reasoner::query)
    pub const QUERY: &str = "query";

    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [transcripts](crate::transcript)
    pub const TRANSCRIPT: &str = "transcript";
}
