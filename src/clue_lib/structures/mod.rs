//! The abstract elements of a knowledge base, and their representation.
//!
//! - [Atoms](atom) are propositions, such as "the case file holds the rope".
//! - [Literals](literal) are atoms paired with a polarity.
//! - [Clauses](clause) are disjunctions of literals.
//! - [Valuations](valuation) are (partial) functions from atoms to truth values.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
