use crate::config::{self};

pub const POLARITY_LEAN: config::PolarityLean = 0.0;
pub const RANDOM_DECISION_BIAS: config::RandomDecisionBias = 0.0;
pub const RNG_SEED: u64 = 0;

pub const CASE_FILE: &str = "cf";
pub const PLAYERS: [&str; 6] = ["sc", "mu", "wh", "gr", "pe", "pl"];
pub const SUSPECTS: [&str; 6] = ["mu", "pl", "gr", "pe", "sc", "wh"];
pub const WEAPONS: [&str; 6] = ["kn", "ca", "re", "ro", "pi", "wr"];
pub const ROOMS: [&str; 9] = ["ha", "lo", "di", "ki", "ba", "co", "bi", "li", "st"];
