//! Combat system
//!
//! Resolves encounters between the player's ship and an engaged enemy.
//! Every command is a single exchange: the ship acts, then a surviving
//! enemy answers once.

mod enemy_attack;
mod evade;
mod fight;

pub use enemy_attack::enemy_fires;
pub use evade::{evade, EvadeOutcome};
pub use fight::{fight, ExchangeOutcome};
