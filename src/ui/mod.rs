//! User interface and presentation
//!
//! Presenters format game events for the player, keeping text out of the
//! combat and navigation rules.

pub mod presenters;
