//! Game services
//!
//! Business logic for game operations: combat, navigation, and the
//! turn loop that drives them from player input.

pub mod combat;
pub mod game;
pub mod navigation;
