//! Domain models
//!
//! This module contains all domain models representing game entities
//! and concepts. Models are pure data structures with minimal logic.

pub mod constants;
pub mod position;
pub mod stats;
pub mod combatant;
pub mod item;
pub mod zone;
pub mod galaxy;
pub mod command;
pub mod errors;
