//! Navigation system
//!
//! Moves the ship between zones and reports what it finds there.

mod movement;

pub use movement::travel;
