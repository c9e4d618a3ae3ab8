//! Star Explorer Game Engine
//!
//! A turn-based text space exploration game.
//!
//! # Overview
//!
//! The player flies a single ship across a grid of zones. Each zone belongs
//! to a federation that sets its risk of contact and may hold an enemy
//! vessel or a one-shot item. Entering a zone triggers its content once;
//! enemies must be fought or evaded. The game ends when the ship is
//! destroyed or the player quits.
//!
//! # Modules
//!
//! - [`game_engine`] - Game state machine and command dispatch
//! - [`models`] - Domain models (Galaxy, Zone, Combatant, Item, etc.)
//! - [`services`] - Combat, navigation and the console turn loop
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - User interface and presentation logic
//! - [`config`] - Session configuration
//!
//! # Example
//!
//! ```rust,no_run
//! use star_explorer::{GameConfig, GameEngine};
//!
//! let engine = GameEngine::new(&GameConfig::new(42)).unwrap();
//! // Game logic here
//! ```

pub mod cli;
pub mod config;
pub mod game_engine;
pub mod io;
pub mod logging;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use config::GameConfig;
pub use game_engine::{GameEngine, GameState};
pub use models::errors::{GameError, GameResult};
