use thiserror::Error;

use super::combatant::CombatantKind;

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// Coordinates outside the galaxy grid
    #[error("zone {x}:{y} is outside the galaxy")]
    OutOfBounds { x: i32, y: i32 },
    /// Unrecognized player input
    #[error("unrecognized command '{0}' (type HELP for a list)")]
    InvalidCommand(String),
    /// Attempted to act with or against a destroyed combatant
    #[error("{} is already destroyed", .0.name())]
    EntityDestroyed(CombatantKind),
    /// Command issued after the game has ended
    #[error("the game is over")]
    GameOver,
    #[error("torpedo bays are empty")]
    NoTorpedoes,
    /// Combat command issued with no enemy engaged
    #[error("no enemy in range")]
    NoEnemy,
    /// Movement attempted while an enemy is engaged
    #[error("an enemy is engaged; FIGHT or EVADE first")]
    Engaged,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether the turn loop can report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::Io(_))
    }
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            GameError::OutOfBounds { x: 10, y: -1 }.to_string(),
            "zone 10:-1 is outside the galaxy"
        );
        assert_eq!(
            GameError::EntityDestroyed(CombatantKind::Enemy).to_string(),
            "ENEMY VESSEL is already destroyed"
        );
    }

    #[test]
    fn only_io_errors_end_the_loop() {
        assert!(GameError::InvalidCommand("jump".into()).is_recoverable());
        assert!(GameError::NoEnemy.is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!GameError::from(io).is_recoverable());
    }
}
