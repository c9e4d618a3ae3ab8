//! Type-safe player commands

use std::fmt;
use std::str::FromStr;

use super::constants::{Direction, Weapon};
use super::errors::GameError;

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    /// Fight the engaged enemy, optionally with a specific weapon.
    Fight(Option<Weapon>),
    Evade,
    Status,
    Scan,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = GameError;

    /// Parse a command line. Case-insensitive; surrounding whitespace ignored.
    ///
    /// Accepted forms:
    /// - `north`, `south`, `east`, `west` (or `n`, `s`, `e`, `w`)
    /// - `fight`, `fight torpedo`, `fight laser`
    /// - `evade`, `status`, `scan`, `help`, `quit` (or `q`)
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let line = input.trim().to_ascii_lowercase();
        let mut words = line.split_whitespace();
        let invalid = || GameError::InvalidCommand(input.trim().to_string());

        let command = match words.next().ok_or_else(invalid)? {
            "north" | "n" => Command::Move(Direction::North),
            "south" | "s" => Command::Move(Direction::South),
            "east" | "e" => Command::Move(Direction::East),
            "west" | "w" => Command::Move(Direction::West),
            "fight" | "f" => match words.next() {
                None => Command::Fight(None),
                Some("torpedo" | "torpedoes" | "t") => Command::Fight(Some(Weapon::Torpedo)),
                Some("laser" | "lasers" | "l") => Command::Fight(Some(Weapon::Laser)),
                Some(_) => return Err(invalid()),
            },
            "evade" => Command::Evade,
            "status" => Command::Status,
            "scan" | "locate" => Command::Scan,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Err(invalid()),
        };

        if words.next().is_some() {
            return Err(invalid());
        }
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Command::Move(direction) => write!(f, "{}", direction.name()),
            Command::Fight(None) => write!(f, "fight"),
            Command::Fight(Some(weapon)) => write!(f, "fight {}", weapon.name().to_lowercase()),
            Command::Evade => write!(f, "evade"),
            Command::Status => write!(f, "status"),
            Command::Scan => write!(f, "scan"),
            Command::Help => write!(f, "help"),
            Command::Quit => write!(f, "quit"),
        }
    }
}
