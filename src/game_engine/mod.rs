//! Game state machine
//!
//! The GameEngine owns the galaxy, the player's ship, the engaged enemy (if
//! any) and the session's random source. It applies one command per turn
//! and tracks whether the game is still running.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::GameConfig;
use crate::io::OutputWriter;
use crate::models::combatant::Combatant;
use crate::models::command::Command;
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::models::position::Position;
use crate::models::zone::Zone;
use crate::services::combat::{self, EvadeOutcome, ExchangeOutcome};
use crate::services::navigation;
use crate::ui::presenters::ShipPresenter;

/// Core game engine
pub struct GameEngine {
    galaxy: Galaxy,
    ship: Combatant,
    /// Enemy currently engaging the ship. Removed from its zone on contact.
    encounter: Option<Combatant>,
    rng: StdRng,
    state: GameState,
    turns: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    /// The player's ship was destroyed.
    Lost,
    Quit,
}

impl GameEngine {
    /// Creates a new game from `config`
    ///
    /// The galaxy is generated from `config.seed`; the ship starts in zone
    /// 0:0, which is always left empty.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidConfig` if the configuration fails validation.
    pub fn new(config: &GameConfig) -> GameResult<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut galaxy = Galaxy::generate(config.width, config.height, &config.content_policy, &mut rng)?;

        let start = Position::default();
        galaxy.zone_at_mut(start.x, start.y)?.clear();
        info!(seed = config.seed, "new game");

        Ok(Self::from_parts(galaxy, Combatant::ship(start), rng))
    }

    /// Assemble an engine from prepared pieces
    pub fn from_parts(galaxy: Galaxy, ship: Combatant, rng: StdRng) -> Self {
        Self {
            galaxy,
            ship,
            encounter: None,
            rng,
            state: GameState::Running,
            turns: 0,
        }
    }

    // ========== Accessor Methods ==========

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    pub fn ship(&self) -> &Combatant {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Combatant {
        &mut self.ship
    }

    pub fn encounter(&self) -> Option<&Combatant> {
        self.encounter.as_ref()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of commands processed so far
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The zone the ship is currently in
    pub fn current_zone(&self) -> GameResult<&Zone> {
        let pos = self.ship.position();
        self.galaxy.zone_at(pos.x, pos.y)
    }

    // ========== End Accessor Methods ==========

    /// Applies one player command
    ///
    /// Every command that reaches the engine counts as a turn, including
    /// ones that fail with a recoverable error.
    ///
    /// # Errors
    ///
    /// - `GameOver` once the ship is lost or the player has quit
    /// - `Engaged` when moving with an enemy engaged
    /// - `NoEnemy` when fighting or evading with nothing engaged
    /// - `NoTorpedoes` when a torpedo is requested with empty bays
    pub fn execute(&mut self, command: Command, output: &mut dyn OutputWriter) -> GameResult<()> {
        if self.state != GameState::Running {
            return Err(GameError::GameOver);
        }
        self.turns += 1;
        info!(turn = self.turns, %command, "command");

        let result = self.dispatch(command, output);
        self.check_game_over();
        result
    }

    fn dispatch(&mut self, command: Command, output: &mut dyn OutputWriter) -> GameResult<()> {
        match command {
            Command::Move(direction) => {
                if self.encounter.is_some() {
                    return Err(GameError::Engaged);
                }
                self.encounter = navigation::travel(&mut self.galaxy, &mut self.ship, direction, output);
            }
            Command::Fight(weapon) => {
                let enemy = self.encounter.as_mut().ok_or(GameError::NoEnemy)?;
                if combat::fight(&mut self.ship, enemy, weapon, output)? == ExchangeOutcome::EnemyDestroyed {
                    self.encounter = None;
                }
            }
            Command::Evade => {
                let enemy = self.encounter.as_mut().ok_or(GameError::NoEnemy)?;
                if combat::evade(&mut self.ship, enemy, &mut self.rng, output)? == EvadeOutcome::Escaped {
                    self.encounter = None;
                }
            }
            Command::Status => ShipPresenter::show_status(&self.ship, output),
            Command::Scan => output.writeln(&self.galaxy.locate(&self.ship)?),
            Command::Help => Self::print_command_menu(output),
            Command::Quit => {
                info!(turns = self.turns, "player quit");
                self.state = GameState::Quit;
            }
        }
        Ok(())
    }

    /// Checks for game over conditions and updates the game state
    ///
    /// # Returns
    ///
    /// * `Some(GameState)` if the game has ended (Lost or Quit)
    /// * `None` if the game is still running
    pub fn check_game_over(&mut self) -> Option<GameState> {
        if self.state != GameState::Running {
            return Some(self.state);
        }

        if self.ship.destroyed() {
            info!(turns = self.turns, hull = self.ship.hull_strength(), "ship destroyed");
            self.state = GameState::Lost;
            return Some(self.state);
        }

        None
    }

    pub fn print_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("   NORTH, SOUTH, EAST, WEST = TRAVEL ONE ZONE");
        output.writeln("   FIGHT [TORPEDO|LASER]   = ATTACK THE ENGAGED ENEMY");
        output.writeln("   EVADE                   = TRY TO BREAK OFF COMBAT");
        output.writeln("   STATUS                  = SHIP STATUS REPORT");
        output.writeln("   SCAN                    = LOCATE SHIP");
        output.writeln("   QUIT                    = END THE GAME");
    }
}
