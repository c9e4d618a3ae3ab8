use tracing::{info, warn};

use crate::game_engine::{GameEngine, GameState};
use crate::io::{InputReader, OutputWriter};
use crate::models::command::Command;
use crate::models::errors::GameResult;
use crate::ui::presenters::{CombatPresenter, ShipPresenter};

/// Console turn loop: reads one command per turn until the ship is lost,
/// the player quits, or input runs out.
pub struct Game<I: InputReader, O: OutputWriter> {
    pub engine: GameEngine,
    input: I,
    output: O,
}

impl<I: InputReader, O: OutputWriter> Game<I, O> {
    pub fn new(engine: GameEngine, input: I, output: O) -> Self {
        Game {
            engine,
            input,
            output,
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Runs the game to completion and returns the final state.
    ///
    /// Recoverable command errors are reported to the player and the loop
    /// continues; only I/O failures end it with an error.
    pub fn run(&mut self) -> GameResult<GameState> {
        self.print_mission_briefing();
        self.print_status_line()?;

        while self.engine.state() == GameState::Running {
            let Some(line) = self.input.read_line("COMMAND")? else {
                info!("input closed");
                self.engine.execute(Command::Quit, &mut self.output)?;
                self.output.writeln("GOODBYE, CAPTAIN.");
                break;
            };

            let result = line
                .parse::<Command>()
                .and_then(|command| self.engine.execute(command, &mut self.output));

            if let Err(e) = result {
                if !e.is_recoverable() {
                    return Err(e);
                }
                warn!(error = %e, "command rejected");
                self.output.writeln(&format!("Error: {}", e));
            }

            match self.engine.state() {
                GameState::Running => self.print_status_line()?,
                GameState::Lost => CombatPresenter::show_defeat(&mut self.output),
                GameState::Quit => self.output.writeln("GOODBYE, CAPTAIN."),
            }
        }

        Ok(self.engine.state())
    }

    fn print_mission_briefing(&mut self) {
        let g = self.engine.galaxy();
        self.output.writeln("*** STAR EXPLORER ***");
        self.output.writeln(&format!(
            "YOUR SHIP IS ONE OF {} ZONES ACROSS. {} HOSTILE VESSELS HAVE BEEN REPORTED",
            g.width() * g.height(),
            g.remaining_enemies(),
        ));
        self.output.writeln("TYPE HELP FOR A LIST OF COMMANDS");
    }

    fn print_status_line(&mut self) -> GameResult<()> {
        let zone = self.engine.current_zone()?;
        ShipPresenter::show_status_line(
            self.engine.ship(),
            zone,
            self.engine.encounter(),
            &mut self.output,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::{MockInput, MockOutput};
    use crate::models::combatant::Combatant;
    use crate::models::galaxy::Galaxy;
    use crate::models::position::Position;
    use crate::models::zone::{Federation, Zone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(commands: Vec<&str>) -> Game<MockInput, MockOutput> {
        let zones = vec![Zone::new(Federation::Nasa, None); 9];
        let galaxy = Galaxy::from_zones(3, 3, zones).unwrap();
        let engine = GameEngine::from_parts(
            galaxy,
            Combatant::ship(Position::default()),
            StdRng::seed_from_u64(0),
        );
        Game::new(engine, MockInput::new(commands), MockOutput::new())
    }

    #[test]
    fn quit_ends_the_loop() {
        let mut game = game(vec!["north", "quit", "north"]);

        assert_eq!(game.run().unwrap(), GameState::Quit);
        assert_eq!(game.engine.ship().position(), Position::new(0, 1));
        assert!(game.output().contains("GOODBYE"));
    }

    #[test]
    fn end_of_input_quits() {
        let mut game = game(vec!["east"]);
        assert_eq!(game.run().unwrap(), GameState::Quit);
        assert_eq!(game.engine.turns(), 2);
        assert_eq!(game.output().messages.last().map(String::as_str), Some("GOODBYE, CAPTAIN."));
    }

    #[test]
    fn invalid_command_is_reported_and_loop_continues() {
        let mut game = game(vec!["warp 9", "east", "quit"]);

        assert_eq!(game.run().unwrap(), GameState::Quit);
        assert!(game.output().contains("Error: unrecognized command 'warp 9'"));
        assert_eq!(game.engine.ship().position(), Position::new(1, 0));
    }

    #[test]
    fn status_line_follows_every_turn() {
        let mut game = game(vec!["east", "quit"]);
        game.run().unwrap();

        assert!(game.output().contains("ZONE 0:0 | NASA SPACE | NO RISK"));
        assert!(game.output().contains("ZONE 1:0 | NASA SPACE | NO RISK"));
    }
}
