use std::process::ExitCode;

use star_explorer::cli::args::{self, USAGE};
use star_explorer::io::TerminalIO;
use star_explorer::services::game::Game;
use star_explorer::{logging, GameEngine};

fn main() -> ExitCode {
    logging::init_tracing();

    let args = match args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let config = args.into_config();
    tracing::info!(seed = config.seed, width = config.width, height = config.height, "starting");

    let engine = match GameEngine::new(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut game = Game::new(engine, TerminalIO, TerminalIO);
    match game.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "game aborted");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
