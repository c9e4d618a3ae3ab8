use crate::config::GameConfig;
use crate::models::errors::{GameError, GameResult};

pub const USAGE: &str = "\
Usage: star_explorer [OPTIONS]

Options:
  -s, --seed <INT>    Seed for the random number generator
      --width <INT>   Galaxy width in zones (default 10)
      --height <INT>  Galaxy height in zones (default 10)
  -h, --help          Print help";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub seed: Option<u64>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub help: bool,
}

impl Args {
    /// Build the session config. A missing seed is drawn at random.
    pub fn into_config(self) -> GameConfig {
        let defaults = GameConfig::default();
        GameConfig::new(self.seed.unwrap_or_else(rand::random)).with_size(
            self.width.unwrap_or(defaults.width),
            self.height.unwrap_or(defaults.height),
        )
    }
}

pub fn parse() -> GameResult<Args> {
    parse_from(std::env::args().skip(1))
}

pub fn parse_from<I: IntoIterator<Item = String>>(argv: I) -> GameResult<Args> {
    let mut args = Args::default();
    let mut iter = argv.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" | "-s" => args.seed = Some(value(&arg, iter.next())?),
            "--width" => args.width = Some(value(&arg, iter.next())?),
            "--height" => args.height = Some(value(&arg, iter.next())?),
            "--help" | "-h" => args.help = true,
            other => {
                return Err(GameError::InvalidArgument(format!("unknown argument {}", other)));
            }
        }
    }

    Ok(args)
}

fn value<T: std::str::FromStr>(flag: &str, raw: Option<String>) -> GameResult<T> {
    let raw = raw.ok_or_else(|| GameError::InvalidArgument(format!("{} requires a value", flag)))?;
    raw.parse()
        .map_err(|_| GameError::InvalidArgument(format!("{} must be a non-negative integer, got {}", flag, raw)))
}
