pub const GALAXY_WIDTH: usize = 10;
pub const GALAXY_HEIGHT: usize = 10;
/// Largest allowed galaxy side, in zones.
pub const MAX_GALAXY_DIMENSION: usize = 1000;

pub const SHIP_SHIELDS: u32 = 50;
pub const SHIP_HULL: i32 = 100;
pub const SHIP_TORPEDOES: u32 = 10;
pub const SHIP_TORPEDO_POWER: u32 = 25;
pub const SHIP_LASER_POWER: u32 = 3;

pub const ENEMY_SHIELDS: u32 = 30;
pub const ENEMY_HULL: i32 = 80;
pub const ENEMY_TORPEDOES: u32 = 6;
pub const ENEMY_TORPEDO_POWER: u32 = 26;
pub const ENEMY_LASER_POWER: u32 = 2;

pub const ENGINE_TEMPERATURE: i32 = 100;
pub const FUEL_LEVEL: i32 = 50;

pub const SHIELD_BOOST_AMOUNT: u32 = 25;
pub const TORPEDO_REFILL_AMOUNT: u32 = 1;
pub const DEATH_RAY_LASER_POWER: u32 = 1000;

/// Probability that an `evade` command breaks off an encounter.
pub const EVADE_CHANCE: f64 = 0.5;

/// Default zone content weights: empty, enemy, item.
pub const DEFAULT_CONTENT_WEIGHTS: (u32, u32, u32) = (2, 1, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Coordinate delta as (dx, dy). North increases y.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weapon {
    Torpedo,
    Laser,
}

impl Weapon {
    pub fn name(&self) -> &'static str {
        match self {
            Weapon::Torpedo => "TORPEDO",
            Weapon::Laser => "LASER",
        }
    }
}
