use super::constants::{
    ENEMY_HULL, ENEMY_LASER_POWER, ENEMY_SHIELDS, ENEMY_TORPEDOES, ENEMY_TORPEDO_POWER,
    ENGINE_TEMPERATURE, FUEL_LEVEL, SHIP_HULL, SHIP_LASER_POWER, SHIP_SHIELDS, SHIP_TORPEDOES,
    SHIP_TORPEDO_POWER,
};

/// Raw combat and navigation attributes of a vessel.
/// Pure data; the rules that mutate it live on `Combatant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    // Exterior durability
    pub shield_strength: u32,
    /// Destroyed below 1. May go negative.
    pub hull_strength: i32,
    // Engineering gauges, stored and reported only
    pub engine_temperature: i32,
    pub fuel_level: i32,
    pub speed: i32,
    // Weapons
    pub torpedo_count: u32,
    pub torpedo_power: u32,
    pub laser_power: u32,
}

impl Stats {
    /// Starting loadout of the player's ship.
    pub fn ship() -> Self {
        Stats {
            shield_strength: SHIP_SHIELDS,
            hull_strength: SHIP_HULL,
            engine_temperature: ENGINE_TEMPERATURE,
            fuel_level: FUEL_LEVEL,
            speed: 0,
            torpedo_count: SHIP_TORPEDOES,
            torpedo_power: SHIP_TORPEDO_POWER,
            laser_power: SHIP_LASER_POWER,
        }
    }

    /// Starting loadout of a hostile vessel.
    pub fn enemy() -> Self {
        Stats {
            shield_strength: ENEMY_SHIELDS,
            hull_strength: ENEMY_HULL,
            engine_temperature: ENGINE_TEMPERATURE,
            fuel_level: FUEL_LEVEL,
            speed: 0,
            torpedo_count: ENEMY_TORPEDOES,
            torpedo_power: ENEMY_TORPEDO_POWER,
            laser_power: ENEMY_LASER_POWER,
        }
    }
}
