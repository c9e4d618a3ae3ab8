use super::constants::Weapon;
use super::errors::{GameError, GameResult};
use super::position::Position;
use super::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatantKind {
    Ship,
    Enemy,
}

impl CombatantKind {
    pub fn name(&self) -> &'static str {
        match self {
            CombatantKind::Ship => "YOUR SHIP",
            CombatantKind::Enemy => "ENEMY VESSEL",
        }
    }
}

/// A vessel that can fight: the player's ship or an enemy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    kind: CombatantKind,
    stats: Stats,
    position: Position,
}

impl Combatant {
    pub fn new(kind: CombatantKind, stats: Stats, position: Position) -> Self {
        Combatant {
            kind,
            stats,
            position,
        }
    }

    pub fn ship(position: Position) -> Self {
        Combatant::new(CombatantKind::Ship, Stats::ship(), position)
    }

    pub fn enemy(position: Position) -> Self {
        Combatant::new(CombatantKind::Enemy, Stats::enemy(), position)
    }

    // ========== Accessor Methods ==========

    pub fn kind(&self) -> CombatantKind {
        self.kind
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn shield_strength(&self) -> u32 {
        self.stats.shield_strength
    }

    pub fn hull_strength(&self) -> i32 {
        self.stats.hull_strength
    }

    pub fn torpedo_count(&self) -> u32 {
        self.stats.torpedo_count
    }

    pub fn laser_power(&self) -> u32 {
        self.stats.laser_power
    }

    pub fn weapon_power(&self, weapon: Weapon) -> u32 {
        match weapon {
            Weapon::Torpedo => self.stats.torpedo_power,
            Weapon::Laser => self.stats.laser_power,
        }
    }

    // ========== End Accessor Methods ==========

    pub fn destroyed(&self) -> bool {
        self.stats.hull_strength < 1
    }

    /// Torpedoes while any remain, lasers otherwise.
    pub fn preferred_weapon(&self) -> Weapon {
        if self.stats.torpedo_count > 0 {
            Weapon::Torpedo
        } else {
            Weapon::Laser
        }
    }

    /// Fire `weapon` at `target`, returning the damage dealt.
    ///
    /// Nothing is mutated when the shot cannot be taken: either side already
    /// destroyed, or a torpedo requested with empty bays.
    pub fn fire_weapon(&mut self, weapon: Weapon, target: &mut Combatant) -> GameResult<u32> {
        if self.destroyed() {
            return Err(GameError::EntityDestroyed(self.kind));
        }
        if target.destroyed() {
            return Err(GameError::EntityDestroyed(target.kind));
        }
        if weapon == Weapon::Torpedo {
            if self.stats.torpedo_count == 0 {
                return Err(GameError::NoTorpedoes);
            }
            self.stats.torpedo_count -= 1;
        }

        let power = self.weapon_power(weapon);
        target.damage(power);
        Ok(power)
    }

    /// Shields soak the whole hit while they are up; the remainder is lost,
    /// not carried into the hull.
    pub fn damage(&mut self, amount: u32) {
        if self.stats.shield_strength > 0 {
            self.stats.shield_strength = self.stats.shield_strength.saturating_sub(amount);
        } else {
            let amount = i32::try_from(amount).unwrap_or(i32::MAX);
            self.stats.hull_strength = self.stats.hull_strength.saturating_sub(amount);
        }
    }

    pub fn repair_shield(&mut self, amount: u32) {
        self.stats.shield_strength = self.stats.shield_strength.saturating_add(amount);
    }

    pub fn repair_hull(&mut self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.stats.hull_strength = self.stats.hull_strength.saturating_add(amount);
    }

    pub fn add_torpedoes(&mut self, count: u32) {
        self.stats.torpedo_count = self.stats.torpedo_count.saturating_add(count);
    }

    pub fn set_laser_power(&mut self, power: u32) {
        self.stats.laser_power = power;
    }

    pub fn status_report(&self) -> String {
        format!(
            "SHIELDS AT {}, HULL STRENGTH AT {}",
            self.stats.shield_strength, self.stats.hull_strength
        )
    }

    // Test-only setters
    #[cfg(test)]
    pub fn set_shields(&mut self, shields: u32) {
        self.stats.shield_strength = shields;
    }

    #[cfg(test)]
    pub fn set_hull(&mut self, hull: i32) {
        self.stats.hull_strength = hull;
    }
}
