use tracing::info;

use crate::io::OutputWriter;
use crate::models::combatant::Combatant;
use crate::models::constants::Weapon;
use crate::models::errors::GameResult;
use crate::ui::presenters::CombatPresenter;

use super::enemy_attack::enemy_fires;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    EnemyDestroyed,
    ShipDestroyed,
    /// Both sides are still flying.
    Continuing,
}

/// Resolves the `fight` command.
///
/// The ship fires `weapon` (or its preferred weapon) at the engaged enemy.
/// If the enemy survives it returns fire once. A shot that cannot be taken,
/// such as a torpedo with empty bays, is an error and the enemy does not
/// get to answer it.
pub fn fight(
    ship: &mut Combatant,
    enemy: &mut Combatant,
    weapon: Option<Weapon>,
    output: &mut dyn OutputWriter,
) -> GameResult<ExchangeOutcome> {
    let weapon = weapon.unwrap_or_else(|| ship.preferred_weapon());
    let damage = ship.fire_weapon(weapon, enemy)?;
    CombatPresenter::show_hit(ship.kind(), weapon, damage, enemy, output);
    info!(
        weapon = weapon.name(),
        damage,
        enemy_shields = enemy.shield_strength(),
        enemy_hull = enemy.hull_strength(),
        "ship fired on enemy"
    );

    if enemy.destroyed() {
        CombatPresenter::show_enemy_destroyed(output);
        info!("enemy destroyed");
        return Ok(ExchangeOutcome::EnemyDestroyed);
    }

    if enemy_fires(enemy, ship, output)? {
        return Ok(ExchangeOutcome::ShipDestroyed);
    }
    Ok(ExchangeOutcome::Continuing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;
    use crate::models::constants::{
        DEATH_RAY_LASER_POWER, ENEMY_SHIELDS, SHIP_SHIELDS, SHIP_TORPEDOES,
    };
    use crate::models::errors::GameError;
    use crate::models::position::Position;

    fn pair() -> (Combatant, Combatant) {
        (
            Combatant::ship(Position::new(2, 2)),
            Combatant::enemy(Position::new(2, 2)),
        )
    }

    #[test]
    fn exchange_hits_both_sides() {
        let (mut ship, mut enemy) = pair();
        let mut output = MockOutput::new();

        let outcome = fight(&mut ship, &mut enemy, None, &mut output).unwrap();

        assert_eq!(outcome, ExchangeOutcome::Continuing);
        assert_eq!(ship.torpedo_count(), SHIP_TORPEDOES - 1);
        assert_eq!(enemy.shield_strength(), ENEMY_SHIELDS - 25);
        assert_eq!(ship.shield_strength(), SHIP_SHIELDS - 26);
    }

    #[test]
    fn destroyed_enemy_does_not_answer() {
        let (mut ship, mut enemy) = pair();
        ship.set_laser_power(DEATH_RAY_LASER_POWER);
        enemy.stats_mut().shield_strength = 0;
        let mut output = MockOutput::new();

        let outcome = fight(&mut ship, &mut enemy, Some(Weapon::Laser), &mut output).unwrap();

        assert_eq!(outcome, ExchangeOutcome::EnemyDestroyed);
        assert_eq!(ship.shield_strength(), SHIP_SHIELDS);
        assert!(output.contains("ENEMY VESSEL DESTROYED"));
    }

    #[test]
    fn ship_can_be_destroyed_by_return_fire() {
        let (mut ship, mut enemy) = pair();
        ship.stats_mut().shield_strength = 0;
        ship.stats_mut().hull_strength = 20;
        let mut output = MockOutput::new();

        let outcome = fight(&mut ship, &mut enemy, Some(Weapon::Laser), &mut output).unwrap();

        assert_eq!(outcome, ExchangeOutcome::ShipDestroyed);
        assert!(ship.destroyed());
    }

    #[test]
    fn empty_torpedo_bays_abort_the_exchange() {
        let (mut ship, mut enemy) = pair();
        ship.stats_mut().torpedo_count = 0;
        let mut output = MockOutput::new();

        let err = fight(&mut ship, &mut enemy, Some(Weapon::Torpedo), &mut output).unwrap_err();

        assert!(matches!(err, GameError::NoTorpedoes));
        assert_eq!(ship.shield_strength(), SHIP_SHIELDS);
        assert_eq!(enemy.shield_strength(), ENEMY_SHIELDS);
    }
}
