use rand::Rng;
use tracing::info;

use crate::io::OutputWriter;
use crate::models::combatant::Combatant;
use crate::models::constants::EVADE_CHANCE;
use crate::models::errors::{GameError, GameResult};
use crate::ui::presenters::CombatPresenter;

use super::enemy_attack::enemy_fires;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvadeOutcome {
    /// The enemy is left behind for good.
    Escaped,
    /// Still engaged after taking a parting shot.
    Caught,
    ShipDestroyed,
}

/// Resolves the `evade` command. Succeeds with probability `EVADE_CHANCE`;
/// otherwise the enemy fires once.
pub fn evade<R: Rng + ?Sized>(
    ship: &mut Combatant,
    enemy: &mut Combatant,
    rng: &mut R,
    output: &mut dyn OutputWriter,
) -> GameResult<EvadeOutcome> {
    if ship.destroyed() {
        return Err(GameError::EntityDestroyed(ship.kind()));
    }

    let roll: f64 = rng.gen();
    if roll < EVADE_CHANCE {
        CombatPresenter::show_evaded(output);
        info!(roll, "evasion succeeded");
        return Ok(EvadeOutcome::Escaped);
    }

    CombatPresenter::show_evade_failed(output);
    info!(roll, "evasion failed");
    if enemy_fires(enemy, ship, output)? {
        return Ok(EvadeOutcome::ShipDestroyed);
    }
    Ok(EvadeOutcome::Caught)
}
