use tracing::info;

use crate::io::OutputWriter;
use crate::models::combatant::Combatant;
use crate::models::errors::GameResult;
use crate::ui::presenters::CombatPresenter;

/// The enemy fires one shot at the ship with its preferred weapon.
/// Returns true if the ship was destroyed by it.
pub fn enemy_fires(
    enemy: &mut Combatant,
    ship: &mut Combatant,
    output: &mut dyn OutputWriter,
) -> GameResult<bool> {
    let weapon = enemy.preferred_weapon();
    let damage = enemy.fire_weapon(weapon, ship)?;
    CombatPresenter::show_hit(enemy.kind(), weapon, damage, ship, output);

    info!(
        weapon = weapon.name(),
        damage,
        shields = ship.shield_strength(),
        hull = ship.hull_strength(),
        "enemy fired on ship"
    );
    Ok(ship.destroyed())
}
