use tracing::info;

use crate::io::OutputWriter;
use crate::models::combatant::Combatant;
use crate::models::constants::Direction;
use crate::models::galaxy::{Galaxy, MoveOutcome};
use crate::models::zone::Interaction;
use crate::ui::presenters::NavigationPresenter;

/// Moves the ship one zone in `direction` and narrates the arrival.
///
/// A move off the edge of the galaxy is reported and otherwise ignored.
/// When the destination zone held an enemy, that enemy is returned so the
/// caller can make it the active encounter.
pub fn travel(
    galaxy: &mut Galaxy,
    ship: &mut Combatant,
    direction: Direction,
    output: &mut dyn OutputWriter,
) -> Option<Combatant> {
    match galaxy.move_entity(ship, direction) {
        MoveOutcome::Blocked => {
            NavigationPresenter::show_blocked(output);
            None
        }
        MoveOutcome::Moved { to, interaction } => match interaction {
            Interaction::Nothing => None,
            Interaction::Pickup(kind) => {
                NavigationPresenter::show_pickup(kind, output);
                info!(x = to.x, y = to.y, item = kind.name(), "item picked up");
                None
            }
            Interaction::Encounter(enemy) => {
                NavigationPresenter::show_encounter(&enemy, output);
                info!(x = to.x, y = to.y, "enemy encountered");
                Some(enemy)
            }
        },
    }
}
