//! Galaxy model
//!
//! The navigable universe: a fixed width x height grid of zones, stored as a
//! flat arena owned solely by the galaxy and addressed by (x, y).

mod generation;

use rand::Rng;
use tracing::{debug, info};

use super::combatant::Combatant;
use super::constants::Direction;
use super::errors::{GameError, GameResult};
use super::position::Position;
use super::zone::{ContentPolicy, Interaction, Zone, ZoneContent};

use generation::{check_dimensions, generate_zones};

/// Result of asking the galaxy to move an entity one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The step would leave the grid; nothing changed.
    Blocked,
    Moved { to: Position, interaction: Interaction },
}

#[derive(Debug, Clone)]
pub struct Galaxy {
    width: usize,
    height: usize,
    /// Row-major: zones[y * width + x].
    zones: Vec<Zone>,
}

impl Galaxy {
    /// Generate a galaxy from the given random source. The same seed always
    /// yields the same galaxy.
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        policy: &ContentPolicy,
        rng: &mut R,
    ) -> GameResult<Self> {
        let zones = generate_zones(width, height, policy, rng)?;
        let galaxy = Galaxy {
            width,
            height,
            zones,
        };
        info!(
            width,
            height,
            enemies = galaxy.remaining_enemies(),
            items = galaxy.remaining_items(),
            "galaxy generated"
        );
        Ok(galaxy)
    }

    /// Assemble a galaxy from prepared zones, row-major from the southern edge.
    pub fn from_zones(width: usize, height: usize, zones: Vec<Zone>) -> GameResult<Self> {
        check_dimensions(width, height)?;
        if zones.len() != width * height {
            return Err(GameError::InvalidConfig(format!(
                "{} zones cannot fill a {}x{} galaxy",
                zones.len(),
                width,
                height
            )));
        }
        Ok(Galaxy {
            width,
            height,
            zones,
        })
    }

    // ========== Accessor Methods ==========

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn zone_at(&self, x: i32, y: i32) -> GameResult<&Zone> {
        self.index(Position::new(x, y))
            .map(|i| &self.zones[i])
            .ok_or(GameError::OutOfBounds { x, y })
    }

    pub fn zone_at_mut(&mut self, x: i32, y: i32) -> GameResult<&mut Zone> {
        match self.index(Position::new(x, y)) {
            Some(i) => Ok(&mut self.zones[i]),
            None => Err(GameError::OutOfBounds { x, y }),
        }
    }

    // ========== End Accessor Methods ==========

    pub fn remaining_enemies(&self) -> usize {
        self.zones
            .iter()
            .filter(|z| matches!(z.content(), Some(ZoneContent::Enemy(_))))
            .count()
    }

    pub fn remaining_items(&self) -> usize {
        self.zones
            .iter()
            .filter(|z| matches!(z.content(), Some(ZoneContent::Item(_))))
            .count()
    }

    /// Move `entity` one zone in `direction` and trigger the zone it lands in.
    /// Steps off the edge of the grid are ignored.
    pub fn move_entity(&mut self, entity: &mut Combatant, direction: Direction) -> MoveOutcome {
        let from = entity.position();
        let to = from.step(direction);
        let Some(index) = self.index(to) else {
            debug!(x = from.x, y = from.y, direction = direction.name(), "move blocked at edge");
            return MoveOutcome::Blocked;
        };

        entity.set_position(to);
        let interaction = self.zones[index].interact(entity);
        debug!(x = to.x, y = to.y, ?interaction, "entity moved");
        MoveOutcome::Moved { to, interaction }
    }

    /// Describe where `entity` currently is.
    pub fn locate(&self, entity: &Combatant) -> GameResult<String> {
        let pos = entity.position();
        let zone = self.zone_at(pos.x, pos.y)?;
        Ok(format!(
            "{} IS CURRENTLY IN ZONE {}:{}. THIS IS {} SPACE, THE RISK OF CONTACT IS {}",
            entity.kind().name(),
            pos.x,
            pos.y,
            zone.federation().name(),
            zone.risk().label()
        ))
    }
}
