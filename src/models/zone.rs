use rand::distributions::{Distribution, Standard, WeightedIndex};
use rand::Rng;

use super::combatant::Combatant;
use super::constants::DEFAULT_CONTENT_WEIGHTS;
use super::errors::{GameError, GameResult};
use super::item::{Item, ItemKind};
use super::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Federation {
    Nasa,
    Neutral,
    Romulan,
}

impl Federation {
    pub fn name(&self) -> &'static str {
        match self {
            Federation::Nasa => "NASA",
            Federation::Neutral => "NEUTRAL",
            Federation::Romulan => "ROMULAN",
        }
    }

    pub const ALL: [Federation; 3] = [Federation::Nasa, Federation::Neutral, Federation::Romulan];
}

impl Distribution<Federation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Federation {
        Federation::ALL[rng.gen_range(0..Federation::ALL.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Risk {
    NoRisk,
    MediumRisk,
    HighRisk,
}

impl Risk {
    pub fn label(&self) -> &'static str {
        match self {
            Risk::NoRisk => "NO RISK",
            Risk::MediumRisk => "MEDIUM RISK",
            Risk::HighRisk => "HIGH RISK",
        }
    }
}

/// Risk of contact implied by a zone's allegiance.
pub fn risk_for(federation: Federation) -> Risk {
    match federation {
        Federation::Nasa => Risk::NoRisk,
        Federation::Neutral => Risk::MediumRisk,
        Federation::Romulan => Risk::HighRisk,
    }
}

/// Relative weights for what a freshly generated zone contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPolicy {
    pub empty: u32,
    pub enemy: u32,
    pub item: u32,
}

impl ContentPolicy {
    pub fn new(empty: u32, enemy: u32, item: u32) -> Self {
        ContentPolicy { empty, enemy, item }
    }

    /// Build the sampler over content slots (0 = empty, 1 = enemy, 2 = item).
    /// Fails when every weight is zero.
    pub fn distribution(&self) -> GameResult<WeightedIndex<u32>> {
        WeightedIndex::new([self.empty, self.enemy, self.item])
            .map_err(|e| GameError::InvalidConfig(format!("content weights: {}", e)))
    }
}

impl Default for ContentPolicy {
    fn default() -> Self {
        let (empty, enemy, item) = DEFAULT_CONTENT_WEIGHTS;
        ContentPolicy { empty, enemy, item }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneContent {
    Enemy(Combatant),
    Item(Item),
}

/// What happened when a ship entered a zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Nothing,
    Pickup(ItemKind),
    /// The enemy has left the zone and is now engaging the ship.
    Encounter(Combatant),
}

/// One cell of the galaxy grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    federation: Federation,
    content: Option<ZoneContent>,
}

impl Zone {
    pub fn new(federation: Federation, content: Option<ZoneContent>) -> Self {
        Zone {
            federation,
            content,
        }
    }

    /// Roll a zone at `position`: uniform federation, weighted content.
    pub fn generate<R: Rng + ?Sized>(
        position: Position,
        content: &WeightedIndex<u32>,
        rng: &mut R,
    ) -> Self {
        let federation: Federation = rng.gen();
        let content = match content.sample(rng) {
            1 => Some(ZoneContent::Enemy(Combatant::enemy(position))),
            2 => Some(ZoneContent::Item(Item::random(rng))),
            _ => None,
        };
        Zone::new(federation, content)
    }

    pub fn federation(&self) -> Federation {
        self.federation
    }

    pub fn risk(&self) -> Risk {
        risk_for(self.federation)
    }

    pub fn content(&self) -> Option<&ZoneContent> {
        self.content.as_ref()
    }

    pub fn clear(&mut self) {
        self.content = None;
    }

    /// Trigger the zone's content against `ship`. Content fires at most once.
    pub fn interact(&mut self, ship: &mut Combatant) -> Interaction {
        match self.content.take() {
            None => Interaction::Nothing,
            Some(ZoneContent::Item(item)) => Interaction::Pickup(item.interact(ship)),
            Some(ZoneContent::Enemy(enemy)) => Interaction::Encounter(enemy),
        }
    }
}
