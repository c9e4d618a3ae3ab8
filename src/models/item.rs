use rand::distributions::{Distribution, Standard};
use rand::Rng;

use super::combatant::Combatant;
use super::constants::{DEATH_RAY_LASER_POWER, SHIELD_BOOST_AMOUNT, TORPEDO_REFILL_AMOUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    ShieldBoost,
    TorpedoRefill,
    DeathRay,
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::ShieldBoost => "SHIELD BOOST",
            ItemKind::TorpedoRefill => "TORPEDO",
            ItemKind::DeathRay => "DEATH RAY",
        }
    }

    /// Line reported to the player when the item is picked up.
    pub fn narration(&self) -> &'static str {
        match self {
            ItemKind::ShieldBoost => "BOOSTING SHIELDS CAPTAIN!",
            ItemKind::TorpedoRefill => "LOADING EXTRA TORPEDOES!",
            ItemKind::DeathRay => "DEATH RAY INSTALLED. LASERS AT MAXIMUM POWER!",
        }
    }

    pub const ALL: [ItemKind; 3] = [ItemKind::ShieldBoost, ItemKind::TorpedoRefill, ItemKind::DeathRay];
}

impl Distribution<ItemKind> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ItemKind {
        ItemKind::ALL[rng.gen_range(0..ItemKind::ALL.len())]
    }
}

/// A single-use pickup floating in a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    kind: ItemKind,
}

impl Item {
    pub fn new(kind: ItemKind) -> Self {
        Item { kind }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Item { kind: rng.gen() }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Apply the item's effect to `target`. Consumes the item.
    pub fn interact(self, target: &mut Combatant) -> ItemKind {
        match self.kind {
            ItemKind::ShieldBoost => target.repair_shield(SHIELD_BOOST_AMOUNT),
            ItemKind::TorpedoRefill => target.add_torpedoes(TORPEDO_REFILL_AMOUNT),
            ItemKind::DeathRay => target.set_laser_power(DEATH_RAY_LASER_POWER),
        }
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::position::Position;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ship() -> Combatant {
        Combatant::ship(Position::new(0, 0))
    }

    #[test]
    fn shield_boost_adds_25() {
        let mut s = ship();
        s.set_shields(10);
        Item::new(ItemKind::ShieldBoost).interact(&mut s);
        assert_eq!(s.shield_strength(), 35);
    }

    #[test]
    fn torpedo_refill_adds_one() {
        let mut s = ship();
        let before = s.torpedo_count();
        Item::new(ItemKind::TorpedoRefill).interact(&mut s);
        assert_eq!(s.torpedo_count(), before + 1);
    }

    #[test]
    fn death_ray_sets_laser_power() {
        let mut s = ship();
        Item::new(ItemKind::DeathRay).interact(&mut s);
        assert_eq!(s.laser_power(), 1000);

        // A second death ray does not stack.
        Item::new(ItemKind::DeathRay).interact(&mut s);
        assert_eq!(s.laser_power(), 1000);
    }

    #[test]
    fn random_items_cover_every_kind() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let kind = Item::random(&mut rng).kind();
            let idx = ItemKind::ALL.iter().position(|k| *k == kind).unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 3]);
    }
}
