use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use star_explorer::models::combatant::Combatant;
use star_explorer::models::constants::Direction;
use star_explorer::models::galaxy::{Galaxy, MoveOutcome};
use star_explorer::models::item::{Item, ItemKind};
use star_explorer::models::position::Position;
use star_explorer::models::zone::{risk_for, ContentPolicy, Federation, Interaction, Zone, ZoneContent};
use star_explorer::{GameConfig, GameEngine, GameState};

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn item_kind() -> impl Strategy<Value = ItemKind> {
    prop::sample::select(ItemKind::ALL.to_vec())
}

fn ship_with(shields: u32, hull: i32) -> Combatant {
    let mut ship = Combatant::ship(Position::default());
    ship.stats_mut().shield_strength = shields;
    ship.stats_mut().hull_strength = hull;
    ship
}

proptest! {
    /// Property: While shields are up, a hit only ever drains shields
    #[test]
    fn shields_absorb_first(shields in 1u32..10_000, hull in -500i32..10_000, amount in 0u32..20_000) {
        let mut ship = ship_with(shields, hull);
        ship.damage(amount);

        prop_assert_eq!(ship.shield_strength(), shields - amount.min(shields));
        prop_assert_eq!(ship.hull_strength(), hull);
    }

    /// Property: With shields down, the hull takes exactly the hit
    #[test]
    fn hull_takes_full_hit_without_shields(hull in -500i32..10_000, amount in 0u32..20_000) {
        let mut ship = ship_with(0, hull);
        ship.damage(amount);

        prop_assert_eq!(ship.shield_strength(), 0);
        prop_assert_eq!(ship.hull_strength(), hull - amount as i32);
    }

    /// Property: Destroyed exactly when hull is below 1, for any damage sequence
    #[test]
    fn destroyed_iff_hull_below_one(hits in prop::collection::vec(0u32..200, 0..20)) {
        let mut ship = Combatant::ship(Position::default());
        for hit in hits {
            ship.damage(hit);
            prop_assert_eq!(ship.destroyed(), ship.hull_strength() < 1);
        }
    }

    /// Property: Moves never leave the grid, and every step is by one zone
    #[test]
    fn movement_stays_in_bounds(
        seed in any::<u64>(),
        width in 1usize..12,
        height in 1usize..12,
        moves in prop::collection::vec(direction(), 0..60)
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut galaxy = Galaxy::generate(width, height, &ContentPolicy::new(1, 0, 1), &mut rng).unwrap();
        let mut ship = Combatant::ship(Position::default());

        for dir in moves {
            let before = ship.position();
            match galaxy.move_entity(&mut ship, dir) {
                MoveOutcome::Blocked => prop_assert_eq!(ship.position(), before),
                MoveOutcome::Moved { to, .. } => {
                    prop_assert_eq!(to, before.step(dir));
                    prop_assert_eq!(ship.position(), to);
                }
            }
            prop_assert!(galaxy.contains(ship.position()));
        }
    }

    /// Property: Repeated moves into an edge leave the position unchanged
    #[test]
    fn boundary_moves_are_idempotent(width in 1usize..12, height in 1usize..12, repeats in 1usize..10) {
        let zones = vec![Zone::new(Federation::Nasa, None); width * height];
        let mut galaxy = Galaxy::from_zones(width, height, zones).unwrap();
        let corner = Position::new(width as i32 - 1, height as i32 - 1);
        let mut ship = Combatant::ship(corner);

        for _ in 0..repeats {
            prop_assert_eq!(galaxy.move_entity(&mut ship, Direction::North), MoveOutcome::Blocked);
            prop_assert_eq!(galaxy.move_entity(&mut ship, Direction::East), MoveOutcome::Blocked);
        }
        prop_assert_eq!(ship.position(), corner);
    }

    /// Property: Zone content fires exactly once
    #[test]
    fn item_consumed_exactly_once(kind in item_kind()) {
        let mut zone = Zone::new(Federation::Neutral, Some(ZoneContent::Item(Item::new(kind))));
        let mut ship = Combatant::ship(Position::default());

        prop_assert_eq!(zone.interact(&mut ship), Interaction::Pickup(kind));
        let after_first = ship.clone();
        prop_assert_eq!(zone.interact(&mut ship), Interaction::Nothing);
        prop_assert_eq!(ship, after_first);
        prop_assert!(zone.content().is_none());
    }

    /// Property: Risk is a pure function of federation
    #[test]
    fn zone_risk_matches_federation(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let galaxy = Galaxy::generate(5, 5, &ContentPolicy::default(), &mut rng).unwrap();
        for zone in galaxy.zones() {
            prop_assert_eq!(zone.risk(), risk_for(zone.federation()));
        }
    }

    /// Property: Same seed always builds the same galaxy
    #[test]
    fn generation_is_deterministic(seed in any::<u64>()) {
        let a = GameEngine::new(&GameConfig::new(seed)).unwrap();
        let b = GameEngine::new(&GameConfig::new(seed)).unwrap();
        prop_assert_eq!(a.galaxy().zones(), b.galaxy().zones());
    }

    /// Property: A fresh engine is running and stays running after checks
    #[test]
    fn game_state_transitions_valid(seed in any::<u64>()) {
        let mut engine = GameEngine::new(&GameConfig::new(seed)).unwrap();

        prop_assert_eq!(engine.check_game_over(), None);
        prop_assert_eq!(engine.state(), GameState::Running);
        prop_assert!(engine.current_zone().unwrap().content().is_none());
    }
}
