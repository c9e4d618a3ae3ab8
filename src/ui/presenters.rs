use crate::io::OutputWriter;
use crate::models::combatant::{Combatant, CombatantKind};
use crate::models::constants::Weapon;
use crate::models::item::ItemKind;
use crate::models::zone::Zone;

pub struct ShipPresenter;

impl ShipPresenter {
    /// One-line summary printed after every turn.
    pub fn show_status_line(
        ship: &Combatant,
        zone: &Zone,
        enemy: Option<&Combatant>,
        output: &mut dyn OutputWriter,
    ) {
        let pos = ship.position();
        let mut line = format!(
            "ZONE {}:{} | {} SPACE | {} | SHIELDS {} HULL {} TORPEDOES {}",
            pos.x,
            pos.y,
            zone.federation().name(),
            zone.risk().label(),
            ship.shield_strength(),
            ship.hull_strength(),
            ship.torpedo_count(),
        );
        if let Some(enemy) = enemy {
            line.push_str(&format!(
                " | ENEMY ENGAGED (SHIELDS {} HULL {})",
                enemy.shield_strength(),
                enemy.hull_strength()
            ));
        }
        output.writeln(&line);
    }

    pub fn show_status(ship: &Combatant, output: &mut dyn OutputWriter) {
        let stats = ship.stats();
        output.writeln(&ship.status_report());
        output.writeln(&format!(
            "ENGINE TEMPERATURE {}  FUEL LEVEL {}",
            stats.engine_temperature, stats.fuel_level
        ));
        output.writeln(&format!(
            "TORPEDOES {} (POWER {})  LASER POWER {}",
            stats.torpedo_count, stats.torpedo_power, stats.laser_power
        ));
    }
}

pub struct NavigationPresenter;

impl NavigationPresenter {
    pub fn show_blocked(output: &mut dyn OutputWriter) {
        output.writeln("YOU HAVE REACHED THE EDGE OF THE GALAXY");
    }

    pub fn show_pickup(kind: ItemKind, output: &mut dyn OutputWriter) {
        output.writeln(&format!("{} RECOVERED. {}", kind.name(), kind.narration()));
    }

    pub fn show_encounter(enemy: &Combatant, output: &mut dyn OutputWriter) {
        output.writeln("RED ALERT! ENEMY VESSEL ON SENSORS");
        output.writeln(&format!("   ({})", enemy.status_report()));
    }
}

pub struct CombatPresenter;

impl CombatPresenter {
    pub fn show_hit(
        attacker: CombatantKind,
        weapon: Weapon,
        damage: u32,
        target: &Combatant,
        output: &mut dyn OutputWriter,
    ) {
        output.writeln(&format!(
            "{} FIRES {}: {} UNIT HIT ON {}",
            attacker.name(),
            weapon.name(),
            damage,
            target.kind().name()
        ));
        output.writeln(&format!("   ({})", target.status_report()));
    }

    pub fn show_enemy_destroyed(output: &mut dyn OutputWriter) {
        output.writeln("*** ENEMY VESSEL DESTROYED ***");
    }

    pub fn show_evaded(output: &mut dyn OutputWriter) {
        output.writeln("EVASIVE MANEUVERS SUCCESSFUL. THE ENEMY HAS LOST TRACK OF US");
    }

    pub fn show_evade_failed(output: &mut dyn OutputWriter) {
        output.writeln("THE ENEMY IS STILL ON OUR TAIL!");
    }

    pub fn show_defeat(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("*** YOUR SHIP HAS BEEN DESTROYED");
        output.writeln("GAME OVER");
        output.writeln("");
    }
}
