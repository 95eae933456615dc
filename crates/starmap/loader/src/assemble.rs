//! Builds the system → planet → moon forest from flat row lists.
use std::collections::HashMap;

use starmap_core::{Moon, Planet, PlanetId, System, SystemId};
use tracing::debug;

/// Attaches moons to planets and planets to systems.
///
/// Every level ends up in ascending id order. Children whose parent is not in
/// the input are dropped.
pub fn assemble(mut systems: Vec<System>, planets: Vec<Planet>, moons: Vec<Moon>) -> Vec<System> {
    systems.sort_by_key(|system| system.id);

    let mut moons_by_planet: HashMap<PlanetId, Vec<Moon>> = HashMap::new();
    for moon in moons {
        moons_by_planet.entry(moon.planet_id).or_default().push(moon);
    }

    let mut planets_by_system: HashMap<SystemId, Vec<Planet>> = HashMap::new();
    for mut planet in planets {
        if let Some(mut moons) = moons_by_planet.remove(&planet.id) {
            moons.sort_by_key(|moon| moon.id);
            planet.moons = moons;
        }
        planets_by_system
            .entry(planet.system_id)
            .or_default()
            .push(planet);
    }

    for system in &mut systems {
        if let Some(mut planets) = planets_by_system.remove(&system.id) {
            planets.sort_by_key(|planet| planet.id);
            system.planets = planets;
        }
    }

    let orphan_moons: usize = moons_by_planet.values().map(Vec::len).sum();
    let orphan_planets: usize = planets_by_system.values().map(Vec::len).sum();
    if orphan_moons + orphan_planets > 0 {
        debug!(
            "Dropped {} planets and {} moons without a loaded parent",
            orphan_planets, orphan_moons
        );
    }

    systems
}

#[cfg(test)]
mod tests {
    use super::*;
    use starmap_core::{MoonId, Position};

    fn system(id: i64) -> System {
        System::new(SystemId(id), format!("S{id}"), Position::default())
    }

    #[test]
    fn children_attach_in_id_order() {
        let systems = vec![system(2), system(1)];
        let planets = vec![
            Planet::new(PlanetId(12), SystemId(1), "S1 II"),
            Planet::new(PlanetId(11), SystemId(1), "S1 I"),
            Planet::new(PlanetId(21), SystemId(2), "S2 I"),
        ];
        let moons = vec![
            Moon::new(MoonId(112), PlanetId(11), "b"),
            Moon::new(MoonId(111), PlanetId(11), "a"),
        ];

        let forest = assemble(systems, planets, moons);
        assert_eq!(forest[0].id, SystemId(1));
        let planet_ids: Vec<_> = forest[0].planets.iter().map(|p| p.id).collect();
        assert_eq!(planet_ids, vec![PlanetId(11), PlanetId(12)]);
        let moon_ids: Vec<_> = forest[0].planets[0].moons.iter().map(|m| m.id).collect();
        assert_eq!(moon_ids, vec![MoonId(111), MoonId(112)]);
        assert!(forest[0].planets[1].moons.is_empty());
        assert_eq!(forest[1].planets.len(), 1);
    }

    #[test]
    fn orphans_are_dropped() {
        let planets = vec![Planet::new(PlanetId(91), SystemId(9), "lost")];
        let moons = vec![Moon::new(MoonId(991), PlanetId(99), "lost")];
        let forest = assemble(vec![system(1)], planets, moons);
        assert_eq!(forest.len(), 1);
        assert!(forest[0].planets.is_empty());
    }
}
