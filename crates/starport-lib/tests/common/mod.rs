//! Shared fixtures for the integration tests.
//!
//! `docs/fixtures/galaxy.csv` lays ports out around `Home` at known distances:
//! Beacon 8, Market 50, Drydock 120, Outpost 250 and Frontier 800.

use std::path::PathBuf;

use starport_lib::resources::{ResourceContainer, ResourceKind};
use starport_lib::ship::{RoomTier, Ship};
use starport_lib::{GalaxyMap, ShipCommand};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// The fixture galaxy map.
pub fn fixture_galaxy() -> GalaxyMap {
    let path = fixtures_dir().join("galaxy.csv");
    GalaxyMap::from_path(&path).expect("load fixture galaxy.csv")
}

/// A ship with BASIC rooms docked at `Home`.
#[allow(dead_code)]
pub fn basic_ship() -> Ship {
    ship_with_tiers(RoomTier::Basic, RoomTier::Basic)
}

#[allow(dead_code)]
pub fn ship_with_tiers(cargo: RoomTier, navigation: RoomTier) -> Ship {
    Ship::new(
        "Nomad",
        "Ada",
        "NX-01",
        cargo,
        navigation,
        fixture_galaxy().into_ports(),
    )
    .expect("fixture galaxy is not empty")
}

/// Run a textual command, panicking on parse or execution errors.
#[allow(dead_code)]
pub fn run(ship: &mut Ship, line: &str) -> String {
    let command: ShipCommand = line.parse().expect("command parses");
    ship.process_command(&command)
        .unwrap_or_else(|err| panic!("`{line}` failed: {err}"))
}

#[allow(dead_code)]
pub fn kit(amount: i32) -> ResourceContainer {
    ResourceContainer::new(ResourceKind::RepairKit, amount).expect("repair kit container")
}
