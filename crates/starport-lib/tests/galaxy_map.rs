mod common;

use std::fs;

use starport_lib::error::Error;
use starport_lib::ship::RoomKind;
use starport_lib::{GalaxyMap, PortKind};
use tempfile::tempdir;

use common::{fixture_galaxy, fixtures_dir};

#[test]
fn loads_fixture_galaxy_in_file_order() {
    let galaxy = fixture_galaxy();

    let names: Vec<&str> = galaxy.ports().iter().map(|port| port.name()).collect();
    assert_eq!(
        names,
        vec!["Home", "Beacon", "Market", "Drydock", "Outpost", "Frontier"]
    );
    assert_eq!(
        galaxy.source_path(),
        Some(fixtures_dir().join("galaxy.csv").as_path())
    );
}

#[test]
fn fixture_ports_carry_their_services() {
    let galaxy = fixture_galaxy();

    assert!(matches!(galaxy.get("Home").unwrap().kind(), PortKind::Generic));
    assert!(galaxy.get("Market").unwrap().as_store().is_some());

    let drydock = galaxy
        .get("Drydock")
        .and_then(|port| port.as_shipyard())
        .expect("Drydock is a shipyard");
    assert!(drydock.can_upgrade(RoomKind::CargoHold));
    assert!(!drydock.can_upgrade(RoomKind::NavigationRoom));
}

#[test]
fn whitespace_around_fields_is_ignored() {
    let csv = "name , kind , x , y , z , upgrades\n  Yard , shipyard , 1 , 2 , 3 , NavigationRoom ; CargoHold \n";
    let galaxy = GalaxyMap::from_reader(csv.as_bytes()).expect("trimmed fields parse");

    let yard = galaxy.get("Yard").and_then(|port| port.as_shipyard()).unwrap();
    assert_eq!(
        yard.upgradable(),
        &[RoomKind::NavigationRoom, RoomKind::CargoHold]
    );
}

#[test]
fn rejects_non_numeric_coordinates() {
    let csv = "name,kind,x,y,z,upgrades\nHome,SpacePort,zero,0,0,\n";
    let err = GalaxyMap::from_reader(csv.as_bytes()).expect_err("bad coordinate");
    match err {
        Error::MapDataValidation { message } => assert!(message.contains("row 2")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_blank_port_names() {
    let csv = "name,kind,x,y,z,upgrades\n ,SpacePort,0,0,0,\n";
    let err = GalaxyMap::from_reader(csv.as_bytes()).expect_err("blank name");
    assert!(matches!(err, Error::MapDataValidation { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("create temp dir");
    let err = GalaxyMap::from_path(&dir.path().join("missing.csv")).expect_err("no file");
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn duplicate_names_in_a_file_are_rejected() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("galaxy.csv");
    fs::write(
        &path,
        "name,kind,x,y,z,upgrades\nHome,SpacePort,0,0,0,\nHome,Store,10,0,0,\n",
    )
    .expect("write galaxy");

    let err = GalaxyMap::from_path(&path).expect_err("duplicate names");
    match err {
        Error::DuplicatePortName { name } => assert_eq!(name, "Home"),
        other => panic!("unexpected error: {:?}", other),
    }
}
