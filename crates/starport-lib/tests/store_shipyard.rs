mod common;

use starport_lib::error::Error;
use starport_lib::resources::{FuelGrade, ResourceKind, Supply};
use starport_lib::ship::spaceship::{NOT_AT_SHIPYARD, NOT_AT_STORE};
use starport_lib::ship::{Damageable, RoomKind, RoomTier};
use starport_lib::ShipCommand;

use common::{basic_ship, run};

fn store_total(ship: &starport_lib::Ship, supply: Supply) -> i32 {
    ship.navigation_room()
        .store()
        .expect("docked at a store")
        .total(supply)
}

#[test]
fn purchase_moves_stock_from_store_to_ship() {
    let mut ship = basic_ship();
    run(&mut ship, "fly to Market");
    let ship_before = ship.cargo_hold().total_fuel_by_grade(FuelGrade::Tritium);
    let store_before = store_total(&ship, Supply::Fuel(FuelGrade::Tritium));

    run(&mut ship, "buy TRITIUM 120");

    assert_eq!(
        ship.cargo_hold().total_fuel_by_grade(FuelGrade::Tritium),
        ship_before + 120
    );
    assert_eq!(
        store_total(&ship, Supply::Fuel(FuelGrade::Tritium)),
        store_before - 120
    );
}

#[test]
fn item_names_are_case_insensitive() {
    let mut ship = basic_ship();
    run(&mut ship, "fly Market");
    run(&mut ship, "buy repair_kit 2");
    assert_eq!(ship.cargo_hold().total_amount_by_type(ResourceKind::RepairKit), 7);
}

#[test]
fn store_stock_persists_between_visits() {
    let mut ship = basic_ship();
    run(&mut ship, "fly Market");
    run(&mut ship, "buy TRITIUM 100");
    run(&mut ship, "buy REPAIR_KIT 4");
    run(&mut ship, "fly Home");
    run(&mut ship, "fly Market");

    assert_eq!(store_total(&ship, Supply::RepairKit), 6);
}

#[test]
fn overdrawing_the_store_changes_nothing() {
    let mut ship = basic_ship();
    run(&mut ship, "fly Market");
    let hold_before = ship.cargo_hold().clone();

    let err = ship
        .process_command(&"buy REPAIR_KIT 11".parse().unwrap())
        .expect_err("store holds 10");

    assert!(matches!(err, Error::InsufficientResources { .. }));
    assert_eq!(ship.cargo_hold(), &hold_before);
    assert_eq!(store_total(&ship, Supply::RepairKit), 10);
}

#[test]
fn unknown_items_do_not_exist() {
    let mut ship = basic_ship();
    run(&mut ship, "fly Market");

    let report = ship.perform_command(&"buy PLASMA 1".parse().unwrap());
    assert!(report.contains("The specified resource does not exist: PLASMA"));
}

#[test]
fn full_hold_refuses_purchase_before_charging_the_store() {
    let mut ship = basic_ship();
    run(&mut ship, "fly Market");
    run(&mut ship, "buy TRITIUM 1");
    run(&mut ship, "buy TRITIUM 1");
    assert_eq!(ship.cargo_hold().remaining_capacity(), 0);

    let err = ship
        .process_command(&"buy TRITIUM 1".parse().unwrap())
        .expect_err("hold is full");

    assert!(matches!(err, Error::InsufficientCapacity { capacity: 5 }));
    assert_eq!(store_total(&ship, Supply::Fuel(FuelGrade::Tritium)), 998);
}

#[test]
fn purchases_require_a_store() {
    let mut ship = basic_ship();
    let output = ship
        .process_command(&"buy TRITIUM 1".parse().unwrap())
        .unwrap();
    assert_eq!(output, NOT_AT_STORE);
}

#[test]
fn upgrades_require_a_shipyard() {
    let mut ship = basic_ship();
    let output = ship
        .process_command(&ShipCommand::UpgradeRoom("CargoHold".to_string()))
        .unwrap();
    assert_eq!(output, NOT_AT_SHIPYARD);
    assert_eq!(ship.cargo_hold().tier(), RoomTier::Basic);
}

#[test]
fn shipyard_check_comes_before_room_name() {
    let mut ship = basic_ship();
    let output = ship
        .process_command(&"upgrade Bridge".parse().unwrap())
        .expect("reported as text");
    assert_eq!(output, NOT_AT_SHIPYARD);

    run(&mut ship, "jump Drydock");
    let err = ship
        .process_command(&"upgrade Bridge".parse().unwrap())
        .expect_err("unknown room at a shipyard");
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn shipyard_upgrades_allowed_rooms_and_restores_health() {
    let mut ship = basic_ship();
    run(&mut ship, "jump Drydock");
    assert_eq!(ship.cargo_hold().health(), 85);

    run(&mut ship, "upgrade CargoHold");

    assert_eq!(ship.cargo_hold().tier(), RoomTier::Average);
    assert_eq!(ship.cargo_hold().health(), 100);
    assert_eq!(ship.cargo_hold().maximum_capacity(), 5);
}

#[test]
fn shipyard_refuses_rooms_off_its_list() {
    let mut ship = basic_ship();
    run(&mut ship, "jump Drydock");
    let before = ship.room(RoomKind::NavigationRoom).clone();

    let err = ship
        .process_command(&"upgrade NavigationRoom".parse().unwrap())
        .expect_err("Drydock only works on cargo holds");

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(ship.room(RoomKind::NavigationRoom), &before);
}

#[test]
fn upgrading_at_prime_keeps_tier() {
    let mut ship = common::ship_with_tiers(RoomTier::Prime, RoomTier::Basic);
    run(&mut ship, "jump Drydock");

    run(&mut ship, "upgrade CargoHold");

    assert_eq!(ship.cargo_hold().tier(), RoomTier::Prime);
    assert_eq!(ship.cargo_hold().health(), 100);
}
