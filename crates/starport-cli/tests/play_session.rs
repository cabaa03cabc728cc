use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn fixture_galaxy() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/galaxy.csv")
        .canonicalize()
        .expect("galaxy fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("starport-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("STARPORT_GALAXY_MAP")
        .arg("--no-color")
        .arg("--map")
        .arg(fixture_galaxy());
    cmd
}

#[test]
fn play_is_the_default_subcommand() {
    cli()
        .write_stdin("status\nexit\n")
        .assert()
        .success()
        .stdout(contains("Welcome aboard Nomad."))
        .stdout(contains("PORT: \"Home\" SpacePort at (0, 0, 0)"))
        .stdout(contains("SHIP: Nomad (SP-001) owned by Captain"))
        .stdout(contains("Safe travels, Captain."));
}

#[test]
fn trading_round_trip_updates_the_hold() {
    cli()
        .arg("play")
        .write_stdin("fly to Market\nbuy TRITIUM 50\nshow CargoHold\nport\n")
        .assert()
        .success()
        .stdout(contains(
            "ROOM: CargoHold(BASIC) health: 85%, needs repair: false, capacity: 5, items: 4",
        ))
        .stdout(contains("FUEL: 100 - TRITIUM"))
        .stdout(contains("buy TRITIUM 1..950"));
}

#[test]
fn failures_are_reported_and_the_session_continues() {
    cli()
        .write_stdin("fly Outpost\nfly Markt\nwarp home\nbuy TRITIUM 5\nactions\n")
        .assert()
        .success()
        .stdout(contains("no path to \"Outpost\": distance 250 exceeds maximum fly distance 200"))
        .stdout(contains("Did you mean 'Market'?"))
        .stdout(contains("unknown command: warp (type `help` for commands)"))
        .stdout(contains("Can only purchase items at a Store."))
        .stdout(contains("jump to \"Outpost\" [COST: 1 HYPERDRIVE CORE]"));
}

#[test]
fn broken_rooms_use_the_insufficient_resources_report() {
    let trips = "fly Beacon\nfly Home\n".repeat(4);
    cli()
        .write_stdin(format!("{trips}show NavigationRoom\n"))
        .assert()
        .success()
        .stdout(contains(
            "Unable to perform action due to broken component or insufficient resources.\n\
             insufficient resources: NavigationRoom is broken",
        ))
        .stdout(contains(
            "ROOM: NavigationRoom(BASIC) health: -5%, needs repair: true",
        ));
}

#[test]
fn upgrades_need_a_shipyard() {
    cli()
        .args(["--cargo-tier", "average"])
        .write_stdin("upgrade CargoHold\njump Drydock\nupgrade CargoHold\nship\n")
        .assert()
        .success()
        .stdout(contains("Can only upgrade when docked at a ShipYard."))
        .stdout(contains("ROOM: CargoHold(PRIME) health: 100%"));
}

#[test]
fn help_lists_commands() {
    cli()
        .write_stdin("help\nquit\n")
        .assert()
        .success()
        .stdout(contains("buy <ITEM> <amount>"))
        .stdout(contains("exit | quit"));
}

#[test]
fn no_color_output_has_no_escape_codes() {
    cli()
        .write_stdin("warp\n")
        .assert()
        .success()
        .stdout(contains("\x1b[").not());
}
