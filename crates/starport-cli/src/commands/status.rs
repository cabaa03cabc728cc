//! Status command handler.

use anyhow::Result;

use starport_lib::GalaxyMap;

use super::ShipConfig;

/// Print a freshly commissioned ship and where it is docked.
pub fn handle_status(config: &ShipConfig, galaxy: GalaxyMap) -> Result<()> {
    let ship = config.build(galaxy)?;
    println!("{ship}");
    println!("Docked at {}", ship.navigation_room().current_port());
    Ok(())
}
