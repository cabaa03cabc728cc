// Handlers for the CLI subcommands.
//
// main.rs parses arguments and dispatches here; each module owns one subcommand.

pub mod galaxy;
pub mod play;
pub mod ports;
pub mod status;

use anyhow::{Context, Result};

use starport_lib::ship::RoomTier;
use starport_lib::{GalaxyMap, Ship};

/// Identity and room tiers for the ship a session starts with.
#[derive(Debug, Clone)]
pub struct ShipConfig {
    pub name: String,
    pub owner: String,
    pub id: String,
    pub cargo_tier: RoomTier,
    pub nav_tier: RoomTier,
}

impl ShipConfig {
    /// Build the ship docked at the first port of `galaxy`.
    pub fn build(&self, galaxy: GalaxyMap) -> Result<Ship> {
        Ship::new(
            self.name.clone(),
            self.owner.clone(),
            self.id.clone(),
            self.cargo_tier,
            self.nav_tier,
            galaxy.into_ports(),
        )
        .context("failed to commission ship")
    }
}
