//! The ship: one cargo hold, one navigation room, and command dispatch.

use std::fmt;

use tracing::{debug, warn};

use crate::command::ShipCommand;
use crate::error::{Error, Result};
use crate::ports::SpacePort;
use crate::resources::{FuelGrade, ResourceContainer, ResourceKind};

use super::cargo_hold::{CargoHold, REPAIR_COST};
use super::damage::Damageable;
use super::navigation::NavigationRoom;
use super::room::{Room, RoomKind, RoomTier};

/// Repair kits a new ship carries.
pub const STARTING_REPAIR_KITS: i32 = 5;
/// TRITIUM a new ship carries.
pub const STARTING_TRITIUM: i32 = 100;
/// HYPERDRIVE_CORE units a new ship carries.
pub const STARTING_HYPERDRIVE_CORES: i32 = 5;

/// Reply when upgrading away from a shipyard.
pub const NOT_AT_SHIPYARD: &str = "Can only upgrade when docked at a ShipYard.";
/// Reply when purchasing away from a store.
pub const NOT_AT_STORE: &str = "Can only purchase items at a Store.";
/// First line of the report for [`Error::InsufficientResources`].
pub const INSUFFICIENT_RESOURCES_REPORT: &str =
    "Unable to perform action due to broken component or insufficient resources.";

/// A spaceship with a fixed identity and its two rooms.
#[derive(Debug, Clone)]
pub struct Ship {
    name: String,
    owner: String,
    id: String,
    cargo_hold: CargoHold,
    navigation_room: NavigationRoom,
}

impl Ship {
    /// Build a ship docked at the first port of `galaxy_map`, stocked with
    /// repair kits, TRITIUM and HYPERDRIVE_CORE.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `galaxy_map` is empty.
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        id: impl Into<String>,
        cargo_hold_tier: RoomTier,
        navigation_room_tier: RoomTier,
        galaxy_map: Vec<SpacePort>,
    ) -> Result<Self> {
        let starting_stock = vec![
            ResourceContainer::new(ResourceKind::RepairKit, STARTING_REPAIR_KITS)?,
            ResourceContainer::fuel(FuelGrade::Tritium, STARTING_TRITIUM),
            ResourceContainer::fuel(FuelGrade::HyperdriveCore, STARTING_HYPERDRIVE_CORES),
        ];

        Ok(Self {
            name: name.into(),
            owner: owner.into(),
            id: id.into(),
            cargo_hold: CargoHold::preloaded(cargo_hold_tier, starting_stock),
            navigation_room: NavigationRoom::new(navigation_room_tier, galaxy_map)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cargo_hold(&self) -> &CargoHold {
        &self.cargo_hold
    }

    pub fn cargo_hold_mut(&mut self) -> &mut CargoHold {
        &mut self.cargo_hold
    }

    pub fn navigation_room(&self) -> &NavigationRoom {
        &self.navigation_room
    }

    pub fn navigation_room_mut(&mut self) -> &mut NavigationRoom {
        &mut self.navigation_room
    }

    pub fn room(&self, kind: RoomKind) -> &Room {
        match kind {
            RoomKind::CargoHold => self.cargo_hold.room(),
            RoomKind::NavigationRoom => self.navigation_room.room(),
        }
    }

    pub fn room_mut(&mut self, kind: RoomKind) -> &mut Room {
        match kind {
            RoomKind::CargoHold => self.cargo_hold.room_mut(),
            RoomKind::NavigationRoom => self.navigation_room.room_mut(),
        }
    }

    /// Full status line(s) of one room.
    pub fn room_summary(&self, kind: RoomKind) -> String {
        match kind {
            RoomKind::CargoHold => self.cargo_hold.to_string(),
            RoomKind::NavigationRoom => self.navigation_room.to_string(),
        }
    }

    /// Cargo hold actions followed by navigation actions.
    pub fn actions(&self) -> Vec<String> {
        let mut actions = self.cargo_hold.actions();
        actions.extend(self.navigation_room.actions());
        actions
    }

    /// Run `command` and render every outcome, success or failure, as text.
    pub fn perform_command(&mut self, command: &ShipCommand) -> String {
        self.process_command(command)
            .unwrap_or_else(|err| Self::failure_report(&err))
    }

    /// Text shown to the player for a failed command.
    pub fn failure_report(err: &Error) -> String {
        match err {
            Error::InsufficientResources { .. } => {
                format!("{INSUFFICIENT_RESOURCES_REPORT}\n{err}")
            }
            other => other.to_string(),
        }
    }

    /// Run `command`, returning its output (possibly empty).
    ///
    /// Every failure is checked before state changes, so a rejected command leaves the
    /// ship, and any store it is docked at, as it was.
    pub fn process_command(&mut self, command: &ShipCommand) -> Result<String> {
        debug!(%command, "processing command");
        match command {
            ShipCommand::ShowRoom(name) => Ok(self.room_summary(name.parse()?)),
            ShipCommand::FlyTo(port) => {
                self.navigation_room.fly_to(port, &mut self.cargo_hold)?;
                Ok(String::new())
            }
            ShipCommand::JumpTo(port) => {
                self.navigation_room.jump_to(port, &mut self.cargo_hold)?;
                Ok(String::new())
            }
            ShipCommand::RepairRoom(name) => {
                // A broken cargo hold can still hand out repair kits.
                let kind: RoomKind = name.parse()?;
                self.cargo_hold
                    .consume_resource(ResourceKind::RepairKit, REPAIR_COST)?;
                self.room_mut(kind).reset_health();
                Ok(String::new())
            }
            ShipCommand::UpgradeRoom(name) => {
                let Some(shipyard) = self.navigation_room.shipyard().cloned() else {
                    return Ok(NOT_AT_SHIPYARD.to_string());
                };
                let kind: RoomKind = name.parse()?;
                shipyard.upgrade(kind, self.room_mut(kind))?;
                Ok(String::new())
            }
            ShipCommand::PurchaseItem { item, amount } => self.purchase(item, *amount),
            ShipCommand::ShowPort => {
                let port = self.navigation_room.current_port();
                let mut lines = vec![port.to_string()];
                lines.extend(port.actions());
                Ok(lines.join("\n"))
            }
            ShipCommand::ShowActions => Ok(self.actions().join("\n")),
            ShipCommand::ShowShip => Ok(self.to_string()),
        }
    }

    fn purchase(&mut self, item: &str, amount: i32) -> Result<String> {
        if self.navigation_room.store().is_none() {
            return Ok(NOT_AT_STORE.to_string());
        }
        if self.cargo_hold.remaining_capacity() == 0 {
            warn!(item, amount, "purchase refused: cargo hold full");
            return Err(Error::InsufficientCapacity {
                capacity: self.cargo_hold.maximum_capacity(),
            });
        }
        let Some(store) = self.navigation_room.store_mut() else {
            return Ok(NOT_AT_STORE.to_string());
        };
        let container = store.purchase(item, amount)?;
        self.cargo_hold.store_resource(container)?;
        Ok(String::new())
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SHIP: {} ({}) owned by {}\n----\n{}\n{}",
            self.name, self.id, self.owner, self.cargo_hold, self.navigation_room
        )
    }
}
