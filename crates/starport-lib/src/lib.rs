//! Starport library entry points.
//!
//! This crate models a spaceship moving between ports on a galaxy map: rooms that
//! wear down with every trip, a cargo hold of resource containers, stores that sell
//! supplies and shipyards that upgrade rooms. Front ends (the CLI) should drive a
//! [`Ship`] through [`ShipCommand`]s instead of reimplementing its rules.

#![deny(warnings)]

pub mod command;
pub mod error;
pub mod galaxy;
pub mod ports;
pub mod resources;
pub mod ship;

pub use command::ShipCommand;
pub use error::{Error, Result};
pub use galaxy::GalaxyMap;
pub use ports::{PortKind, Position, Shipyard, SpacePort, Store};
pub use resources::{ContainerVariant, FuelGrade, ResourceContainer, ResourceKind, Supply};
pub use ship::{
    CargoHold, DamageStatus, Damageable, NavigationRoom, Room, RoomKind, RoomTier, Ship,
    TravelMode,
};
