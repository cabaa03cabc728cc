//! Ship rooms, their damage model, and the ship that owns them.
//!
//! This module is organized into focused submodules:
//!
//! - [`damage`] - The [`Damageable`] contract and derived repair thresholds
//! - [`room`] - Room tiers, room kinds and the upgrade state machine
//! - [`cargo_hold`] - Slot-limited container storage with ordered consumption
//! - [`navigation`] - Galaxy position, travel ranges, fly and jump execution
//! - [`spaceship`] - The [`Ship`] aggregate and command dispatch
//!
//! # Example
//!
//! ```
//! use starport_lib::ports::{Position, SpacePort};
//! use starport_lib::ship::{RoomTier, Ship};
//! use starport_lib::ShipCommand;
//!
//! let galaxy = vec![
//!     SpacePort::new("Home", Position::new(0, 0, 0)),
//!     SpacePort::store("Market", Position::new(30, 40, 0)),
//! ];
//! let mut ship = Ship::new("Nomad", "Ada", "NX-1", RoomTier::Basic, RoomTier::Basic, galaxy)
//!     .unwrap();
//!
//! ship.process_command(&ShipCommand::FlyTo("Market".to_string())).unwrap();
//! assert_eq!(ship.navigation_room().current_port().name(), "Market");
//! ```

pub mod cargo_hold;
pub mod damage;
pub mod navigation;
pub mod room;
pub mod spaceship;

pub use cargo_hold::{CargoHold, REPAIR_COST};
pub use damage::{DamageStatus, Damageable, DAMAGE_RATE, HEALTH_MULTIPLIER, REPAIR_THRESHOLD};
pub use navigation::{NavigationRoom, TravelMode, HYPERDRIVE_CORES_PER_JUMP};
pub use room::{Room, RoomKind, RoomTier};
pub use spaceship::Ship;
