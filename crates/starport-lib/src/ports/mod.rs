//! Locations on the galaxy map.
//!
//! - [`Position`] - integer 3-D coordinates and truncated distance
//! - [`SpacePort`] - named port tagged with a [`PortKind`]
//! - [`Store`] - sells supplies out of its own cargo hold
//! - [`Shipyard`] - upgrades allow-listed rooms

pub mod position;
pub mod shipyard;
pub mod space_port;
pub mod store;

pub use position::Position;
pub use shipyard::Shipyard;
pub use space_port::{PortKind, SpacePort};
pub use store::Store;
