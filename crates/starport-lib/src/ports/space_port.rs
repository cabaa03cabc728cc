use std::fmt;

use super::position::Position;
use super::shipyard::Shipyard;
use super::store::Store;

/// What a port offers beyond docking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortKind {
    Generic,
    Store(Store),
    Shipyard(Shipyard),
}

/// A named location on the galaxy map.
///
/// Name and position never change; only a store's stock mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacePort {
    name: String,
    position: Position,
    kind: PortKind,
}

impl SpacePort {
    /// A port with no services.
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self::with_kind(name, position, PortKind::Generic)
    }

    /// A port with a freshly stocked store.
    pub fn store(name: impl Into<String>, position: Position) -> Self {
        Self::with_kind(name, position, PortKind::Store(Store::new()))
    }

    /// A port with a shipyard.
    pub fn shipyard(name: impl Into<String>, position: Position, shipyard: Shipyard) -> Self {
        Self::with_kind(name, position, PortKind::Shipyard(shipyard))
    }

    pub fn with_kind(name: impl Into<String>, position: Position, kind: PortKind) -> Self {
        Self {
            name: name.into(),
            position,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn kind(&self) -> &PortKind {
        &self.kind
    }

    /// Name used when the port is printed.
    pub fn class_name(&self) -> &'static str {
        match self.kind {
            PortKind::Generic => "SpacePort",
            PortKind::Store(_) => "Store",
            PortKind::Shipyard(_) => "ShipYard",
        }
    }

    pub fn as_store(&self) -> Option<&Store> {
        match &self.kind {
            PortKind::Store(store) => Some(store),
            _ => None,
        }
    }

    pub fn as_store_mut(&mut self) -> Option<&mut Store> {
        match &mut self.kind {
            PortKind::Store(store) => Some(store),
            _ => None,
        }
    }

    pub fn as_shipyard(&self) -> Option<&Shipyard> {
        match &self.kind {
            PortKind::Shipyard(shipyard) => Some(shipyard),
            _ => None,
        }
    }

    pub fn distance_to(&self, other: &SpacePort) -> i32 {
        self.position.distance_to(&other.position)
    }

    /// Services offered while docked here.
    pub fn actions(&self) -> Vec<String> {
        match &self.kind {
            PortKind::Generic => Vec::new(),
            PortKind::Store(store) => store.actions(),
            PortKind::Shipyard(shipyard) => shipyard.actions(),
        }
    }
}

impl fmt::Display for SpacePort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PORT: \"{}\" {} at {}",
            self.name,
            self.class_name(),
            self.position
        )
    }
}
