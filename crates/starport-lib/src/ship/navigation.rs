//! Navigation room: tracks the ship's port and executes fly and jump travel.
//!
//! Flying burns one TRITIUM per unit of distance; jumping spends a single
//! HYPERDRIVE_CORE. Either way both the navigation room and the cargo hold take one
//! tick of damage.
//!
//! Advertised destinations are split into disjoint bands: ports up to the fly distance
//! are offered as flights, ports beyond it and up to the jump distance as jumps.
//! Eligibility checks are looser than advertising: a jump may target any port within
//! the jump distance, including ones close enough to fly to.

use std::cmp::Ordering;
use std::fmt;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::ports::{Shipyard, SpacePort, Store};
use crate::resources::FuelGrade;

use super::cargo_hold::CargoHold;
use super::damage::{DamageStatus, Damageable};
use super::room::{Room, RoomKind, RoomTier};

/// HYPERDRIVE_CORE units spent per jump.
pub const HYPERDRIVE_CORES_PER_JUMP: i32 = 1;

/// Maximum number of "did you mean" suggestions for an unknown port.
const MAX_PORT_SUGGESTIONS: usize = 3;

/// Minimum Jaro-Winkler similarity for a port name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// How the ship travels between ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Fly,
    Jump,
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TravelMode::Fly => "fly",
            TravelMode::Jump => "jump",
        })
    }
}

/// A room holding the galaxy map and the ship's place in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRoom {
    room: Room,
    galaxy_map: Vec<SpacePort>,
    current: usize,
}

impl NavigationRoom {
    /// Create a navigation room docked at the first port of `galaxy_map`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the map has no ports.
    pub fn new(tier: RoomTier, galaxy_map: Vec<SpacePort>) -> Result<Self> {
        if galaxy_map.is_empty() {
            return Err(Error::invalid("galaxy map must contain at least one port"));
        }
        Ok(Self {
            room: Room::new(tier),
            galaxy_map,
            current: 0,
        })
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn room_mut(&mut self) -> &mut Room {
        &mut self.room
    }

    pub fn tier(&self) -> RoomTier {
        self.room.tier()
    }

    pub fn galaxy_map(&self) -> &[SpacePort] {
        &self.galaxy_map
    }

    pub fn current_port(&self) -> &SpacePort {
        &self.galaxy_map[self.current]
    }

    pub fn maximum_fly_distance(&self) -> i32 {
        self.tier().fly_distance()
    }

    pub fn maximum_jump_distance(&self) -> i32 {
        self.tier().jump_distance()
    }

    /// TRITIUM needed to fly from the current port to `port`.
    pub fn fuel_needed(&self, port: &SpacePort) -> i32 {
        self.current_port().distance_to(port)
    }

    /// Other ports no farther than the fly distance, in map order.
    pub fn ports_in_fly_range(&self) -> Vec<&SpacePort> {
        let fly = self.maximum_fly_distance();
        self.other_ports()
            .filter(|(_, distance)| *distance <= fly)
            .map(|(port, _)| port)
            .collect()
    }

    /// Other ports beyond the fly distance but within the jump distance, in map order.
    pub fn ports_in_jump_range(&self) -> Vec<&SpacePort> {
        let fly = self.maximum_fly_distance();
        let jump = self.maximum_jump_distance();
        self.other_ports()
            .filter(|(_, distance)| *distance > fly && *distance <= jump)
            .map(|(port, _)| port)
            .collect()
    }

    fn other_ports(&self) -> impl Iterator<Item = (&SpacePort, i32)> + '_ {
        let current = self.current_port();
        self.galaxy_map
            .iter()
            .enumerate()
            .filter(move |(index, _)| *index != self.current)
            .map(move |(_, port)| (port, current.distance_to(port)))
    }

    /// Flight offers followed by jump offers.
    pub fn actions(&self) -> Vec<String> {
        let flights = self.ports_in_fly_range().into_iter().map(|port| {
            format!(
                "fly to \"{}\": {} [COST: {} TRITIUM FUEL]",
                port.name(),
                port,
                self.fuel_needed(port)
            )
        });
        let jumps = self
            .ports_in_jump_range()
            .into_iter()
            .map(|port| format!("jump to \"{}\" [COST: 1 HYPERDRIVE CORE]", port.name()));
        flights.chain(jumps).collect()
    }

    /// The current port's shipyard, if it has one.
    pub fn shipyard(&self) -> Option<&Shipyard> {
        self.current_port().as_shipyard()
    }

    /// The current port's store, if it has one.
    pub fn store(&self) -> Option<&Store> {
        self.current_port().as_store()
    }

    pub fn store_mut(&mut self) -> Option<&mut Store> {
        self.galaxy_map[self.current].as_store_mut()
    }

    /// Look up a port by its exact name.
    ///
    /// # Errors
    /// Returns [`Error::NoPath`] with close matches when no port has that name.
    pub fn port_by_name(&self, name: &str) -> Result<&SpacePort> {
        self.port_index(name).map(|index| &self.galaxy_map[index])
    }

    fn port_index(&self, name: &str) -> Result<usize> {
        self.galaxy_map
            .iter()
            .position(|port| port.name() == name)
            .ok_or_else(|| Error::unknown_port(name, &self.fuzzy_port_matches(name)))
    }

    /// Port names resembling `name`, best match first.
    pub fn fuzzy_port_matches(&self, name: &str) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .galaxy_map
            .iter()
            .map(|port| {
                let score = strsim::jaro_winkler(&needle, &port.name().to_lowercase());
                (score, port.name())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored
            .into_iter()
            .take(MAX_PORT_SUGGESTIONS)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Fly to `port_name`, burning TRITIUM from `cargo_hold`.
    ///
    /// # Errors
    /// - [`Error::InsufficientResources`] if either room is broken or TRITIUM runs short.
    /// - [`Error::NoPath`] if the port is unknown or beyond the fly distance.
    pub fn fly_to(&mut self, port_name: &str, cargo_hold: &mut CargoHold) -> Result<()> {
        self.travel(TravelMode::Fly, port_name, cargo_hold)
    }

    /// Jump to `port_name`, spending one HYPERDRIVE_CORE from `cargo_hold`.
    ///
    /// # Errors
    /// - [`Error::InsufficientResources`] if either room is broken or no core is left.
    /// - [`Error::NoPath`] if the port is unknown or beyond the jump distance.
    pub fn jump_to(&mut self, port_name: &str, cargo_hold: &mut CargoHold) -> Result<()> {
        self.travel(TravelMode::Jump, port_name, cargo_hold)
    }

    fn travel(
        &mut self,
        mode: TravelMode,
        port_name: &str,
        cargo_hold: &mut CargoHold,
    ) -> Result<()> {
        if let Some(broken) = broken_room(self, cargo_hold) {
            warn!(room = %broken, %mode, "travel refused: room broken");
            return Err(Error::insufficient(format!("{broken} is broken")));
        }

        let target = self.port_index(port_name)?;
        let distance = self.current_port().distance_to(&self.galaxy_map[target]);
        let limit = match mode {
            TravelMode::Fly => self.maximum_fly_distance(),
            TravelMode::Jump => self.maximum_jump_distance(),
        };
        if distance > limit {
            return Err(Error::NoPath {
                port: port_name.to_string(),
                reason: format!("distance {distance} exceeds maximum {mode} distance {limit}"),
            });
        }

        match mode {
            // Ports sharing a position cost nothing to reach.
            TravelMode::Fly if distance == 0 => {}
            TravelMode::Fly => cargo_hold.consume_fuel(FuelGrade::Tritium, distance)?,
            TravelMode::Jump => {
                cargo_hold.consume_fuel(FuelGrade::HyperdriveCore, HYPERDRIVE_CORES_PER_JUMP)?
            }
        }

        self.damage();
        cargo_hold.damage();
        info!(
            %mode,
            from = self.current_port().name(),
            to = port_name,
            distance,
            "ship moved"
        );
        self.current = target;
        Ok(())
    }
}

fn broken_room(navigation: &NavigationRoom, cargo_hold: &CargoHold) -> Option<RoomKind> {
    if navigation.is_broken() {
        Some(RoomKind::NavigationRoom)
    } else if cargo_hold.is_broken() {
        Some(RoomKind::CargoHold)
    } else {
        None
    }
}

impl Damageable for NavigationRoom {
    fn health(&self) -> i32 {
        self.room.health()
    }

    fn damage(&mut self) {
        self.room.damage();
    }

    fn reset_health(&mut self) {
        self.room.reset_health();
    }

    fn set_damage_rate(&mut self, rate: i32) {
        self.room.set_damage_rate(rate);
    }
}

impl fmt::Display for NavigationRoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.room.write_summary(f, RoomKind::NavigationRoom.as_str())
    }
}
