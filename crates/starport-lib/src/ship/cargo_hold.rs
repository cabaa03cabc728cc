//! Cargo hold: an ordered, slot-limited collection of resource containers.
//!
//! Containers are kept oldest first. Consumption drains matching containers in
//! that order and drops each one once it is empty.

use std::fmt;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::resources::{FuelGrade, ResourceContainer, ResourceKind, Supply};

use super::damage::Damageable;
use super::room::{Room, RoomKind, RoomTier};

/// Repair kits spent per room repair.
pub const REPAIR_COST: i32 = 1;

/// A room that stores resource containers.
///
/// Capacity counts containers, not resource units. It is fixed by the tier the hold
/// is built with and does not change when the room is upgraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoHold {
    room: Room,
    capacity: usize,
    resources: Vec<ResourceContainer>,
}

impl CargoHold {
    pub fn new(tier: RoomTier) -> Self {
        Self {
            room: Room::new(tier),
            capacity: tier.cargo_capacity(),
            resources: Vec::new(),
        }
    }

    /// A hold that starts out holding `resources`, oldest first.
    ///
    /// Only for initial stock that is known to fit; extra containers are dropped.
    pub(crate) fn preloaded(tier: RoomTier, mut resources: Vec<ResourceContainer>) -> Self {
        let capacity = tier.cargo_capacity();
        resources.truncate(capacity);
        Self {
            room: Room::new(tier),
            capacity,
            resources,
        }
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

    pub fn maximum_capacity(&self) -> usize {
        self.capacity
    }

    /// Free container slots.
    pub fn remaining_capacity(&self) -> usize {
        self.maximum_capacity().saturating_sub(self.resources.len())
    }

    /// Stored containers, oldest first.
    pub fn resources(&self) -> &[ResourceContainer] {
        &self.resources
    }

    /// Append a container as the newest entry.
    ///
    /// # Errors
    /// Returns [`Error::InsufficientCapacity`] when every slot is taken; the hold is
    /// left unchanged.
    pub fn store_resource(&mut self, container: ResourceContainer) -> Result<()> {
        if self.remaining_capacity() == 0 {
            warn!(
                capacity = self.maximum_capacity(),
                item = container.short_name(),
                "cargo hold full"
            );
            return Err(Error::InsufficientCapacity {
                capacity: self.maximum_capacity(),
            });
        }
        debug!(item = container.short_name(), amount = container.amount(), "stored container");
        self.resources.push(container);
        Ok(())
    }

    pub fn resources_by_type(&self, kind: ResourceKind) -> Vec<&ResourceContainer> {
        self.resources.iter().filter(|c| c.kind() == kind).collect()
    }

    pub fn resources_by_grade(&self, grade: FuelGrade) -> Vec<&ResourceContainer> {
        self.resources
            .iter()
            .filter(|c| c.fuel_grade() == Some(grade))
            .collect()
    }

    pub fn total_amount_by_type(&self, kind: ResourceKind) -> i32 {
        self.resources
            .iter()
            .filter(|c| c.kind() == kind)
            .map(ResourceContainer::amount)
            .sum()
    }

    pub fn total_fuel_by_grade(&self, grade: FuelGrade) -> i32 {
        self.resources
            .iter()
            .filter(|c| c.fuel_grade() == Some(grade))
            .map(ResourceContainer::amount)
            .sum()
    }

    pub fn total_supply(&self, supply: Supply) -> i32 {
        match supply {
            Supply::RepairKit => self.total_amount_by_type(ResourceKind::RepairKit),
            Supply::Fuel(grade) => self.total_fuel_by_grade(grade),
        }
    }

    /// Consume a non-fuel resource, oldest containers first.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `amount` is not positive, or `kind` is fuel
    ///   (fuel must go through [`CargoHold::consume_fuel`]).
    /// - [`Error::InsufficientResources`] if the hold holds less than `amount`.
    pub fn consume_resource(&mut self, kind: ResourceKind, amount: i32) -> Result<()> {
        ensure_positive(amount)?;
        let available = self.total_amount_by_type(kind);
        if amount > available {
            return Err(shortfall(kind.as_str(), amount, available));
        }
        match kind {
            ResourceKind::Fuel => Err(Error::invalid(
                "fuel must be consumed by grade, not by resource type",
            )),
            ResourceKind::RepairKit => {
                self.drain(Supply::RepairKit, amount);
                Ok(())
            }
        }
    }

    /// Consume fuel of one grade, oldest containers first.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `amount` is not positive.
    /// - [`Error::InsufficientResources`] if the hold holds less than `amount`.
    pub fn consume_fuel(&mut self, grade: FuelGrade, amount: i32) -> Result<()> {
        self.consume_supply(Supply::Fuel(grade), amount)
    }

    /// Consume `amount` of `supply`, validating before anything is removed.
    pub fn consume_supply(&mut self, supply: Supply, amount: i32) -> Result<()> {
        ensure_positive(amount)?;
        let available = self.total_supply(supply);
        if amount > available {
            return Err(shortfall(supply.as_str(), amount, available));
        }
        self.drain(supply, amount);
        Ok(())
    }

    /// Rebuild the container list with `amount` of `supply` taken out.
    ///
    /// The caller has already checked that enough is available.
    fn drain(&mut self, supply: Supply, amount: i32) {
        let mut outstanding = amount;
        self.resources = std::mem::take(&mut self.resources)
            .into_iter()
            .filter_map(|mut container| {
                if outstanding == 0 || !supply.matches(&container) {
                    return Some(container);
                }
                if container.amount() > outstanding {
                    container.set_amount(container.amount() - outstanding);
                    outstanding = 0;
                    Some(container)
                } else {
                    outstanding -= container.amount();
                    None
                }
            })
            .collect();
        debug!(item = supply.as_str(), amount, "consumed from cargo hold");
    }

    /// Actions this hold offers: one repair per room kind while repair kits remain.
    pub fn actions(&self) -> Vec<String> {
        if self.resources_by_type(ResourceKind::RepairKit).is_empty() {
            return Vec::new();
        }
        [RoomKind::NavigationRoom, RoomKind::CargoHold]
            .into_iter()
            .map(|kind| format!("repair {kind} [COST: {REPAIR_COST} REPAIR_KIT]"))
            .collect()
    }
}

fn ensure_positive(amount: i32) -> Result<()> {
    if amount <= 0 {
        return Err(Error::invalid(format!(
            "amount to consume must be positive, got {amount}"
        )));
    }
    Ok(())
}

fn shortfall(item: &str, required: i32, available: i32) -> Error {
    Error::insufficient(format!("need {required} {item}, have {available}"))
}

impl Damageable for CargoHold {
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

impl fmt::Display for CargoHold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.room.write_summary(f, RoomKind::CargoHold.as_str())?;
        write!(
            f,
            ", capacity: {}, items: {}",
            self.maximum_capacity(),
            self.resources.len()
        )?;

        if !self.resources_by_type(ResourceKind::RepairKit).is_empty() {
            write!(
                f,
                "\n    REPAIR_KIT: {}",
                self.total_amount_by_type(ResourceKind::RepairKit)
            )?;
        }
        for grade in [FuelGrade::Tritium, FuelGrade::HyperdriveCore] {
            if !self.resources_by_grade(grade).is_empty() {
                write!(f, "\n    FUEL: {} - {}", self.total_fuel_by_grade(grade), grade)?;
            }
        }
        Ok(())
    }
}
