//! Consumable resources and the containers that hold them.
//!
//! A [`ResourceContainer`] is either a general container (repair kits) or a fuel
//! container holding one [`FuelGrade`]. The variant decides which [`ResourceKind`] the
//! container may store; the check runs once, at construction.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Kind of consumable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    RepairKit,
    Fuel,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::RepairKit => "REPAIR_KIT",
            ResourceKind::Fuel => "FUEL",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade of fuel stored in a fuel container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelGrade {
    /// Burned one unit per unit of distance when flying.
    Tritium,
    /// One core is spent per jump.
    HyperdriveCore,
}

impl FuelGrade {
    pub fn as_str(self) -> &'static str {
        match self {
            FuelGrade::Tritium => "TRITIUM",
            FuelGrade::HyperdriveCore => "HYPERDRIVE_CORE",
        }
    }
}

impl fmt::Display for FuelGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something a store can sell: a non-fuel resource kind or a specific fuel grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Supply {
    RepairKit,
    Fuel(FuelGrade),
}

impl Supply {
    /// Every supply in the order stores stock them.
    pub const ALL: [Supply; 3] = [
        Supply::RepairKit,
        Supply::Fuel(FuelGrade::Tritium),
        Supply::Fuel(FuelGrade::HyperdriveCore),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Supply::RepairKit => ResourceKind::RepairKit.as_str(),
            Supply::Fuel(grade) => grade.as_str(),
        }
    }

    /// Whether `container` holds this supply.
    pub fn matches(self, container: &ResourceContainer) -> bool {
        match self {
            Supply::RepairKit => {
                container.kind() == ResourceKind::RepairKit && !container.is_fuel()
            }
            Supply::Fuel(grade) => container.fuel_grade() == Some(grade),
        }
    }

    /// Build a new container holding `amount` of this supply.
    pub fn container(self, amount: i32) -> ResourceContainer {
        match self {
            Supply::RepairKit => ResourceContainer {
                variant: ContainerVariant::General,
                kind: ResourceKind::RepairKit,
                amount,
            },
            Supply::Fuel(grade) => ResourceContainer::fuel(grade, amount),
        }
    }

    /// Largest amount a single fresh container of this supply holds.
    pub fn maximum_capacity(self) -> i32 {
        match self {
            Supply::RepairKit => ContainerVariant::General.maximum_capacity(),
            Supply::Fuel(grade) => ContainerVariant::Fuel(grade).maximum_capacity(),
        }
    }
}

impl fmt::Display for Supply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Supply {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let item = s.trim();
        Supply::ALL
            .into_iter()
            .find(|supply| supply.as_str().eq_ignore_ascii_case(item))
            .ok_or_else(|| Error::invalid(format!("unknown item: {item}")))
    }
}

/// Storage variant of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerVariant {
    General,
    Fuel(FuelGrade),
}

impl ContainerVariant {
    /// Whether this variant may hold resources of `kind`.
    pub fn can_store(self, kind: ResourceKind) -> bool {
        match self {
            ContainerVariant::General => kind != ResourceKind::Fuel,
            ContainerVariant::Fuel(_) => kind == ResourceKind::Fuel,
        }
    }

    pub fn maximum_capacity(self) -> i32 {
        match self {
            ContainerVariant::General => ResourceContainer::MAXIMUM_CAPACITY,
            ContainerVariant::Fuel(_) => ResourceContainer::FUEL_MAXIMUM_CAPACITY,
        }
    }
}

/// A quantity of one resource kind.
///
/// The amount is unconstrained: [`ResourceContainer::set_amount`] accepts
/// any value, including negatives and values above the maximum capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceContainer {
    variant: ContainerVariant,
    kind: ResourceKind,
    amount: i32,
}

impl ResourceContainer {
    /// Maximum amount held by a general container.
    pub const MAXIMUM_CAPACITY: i32 = 10;
    /// Maximum amount held by a fuel container.
    pub const FUEL_MAXIMUM_CAPACITY: i32 = 1000;

    /// Create a general container.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when `kind` is [`ResourceKind::Fuel`]; fuel
    /// must go through [`ResourceContainer::fuel`].
    pub fn new(kind: ResourceKind, amount: i32) -> Result<Self> {
        let variant = ContainerVariant::General;
        if !variant.can_store(kind) {
            return Err(Error::invalid(format!(
                "a general container cannot store {kind}"
            )));
        }
        Ok(Self {
            variant,
            kind,
            amount,
        })
    }

    /// Create a fuel container of the given grade.
    pub fn fuel(grade: FuelGrade, amount: i32) -> Self {
        Self {
            variant: ContainerVariant::Fuel(grade),
            kind: ResourceKind::Fuel,
            amount,
        }
    }

    pub fn can_store(&self, kind: ResourceKind) -> bool {
        self.variant.can_store(kind)
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn variant(&self) -> ContainerVariant {
        self.variant
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: i32) {
        self.amount = amount;
    }

    pub fn maximum_capacity(&self) -> i32 {
        self.variant.maximum_capacity()
    }

    pub fn is_fuel(&self) -> bool {
        matches!(self.variant, ContainerVariant::Fuel(_))
    }

    /// Fuel grade for fuel containers, `None` otherwise.
    pub fn fuel_grade(&self) -> Option<FuelGrade> {
        match self.variant {
            ContainerVariant::Fuel(grade) => Some(grade),
            ContainerVariant::General => None,
        }
    }

    /// Name of what this container holds: the grade for fuel, the kind otherwise.
    pub fn short_name(&self) -> &'static str {
        match self.variant {
            ContainerVariant::Fuel(grade) => grade.as_str(),
            ContainerVariant::General => self.kind.as_str(),
        }
    }
}

impl fmt::Display for ResourceContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            ContainerVariant::Fuel(grade) => {
                write!(f, "{}: {} - {}", self.kind, self.amount, grade)
            }
            ContainerVariant::General => write!(f, "{}: {}", self.kind, self.amount),
        }
    }
}
