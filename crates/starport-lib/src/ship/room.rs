//! Room tiers, room kinds, and the tiered [`Room`] state machine.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};

use super::damage::{DamageStatus, Damageable, DAMAGE_RATE, HEALTH_MULTIPLIER};

/// Quality level of a room. Tiers only ever move upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum RoomTier {
    #[default]
    Basic,
    Average,
    Prime,
}

impl RoomTier {
    pub const ALL: [RoomTier; 3] = [RoomTier::Basic, RoomTier::Average, RoomTier::Prime];

    pub fn as_str(self) -> &'static str {
        match self {
            RoomTier::Basic => "BASIC",
            RoomTier::Average => "AVERAGE",
            RoomTier::Prime => "PRIME",
        }
    }

    /// Scales [`HEALTH_MULTIPLIER`] into the room's maximum health.
    pub fn health_multiplier(self) -> i32 {
        match self {
            RoomTier::Basic => 20,
            RoomTier::Average => 30,
            RoomTier::Prime => 40,
        }
    }

    /// Scales [`DAMAGE_RATE`] into the room's damage per tick.
    pub fn damage_multiplier(self) -> i32 {
        match self {
            RoomTier::Basic => 3,
            RoomTier::Average => 2,
            RoomTier::Prime => 1,
        }
    }

    /// Number of containers a cargo hold built at this tier can store.
    pub fn cargo_capacity(self) -> usize {
        match self {
            RoomTier::Basic => 5,
            RoomTier::Average => 10,
            RoomTier::Prime => 15,
        }
    }

    /// Farthest distance a navigation room of this tier can fly.
    pub fn fly_distance(self) -> i32 {
        match self {
            RoomTier::Basic => 200,
            RoomTier::Average => 400,
            RoomTier::Prime => 600,
        }
    }

    /// Farthest distance a navigation room of this tier can jump.
    pub fn jump_distance(self) -> i32 {
        match self {
            RoomTier::Basic => 500,
            RoomTier::Average => 750,
            RoomTier::Prime => 1000,
        }
    }

    /// The tier an upgrade moves to. PRIME stays PRIME.
    pub fn next(self) -> Self {
        match self {
            RoomTier::Basic => RoomTier::Average,
            RoomTier::Average | RoomTier::Prime => RoomTier::Prime,
        }
    }
}

impl fmt::Display for RoomTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        RoomTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::invalid(format!("unknown room tier: {value}")))
    }
}

/// The two kinds of room a ship carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKind {
    CargoHold,
    NavigationRoom,
}

impl RoomKind {
    pub const ALL: [RoomKind; 2] = [RoomKind::CargoHold, RoomKind::NavigationRoom];

    pub fn as_str(self) -> &'static str {
        match self {
            RoomKind::CargoHold => "CargoHold",
            RoomKind::NavigationRoom => "NavigationRoom",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        RoomKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::invalid(format!("unknown room: {value}")))
    }
}

/// A tiered, damageable ship component.
///
/// Damage rate and maximum health are derived from the tier whenever the tier changes
/// or health is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    tier: RoomTier,
    damage_rate: i32,
    max_health: i32,
    health: i32,
}

impl Room {
    pub fn new(tier: RoomTier) -> Self {
        let max_health = HEALTH_MULTIPLIER * tier.health_multiplier();
        Self {
            tier,
            damage_rate: DAMAGE_RATE * tier.damage_multiplier(),
            max_health,
            health: max_health,
        }
    }

    pub fn tier(&self) -> RoomTier {
        self.tier
    }

    pub fn damage_rate(&self) -> i32 {
        self.damage_rate
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Raw health points, not the percentage.
    pub fn health_points(&self) -> i32 {
        self.health
    }

    /// Move to the next tier and fully restore health.
    ///
    /// At PRIME the tier is unchanged but health is still restored.
    pub fn upgrade(&mut self) {
        let previous = self.tier;
        self.tier = self.tier.next();
        self.set_damage_rate(DAMAGE_RATE * self.tier.damage_multiplier());
        self.reset_health();
        debug!(from = %previous, to = %self.tier, "room upgraded");
    }

    /// Write `ROOM: <name>(<TIER>) health: N%, needs repair: bool`.
    pub(crate) fn write_summary(&self, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
        write!(
            f,
            "ROOM: {}({}) health: {}%, needs repair: {}",
            name,
            self.tier,
            self.health(),
            self.needs_repair()
        )
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new(RoomTier::Basic)
    }
}

impl Damageable for Room {
    fn health(&self) -> i32 {
        self.health * 100 / self.max_health
    }

    fn damage(&mut self) {
        self.health -= self.damage_rate;
    }

    fn reset_health(&mut self) {
        self.max_health = HEALTH_MULTIPLIER * self.tier.health_multiplier();
        self.health = self.max_health;
    }

    fn set_damage_rate(&mut self, rate: i32) {
        self.damage_rate = rate;
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_summary(f, "Room")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rooms_start_at_full_health() {
        for tier in RoomTier::ALL {
            let room = Room::new(tier);
            assert_eq!(room.health(), 100, "{tier} should start at 100%");
            assert!(!room.needs_repair());
        }
    }

    #[test]
    fn higher_tiers_are_sturdier() {
        let basic = Room::new(RoomTier::Basic);
        let prime = Room::new(RoomTier::Prime);
        assert!(prime.max_health() > basic.max_health());
        assert!(prime.damage_rate() < basic.damage_rate());
    }

    #[test]
    fn upgrade_walks_tiers_and_stops_at_prime() {
        let mut room = Room::new(RoomTier::Basic);
        room.upgrade();
        assert_eq!(room.tier(), RoomTier::Average);
        room.upgrade();
        assert_eq!(room.tier(), RoomTier::Prime);
        room.upgrade();
        assert_eq!(room.tier(), RoomTier::Prime);
    }

    #[test]
    fn upgrade_at_prime_still_restores_health() {
        let mut room = Room::new(RoomTier::Prime);
        room.damage();
        assert!(room.health() < 100);
        room.upgrade();
        assert_eq!(room.health(), 100);
        assert_eq!(room.damage_rate(), DAMAGE_RATE * RoomTier::Prime.damage_multiplier());
    }

    #[test]
    fn health_percentage_goes_negative() {
        let mut room = Room::new(RoomTier::Basic);
        room.set_damage_rate(150);
        room.damage();
        assert_eq!(room.health(), -50);
        assert!(room.is_broken());
    }

    #[test]
    fn tier_and_kind_parse_case_insensitively() {
        assert_eq!("prime".parse::<RoomTier>().unwrap(), RoomTier::Prime);
        assert_eq!(
            "navigationroom".parse::<RoomKind>().unwrap(),
            RoomKind::NavigationRoom
        );
        assert!("Bridge".parse::<RoomKind>().is_err());
    }

    #[test]
    fn display_matches_room_format() {
        let room = Room::new(RoomTier::Average);
        assert_eq!(
            room.to_string(),
            "ROOM: Room(AVERAGE) health: 100%, needs repair: false"
        );
    }
}
