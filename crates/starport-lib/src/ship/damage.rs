//! Health and damage model shared by every ship room.

/// Base damage applied per tick, scaled by the room tier.
pub const DAMAGE_RATE: i32 = 5;
/// Base maximum health, scaled by the room tier.
pub const HEALTH_MULTIPLIER: i32 = 5;
/// Health percentage at or below which a room needs repair.
pub const REPAIR_THRESHOLD: i32 = 30;

/// An entity whose health can be worn down and restored.
pub trait Damageable {
    /// Current health as a percentage of the maximum, truncated toward zero.
    ///
    /// Health has no floor, so the percentage may be negative.
    fn health(&self) -> i32;

    /// Apply one tick of damage at the entity's current rate.
    fn damage(&mut self);

    /// Recompute the maximum health and restore health to it.
    fn reset_health(&mut self);

    /// Replace the damage rate. Callers must pass a non-negative rate.
    fn set_damage_rate(&mut self, rate: i32);
}

/// Thresholds derived from [`Damageable::health`].
///
/// Implemented for every [`Damageable`] through a blanket impl, so the thresholds
/// cannot be redefined per type.
pub trait DamageStatus {
    fn needs_repair(&self) -> bool;
    fn is_broken(&self) -> bool;
}

impl<T: Damageable + ?Sized> DamageStatus for T {
    fn needs_repair(&self) -> bool {
        self.health() <= REPAIR_THRESHOLD
    }

    fn is_broken(&self) -> bool {
        self.health() <= 0
    }
}
