use std::fmt;

/// Integer coordinates of a port in the galaxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`, truncated toward zero.
    ///
    /// Distances beyond `i32::MAX` saturate to `i32::MAX`.
    pub fn distance_to(&self, other: &Self) -> i32 {
        let dx = i128::from(other.x) - i128::from(self.x);
        let dy = i128::from(other.y) - i128::from(self.y);
        let dz = i128::from(other.z) - i128::from(self.z);
        // Float to int casts saturate.
        ((dx * dx + dy * dy + dz * dz) as f64).sqrt() as i32
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
