//! Strongly-typed counters.

use std::fmt;

/// Monotonically increasing round counter.
///
/// A round is one full pass of the wavefront: border seeding through the
/// corner cell's publish. Rounds are independent and reseeded identically,
/// so the id only orders results — it never affects values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(pub u64);

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RoundId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
