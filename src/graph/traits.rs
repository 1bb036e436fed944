use std::fmt::{Debug, Display};
use num_traits::PrimInt;

/// Numeric type usable as an edge weight and as a vertex distance
///
/// Distances start at `W::zero()` and the "infinite" sentinel used by
/// single-source initialisation is `W::max_value()`. Path sums saturate
/// rather than overflow, so relaxing out of an unreachable vertex never
/// produces a bogus short distance.
pub trait Weight: PrimInt + Debug + Display {
    /// Sentinel for "no path found yet"
    ///
    /// Distances saturate at the same value, so a reachable vertex whose
    /// true distance is `W::max_value()` or more reads as unreachable. Pick a
    /// weight type wide enough for the longest path: BFS hop counts and
    /// Dijkstra path sums both stop at this bound.
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Returns true if this value is the infinite sentinel
    fn is_infinite(&self) -> bool {
        *self == Self::max_value()
    }
}

impl<T> Weight for T where T: PrimInt + Debug + Display {}
