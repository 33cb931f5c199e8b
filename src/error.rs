//! Error types for the framesim library.
//!
//! ## Key Components
//!
//! - [`EmptyTrackerError`]: eviction requested on an empty recency tracker.
//! - [`PlacementError`]: frame-table placement could not find a target slot.
//! - [`SimError`]: either of the above, surfaced by the simulator.
//! - [`ConfigError`]: invalid user-facing configuration or input.
//!
//! `EmptyTrackerError` and `PlacementError` are internal-consistency faults:
//! under the simulator's sequencing they can never trigger, and the tests
//! assert as much. They abort the run rather than being recovered from,
//! because silent continuation would corrupt the recency/frame invariant.
//! `ConfigError` is the only error a user of the crate is expected to see.

use std::fmt;

// ---------------------------------------------------------------------------
// EmptyTrackerError
// ---------------------------------------------------------------------------

/// Error returned when [`evict_lru`](crate::tracker::RecencyTracker::evict_lru)
/// is called on a tracker with zero resident items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyTrackerError;

impl fmt::Display for EmptyTrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("eviction requested on an empty recency tracker")
    }
}

impl std::error::Error for EmptyTrackerError {}

// ---------------------------------------------------------------------------
// PlacementError
// ---------------------------------------------------------------------------

/// Error returned when [`place`](crate::frame_table::FrameTable::place) cannot
/// find a slot to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A victim was supplied but no slot holds it.
    VictimNotFound,
    /// No victim was supplied and every slot is occupied.
    NoEmptySlot,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::VictimNotFound => {
                f.write_str("victim is not present in any frame slot")
            },
            PlacementError::NoEmptySlot => {
                f.write_str("all frame slots are occupied and no victim was supplied")
            },
        }
    }
}

impl std::error::Error for PlacementError {}

// ---------------------------------------------------------------------------
// SimError
// ---------------------------------------------------------------------------

/// Internal-consistency error surfaced by
/// [`Simulator::step`](crate::sim::Simulator::step).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    Tracker(EmptyTrackerError),
    Placement(PlacementError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Tracker(err) => err.fmt(f),
            SimError::Placement(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Tracker(err) => Some(err),
            SimError::Placement(err) => Some(err),
        }
    }
}

impl From<EmptyTrackerError> for SimError {
    fn from(err: EmptyTrackerError) -> Self {
        SimError::Tracker(err)
    }
}

impl From<PlacementError> for SimError {
    fn from(err: PlacementError) -> Self {
        SimError::Placement(err)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when configuration or user input is invalid.
///
/// Produced by fallible constructors such as
/// [`Simulator::try_new`](crate::sim::Simulator::try_new) and the parsing
/// helpers in [`input`](crate::input). Carries a human-readable description
/// of which parameter failed validation.
///
/// # Example
///
/// ```
/// use framesim::sim::Simulator;
///
/// let err = Simulator::<u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
