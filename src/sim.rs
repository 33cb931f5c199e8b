//! LRU frame-replacement simulator.
//!
//! [`Simulator`] owns a [`RecencyTracker`] and a [`FrameTable`] and drives
//! one access at a time:
//!
//! ```text
//!   access id ──► resident? ──yes──► touch (promote)          ──► HIT record
//!                    │
//!                    no ──► at capacity? ──yes──► evict_lru() = victim
//!                    │                              │
//!                    └──► touch (insert at front) ◄─┘
//!                         place(id, victim) into frame table ──► MISS record
//! ```
//!
//! There is no other state between accesses; the tracker and table contents
//! are the whole machine. Each access emits one [`TraceRecord`] that is
//! handed off to a [`TraceSink`](crate::report::TraceSink) and not retained
//! here.

use std::hash::Hash;

use crate::error::{ConfigError, SimError};
use crate::frame_table::FrameTable;
use crate::report::TraceSink;
use crate::tracker::RecencyTracker;

/// HIT/MISS classification for one access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// Requested item was already resident; no eviction.
    Hit,
    /// Requested item was absent and had to be loaded.
    Miss,
}

impl std::fmt::Display for AccessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessKind::Hit => f.write_str("HIT"),
            AccessKind::Miss => f.write_str("MISS"),
        }
    }
}

/// Immutable record of one processed access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord<K> {
    /// 1-based access number.
    pub step: usize,
    /// The requested item id.
    pub request: K,
    pub kind: AccessKind,
    /// Id evicted to make room, if the miss occurred at capacity.
    pub victim: Option<K>,
    /// Frame-table snapshot after processing; `None` marks an empty slot.
    pub frames: Vec<Option<K>>,
    /// Running hit total including this access.
    pub hit_count: u64,
    /// Running miss (fault) total including this access.
    pub fault_count: u64,
}

/// Totals for a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimReport<K> {
    pub accesses: usize,
    pub hits: u64,
    pub faults: u64,
    pub final_frames: Vec<Option<K>>,
}

/// Sequential LRU simulation over a fixed-capacity frame set.
///
/// # Example
///
/// ```
/// use framesim::sim::{AccessKind, Simulator};
///
/// let mut sim = Simulator::new(3);
///
/// let rec = sim.step(1).unwrap();
/// assert_eq!(rec.kind, AccessKind::Miss);
/// assert_eq!(rec.frames, vec![Some(1), None, None]);
///
/// let rec = sim.step(1).unwrap();
/// assert_eq!(rec.kind, AccessKind::Hit);
/// assert_eq!(rec.victim, None);
/// ```
#[derive(Debug)]
pub struct Simulator<K>
where
    K: Copy + Eq + Hash,
{
    tracker: RecencyTracker<K>,
    frames: FrameTable<K>,
    steps: usize,
    hits: u64,
    faults: u64,
}

impl<K> Simulator<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates a simulator with `capacity` frames, all empty.
    ///
    /// The core assumes `capacity >= 1`; use [`try_new`](Self::try_new) when
    /// the capacity comes from user input.
    pub fn new(capacity: usize) -> Self {
        Self {
            tracker: RecencyTracker::new(capacity),
            frames: FrameTable::new(capacity),
            steps: 0,
            hits: 0,
            faults: 0,
        }
    }

    /// Creates a simulator, rejecting a zero capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is `0`.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("frame capacity must be >= 1"));
        }
        Ok(Self::new(capacity))
    }

    /// Processes one access and returns its trace record.
    ///
    /// # Errors
    ///
    /// Returns [`SimError`] only if an internal tracker/table invariant is
    /// violated, which cannot happen under this method's own sequencing.
    pub fn step(&mut self, id: K) -> Result<TraceRecord<K>, SimError> {
        self.steps += 1;

        let (kind, victim) = if self.tracker.is_resident(&id) {
            self.hits += 1;
            self.tracker.touch(id);
            (AccessKind::Hit, None)
        } else {
            self.faults += 1;
            let victim = if self.tracker.len() == self.tracker.capacity() {
                Some(self.tracker.evict_lru()?)
            } else {
                None
            };
            self.tracker.touch(id);
            self.frames.place(id, victim)?;
            (AccessKind::Miss, victim)
        };

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        Ok(TraceRecord {
            step: self.steps,
            request: id,
            kind,
            victim,
            frames: self.frames.snapshot(),
            hit_count: self.hits,
            fault_count: self.faults,
        })
    }

    /// Processes a whole reference string, feeding each record to `sink`.
    ///
    /// # Example
    ///
    /// ```
    /// use framesim::report::TraceLog;
    /// use framesim::sim::Simulator;
    ///
    /// let mut sim = Simulator::new(3);
    /// let mut log = TraceLog::new();
    /// let report = sim.run([1u64, 2, 3, 1, 4], &mut log).unwrap();
    ///
    /// assert_eq!(report.hits, 1);
    /// assert_eq!(report.faults, 4);
    /// assert_eq!(report.final_frames, vec![Some(1), Some(4), Some(3)]);
    /// ```
    pub fn run<I, S>(&mut self, accesses: I, sink: &mut S) -> Result<SimReport<K>, SimError>
    where
        I: IntoIterator<Item = K>,
        S: TraceSink<K> + ?Sized,
    {
        for id in accesses {
            sink.record(self.step(id)?);
        }
        Ok(SimReport {
            accesses: self.steps,
            hits: self.hits,
            faults: self.faults,
            final_frames: self.frames.snapshot(),
        })
    }

    /// Number of resident items.
    pub fn len(&self) -> usize {
        self.tracker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracker.is_empty()
    }

    /// Configured frame capacity.
    pub fn capacity(&self) -> usize {
        self.tracker.capacity()
    }

    /// Current frame-table snapshot.
    pub fn frames(&self) -> Vec<Option<K>> {
        self.frames.snapshot()
    }

    /// Resident ids from most to least recently used.
    pub fn recency(&self) -> impl Iterator<Item = &K> {
        self.tracker.iter()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn faults(&self) -> u64 {
        self.faults
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.tracker.debug_validate_invariants();
        assert_eq!(
            self.frames.occupied(),
            self.tracker.len(),
            "occupied frame count diverged from resident count"
        );
        for id in self.tracker.iter() {
            assert!(
                self.frames.snapshot().contains(&Some(*id)),
                "resident id missing from frame table"
            );
        }
    }
}
