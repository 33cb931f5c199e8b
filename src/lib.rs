//! framesim: LRU frame-replacement simulation with per-access trace records.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod ds;
pub mod error;
pub mod frame_table;
pub mod input;
pub mod prelude;
pub mod report;
pub mod sim;
pub mod tracker;
