pub use crate::ds::{RecencyList, SlotArena, SlotId};
pub use crate::error::{ConfigError, EmptyTrackerError, PlacementError, SimError};
pub use crate::frame_table::FrameTable;
pub use crate::input::{parse_reference_string, validate_frame_count};
pub use crate::report::{NullSink, TextRenderer, TraceLog, TraceSink};
pub use crate::sim::{AccessKind, SimReport, Simulator, TraceRecord};
pub use crate::tracker::RecencyTracker;
