//! Trace reporting collaborators.
//!
//! The core's output contract is the structured [`TraceRecord`]; everything
//! here is presentation. [`TraceSink`] is the seam between the simulator and
//! whatever consumes the trace:
//!
//! - [`TraceLog`] collects records for later inspection (tests, post-runs).
//! - [`TextRenderer`] writes the classic textual trace,
//!   `Access <id>: <HIT|MISS> -> [<slot0> <slot1> ... ]`, with empty slots
//!   rendered as `-1`.
//! - [`NullSink`] discards records (benchmarks).

use std::fmt::Display;
use std::io::{self, Write};

use crate::sim::TraceRecord;

/// Consumer of per-access trace records.
///
/// Records are moved into the sink; the simulator does not retain them.
pub trait TraceSink<K> {
    fn record(&mut self, record: TraceRecord<K>);
}

/// Sink that keeps every record in order.
#[derive(Debug, Default)]
pub struct TraceLog<K> {
    records: Vec<TraceRecord<K>>,
}

impl<K> TraceLog<K> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[TraceRecord<K>] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TraceRecord<K>> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<K> TraceSink<K> for TraceLog<K> {
    fn record(&mut self, record: TraceRecord<K>) {
        self.records.push(record);
    }
}

/// Sink that drops every record.
#[derive(Debug, Default)]
pub struct NullSink;

impl<K> TraceSink<K> for NullSink {
    fn record(&mut self, _record: TraceRecord<K>) {}
}

/// Sink that renders records as text, one line per access.
///
/// Empty slots print as `-1`, matching the historical frame dump format:
///
/// ```text
/// Access 1: MISS -> [1 -1 -1 ]
/// Access 1: HIT -> [1 -1 -1 ]
/// ```
///
/// Write errors are sticky: rendering stops at the first failure and
/// [`finish`](Self::finish) reports it.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    err: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, err: None }
    }

    /// Returns the writer, or the first write error encountered.
    pub fn finish(self) -> io::Result<W> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn write_record<K: Display>(&mut self, record: &TraceRecord<K>) -> io::Result<()> {
        write!(self.out, "Access {}: {} -> [", record.request, record.kind)?;
        for slot in &record.frames {
            match slot {
                Some(id) => write!(self.out, "{} ", id)?,
                None => write!(self.out, "-1 ")?,
            }
        }
        writeln!(self.out, "]")
    }
}

impl<K: Display, W: Write> TraceSink<K> for TextRenderer<W> {
    fn record(&mut self, record: TraceRecord<K>) {
        if self.err.is_some() {
            return;
        }
        if let Err(err) = self.write_record(&record) {
            self.err = Some(err);
        }
    }
}
