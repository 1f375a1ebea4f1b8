//! Injectable diagnostic side channel.
//!
//! The cursor performs no I/O of its own. A [TraceSink] can be attached at
//! construction to observe every range transition, chunk access, and flag
//! raise; the default [NoTrace] sink compiles to nothing.

use crate::flags::Flags;
use crate::order::BitOrder;

/// Which of the chunk paths a `write`/`read` call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    /// Full byte, byte-aligned.
    Aligned,
    /// Chunk split across two physical bytes.
    Carry,
    /// Sub-byte window confined to a single byte.
    Partial,
}

/// One cursor event, emitted as it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    RangeOpened {
        offset: usize,
        length: usize,
        order: BitOrder,
    },
    RangeClosed {
        /// Bits consumed when `end` was called.
        consumed: usize,
    },
    Rewound,
    ChunkWritten {
        kind: ChunkKind,
        /// Buffer byte index where the chunk started.
        byte: usize,
    },
    ChunkRead {
        kind: ChunkKind,
        byte: usize,
    },
    /// Emitted on the transition only, not on repeated raises of a flag
    /// already set.
    FlagRaised(Flags),
}

/// Receiver for cursor diagnostics.
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn record(&mut self, event: TraceEvent) {
        (**self).record(event);
    }
}

/// Default sink: discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _event: TraceEvent) {}
}

/// Sink that keeps every event in order, for tests and offline inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<TraceEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceSink for RecordingSink {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
