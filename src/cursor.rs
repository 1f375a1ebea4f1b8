//! The stateful bit cursor: the single-chunk engine everything else builds on.

use crate::flags::Flags;
use crate::order::BitOrder;
use crate::trace::{ChunkKind, NoTrace, TraceEvent, TraceSink};

/// A cursor over a borrowed byte buffer that reads and writes arbitrary-width
/// bit fields at arbitrary bit offsets.
///
/// A field is driven as a *range*: [BitCursor::begin] configures the bit
/// offset, length and [BitOrder], then one [BitCursor::write] or
/// [BitCursor::read] call consumes up to 8 bits until the range is exhausted,
/// and [BitCursor::end] closes it. The cursor is reused across any number of
/// ranges on the same buffer.
///
/// Nothing here returns `Result`: protocol misuse and out-of-range requests
/// are recorded as sticky [Flags] that the caller inspects after a sequence of
/// calls. A range that would reach past the buffer is never touched at all.
///
/// ```
/// use bitrange::{BitCursor, BitOrder};
///
/// let mut frame = [0u8; 3];
/// let mut cur = BitCursor::new(&mut frame);
///
/// cur.begin(7, 10, BitOrder::BigEndian);
/// cur.write_u16(125);
/// cur.end();
/// assert!(cur.flags().is_empty());
/// ```
pub struct BitCursor<'a, S: TraceSink = NoTrace> {
    buf: &'a mut [u8],
    order: BitOrder,
    range_offset: usize,
    range_len: usize,
    /// Bits consumed so far within the open range.
    iter: usize,
    byte_pos: usize,
    lshift: u32,
    rshift: u32,
    /// True while no accessible range is configured. Kept separately from the
    /// flag bits so buffer accesses stay guarded even with flag tracking
    /// compiled out.
    void: bool,
    pedantic: bool,
    flags: Flags,
    trace: S,
}

impl<'a> BitCursor<'a, NoTrace> {
    /// Binds the cursor to a buffer with no range configured.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self::with_trace(buf, NoTrace)
    }
}

impl<'a, S: TraceSink> BitCursor<'a, S> {
    /// Binds the cursor to a buffer and attaches a diagnostic sink.
    pub fn with_trace(buf: &'a mut [u8], trace: S) -> Self {
        BitCursor {
            buf,
            order: BitOrder::LittleEndian,
            range_offset: 0,
            range_len: 0,
            iter: 0,
            byte_pos: 0,
            lshift: 0,
            rshift: 0,
            void: true,
            pedantic: false,
            flags: Flags::empty(),
            trace,
        }
    }

    /// Escalates every flag raise to a panic. Development and test use only.
    pub fn pedantic(mut self, enabled: bool) -> Self {
        self.pedantic = enabled;
        self
    }

    /// Flags accumulated since the last [BitCursor::begin].
    ///
    /// With the `unchecked` feature enabled only `UNDEFINED` and
    /// `MEMORY_BOUND` are still reported; protocol-misuse tracking is
    /// compiled out.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Bit length of the currently configured range.
    pub fn range_len(&self) -> usize {
        self.range_len
    }

    /// Bits consumed so far within the open range.
    pub fn consumed(&self) -> usize {
        self.iter
    }

    /// Opens a range of `length` bits at bit `offset`, laid out per `order`.
    ///
    /// Flags are recomputed: `UNDERFLOW` records whether the *previous*
    /// accessible range was fully consumed, `OVERFLOW` is cleared
    /// unconditionally, `UNDEFINED` is set for a zero-length request and
    /// `MEMORY_BOUND` when the range's last byte falls outside the buffer.
    /// A range flagged `UNDEFINED` or `MEMORY_BOUND` is void: no chunk call
    /// will touch the buffer until the next `begin`.
    pub fn begin(&mut self, offset: usize, length: usize, order: BitOrder) {
        let starved = !self.void && self.iter < self.range_len;

        self.flags = Flags::empty();
        if starved {
            self.raise(Flags::UNDERFLOW);
        }

        self.range_offset = offset;
        self.range_len = length;
        self.iter = 0;
        self.order = order;

        if length == 0 {
            self.void = true;
            self.raise(Flags::UNDEFINED);
            return;
        }

        if order.last_byte(offset, length) >= self.buf.len() {
            self.void = true;
            self.raise(Flags::MEMORY_BOUND);
            return;
        }

        let layout = order.layout(offset, length);
        self.byte_pos = layout.base;
        self.lshift = layout.lshift;
        self.rshift = layout.rshift;
        self.void = false;

        self.trace.record(TraceEvent::RangeOpened {
            offset,
            length,
            order,
        });
    }

    /// Closes the current range. Raises `UNDERFLOW` if it was not fully
    /// consumed; otherwise purely a completion checkpoint.
    pub fn end(&mut self) {
        if !self.void && self.iter < self.range_len {
            self.raise(Flags::UNDERFLOW);
        }
        self.trace.record(TraceEvent::RangeClosed {
            consumed: self.iter,
        });
    }

    /// Restarts the configured range from its first bit without calling
    /// [BitCursor::begin] again. Flags are left as they are.
    pub fn rewind(&mut self) {
        if self.void {
            return;
        }

        self.iter = 0;
        self.byte_pos = self.order.layout(self.range_offset, self.range_len).base;
        self.trace.record(TraceEvent::Rewound);
    }

    /// Writes the next chunk of up to 8 bits into the range.
    ///
    /// The chunk is `min(8, bits remaining)` wide; `data` supplies it in its
    /// low bits. Affected buffer bytes are merged, never blindly overwritten.
    /// Calls beyond the range raise `OVERFLOW` and leave the buffer untouched.
    pub fn write(&mut self, data: u8) {
        if self.void {
            if self.range_len == 0 {
                self.raise(Flags::UNDEFINED);
            }
            return;
        }

        let rem = self.range_len - self.iter;
        if rem == 0 {
            self.raise(Flags::OVERFLOW);
            return;
        }

        let start_byte = self.byte_pos;
        let (lshift, rshift) = (self.lshift, self.rshift);

        let kind = if lshift == 0 && rem >= 8 {
            // Aligned full byte.
            self.buf[self.byte_pos] = data;
            self.iter += 8;
            self.advance();
            ChunkKind::Aligned
        } else if rem as u32 + lshift >= 8 {
            // Chunk spans two physical bytes: low bits of `data` fill the
            // window above `lshift`, the rest carries into the next byte in
            // traversal order.
            let keep = 0xFFu8 >> rshift;
            self.buf[self.byte_pos] = (self.buf[self.byte_pos] & keep) | (data << lshift);
            self.iter += rshift as usize;

            let carried = (rem - rshift as usize).min(lshift as usize) as u32;
            if carried > 0 {
                self.step();
                let keep = 0xFFu8 << carried;
                self.buf[self.byte_pos] =
                    (self.buf[self.byte_pos] & keep) | ((data >> rshift) & !keep);
                self.iter += carried as usize;
            }
            ChunkKind::Carry
        } else {
            // Final sub-byte window inside a single byte.
            let mask = (0xFFu8 >> (8 - rem as u32)) << lshift;
            self.buf[self.byte_pos] = (self.buf[self.byte_pos] & !mask) | ((data << lshift) & mask);
            self.iter += rem;
            ChunkKind::Partial
        };

        self.trace.record(TraceEvent::ChunkWritten {
            kind,
            byte: start_byte,
        });
    }

    /// Reads the next chunk of up to 8 bits from the range, returned in the
    /// low bits of the result. The excess of a partial chunk is masked off.
    /// Calls beyond the range raise `OVERFLOW` and return 0.
    pub fn read(&mut self) -> u8 {
        if self.void {
            if self.range_len == 0 {
                self.raise(Flags::UNDEFINED);
            }
            return 0;
        }

        let rem = self.range_len - self.iter;
        if rem == 0 {
            self.raise(Flags::OVERFLOW);
            return 0;
        }

        let start_byte = self.byte_pos;
        let (lshift, rshift) = (self.lshift, self.rshift);

        let (kind, data) = if lshift == 0 && rem >= 8 {
            let data = self.buf[self.byte_pos];
            self.iter += 8;
            self.advance();
            (ChunkKind::Aligned, data)
        } else if rem as u32 + lshift >= 8 {
            let mut data = self.buf[self.byte_pos] >> lshift;
            self.iter += rshift as usize;

            let carried = (rem - rshift as usize).min(lshift as usize) as u32;
            if carried > 0 {
                self.step();
                let keep = 0xFFu8 << carried;
                data |= (self.buf[self.byte_pos] & !keep) << rshift;
                self.iter += carried as usize;
            }
            (ChunkKind::Carry, data)
        } else {
            let mask = (0xFFu8 >> (8 - rem as u32)) << lshift;
            let data = (self.buf[self.byte_pos] & mask) >> lshift;
            self.iter += rem;
            (ChunkKind::Partial, data)
        };

        self.trace.record(TraceEvent::ChunkRead {
            kind,
            byte: start_byte,
        });
        data
    }

    /// Steps to the next byte after an aligned chunk, but only while bits
    /// remain; the range may end exactly at a buffer boundary.
    fn advance(&mut self) {
        if self.iter < self.range_len {
            self.step();
        }
    }

    fn step(&mut self) {
        // The MEMORY_BOUND pre-check in `begin` confines every step to the
        // range footprint.
        let next = self.byte_pos.wrapping_add_signed(self.order.step());
        debug_assert!(next < self.buf.len());
        self.byte_pos = next;
    }

    pub(crate) fn raise(&mut self, flag: Flags) {
        #[cfg(not(feature = "unchecked"))]
        {
            if !self.flags.contains(flag) {
                self.trace.record(TraceEvent::FlagRaised(flag));
            }
            self.flags.insert(flag);
        }
        #[cfg(feature = "unchecked")]
        if flag.intersects(Flags::UNDEFINED | Flags::MEMORY_BOUND) {
            self.flags.insert(flag);
        }

        if self.pedantic {
            panic!(
                "{:?} raised at bit {} of range {}+{}",
                flag, self.iter, self.range_offset, self.range_len
            );
        }
    }
}
