//! # bitrange
//!
//! A bit-addressable codec for packing signal fields into byte frames.
//!
//! Embedded wire formats (CAN frames in particular) place arbitrary-width
//! fields at arbitrary bit offsets, in one of two incompatible numbering
//! conventions: plain little-endian (Intel, DBC `@1`) and the Motorola
//! convention (DBC `@0`) where bit indices run MSB-first within reversed byte
//! boundaries. [BitCursor] handles both: open a range, drive it one chunk of
//! up to 8 bits at a time, close it, and inspect the sticky [Flags]
//! afterwards. The buffer is borrowed, never owned, and a range that would
//! fall outside it is never touched.
//!
//! ## Example
//!
//! ```
//! use bitrange::{BitCursor, BitOrder};
//!
//! let mut frame = [0u8; 8];
//! let mut cur = BitCursor::new(&mut frame);
//!
//! // A 10 bit Motorola field starting at DBC bit 7.
//! cur.begin(7, 10, BitOrder::BigEndian);
//! cur.write_u16(125);
//! cur.end();
//! assert!(cur.flags().is_empty());
//!
//! cur.begin(7, 10, BitOrder::BigEndian);
//! let value = cur.read_u16();
//! cur.end();
//! assert_eq!(value, 125);
//! ```

pub mod bits;
pub mod cursor;
pub mod errors;
pub mod flags;
pub mod order;
pub mod signal;
pub mod trace;
mod wide;

pub use bits::{get_flag, set_flag};
pub use cursor::BitCursor;
pub use errors::AccessError;
pub use flags::Flags;
pub use order::BitOrder;
pub use signal::{Signal, SignalValue};
pub use trace::{ChunkKind, NoTrace, RecordingSink, TraceEvent, TraceSink};
