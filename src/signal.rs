//! Declarative signal descriptors: named bit ranges within a frame.
//!
//! A [Signal] captures the layout of one field (offset, width, bit order,
//! signedness) so application code can encode and decode it without driving
//! the chunk loop by hand. Descriptors are plain data and, with the `serde`
//! feature, can be loaded from configuration.

use crate::cursor::BitCursor;
use crate::flags::Flags;
use crate::order::BitOrder;
use crate::trace::TraceSink;
use crate::wide::sign_extend;

/// Layout of a single signal field inside a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signal {
    /// Bit offset of the field, in the numbering convention of `order`.
    pub offset_bits: usize,
    /// Field width in bits (1..=32).
    pub len_bits: usize,
    /// Intel or Motorola/DBC placement.
    #[cfg_attr(feature = "serde", serde(default))]
    pub order: BitOrder,
    /// Whether decoded values are sign-extended from `len_bits`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub signed: bool,
}

/// A decoded signal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalValue {
    Unsigned(u32),
    Signed(i32),
}

impl Signal {
    /// Opens this signal's range on the cursor.
    pub fn open<S: TraceSink>(&self, cur: &mut BitCursor<'_, S>) {
        cur.begin(self.offset_bits, self.len_bits, self.order);
    }

    /// Writes `value` into the signal's field, issuing exactly as many chunk
    /// calls as the field needs. Returns the cursor flags for inspection.
    pub fn encode<S: TraceSink>(&self, cur: &mut BitCursor<'_, S>, value: u32) -> Flags {
        self.open(cur);

        let mut rest = value;
        let mut bits = self.len_bits;
        while bits > 0 {
            cur.write(rest as u8);
            rest >>= 8;
            bits = bits.saturating_sub(8);
        }

        cur.end();
        cur.flags()
    }

    /// Reads the signal's field back out, sign-extending if the signal is
    /// signed.
    pub fn decode<S: TraceSink>(&self, cur: &mut BitCursor<'_, S>) -> SignalValue {
        self.open(cur);

        let mut raw = 0u32;
        let mut shift = 0;
        let mut bits = self.len_bits;
        while bits > 0 {
            raw |= (cur.read() as u32) << shift;
            shift += 8;
            bits = bits.saturating_sub(8);
        }

        cur.end();

        if self.signed {
            SignalValue::Signed(sign_extend(raw, self.len_bits, 32) as i32)
        } else {
            SignalValue::Unsigned(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_unsigned() {
        let speed = Signal {
            offset_bits: 7,
            len_bits: 10,
            order: BitOrder::BigEndian,
            signed: false,
        };

        let mut frame = [0u8; 3];
        let mut cur = BitCursor::new(&mut frame);

        let flags = speed.encode(&mut cur, 125);
        assert!(flags.is_empty());
        assert_eq!(speed.decode(&mut cur), SignalValue::Unsigned(125));
    }

    #[test]
    fn test_encode_decode_signed() {
        let temperature = Signal {
            offset_bits: 4,
            len_bits: 12,
            order: BitOrder::LittleEndian,
            signed: true,
        };

        let mut frame = [0u8; 3];
        let mut cur = BitCursor::new(&mut frame);

        temperature.encode(&mut cur, (-40i32 as u32) & 0xFFF);
        assert_eq!(temperature.decode(&mut cur), SignalValue::Signed(-40));
    }

    #[test]
    fn test_adjacent_signals_do_not_clobber() {
        let first = Signal {
            offset_bits: 7,
            len_bits: 10,
            order: BitOrder::BigEndian,
            signed: false,
        };
        let second = Signal {
            offset_bits: 13,
            len_bits: 10,
            order: BitOrder::BigEndian,
            signed: false,
        };

        let mut frame = [0u8; 3];
        let mut cur = BitCursor::new(&mut frame);
        first.encode(&mut cur, 125);
        second.encode(&mut cur, 296);

        assert_eq!(first.decode(&mut cur), SignalValue::Unsigned(125));
        assert_eq!(second.decode(&mut cur), SignalValue::Unsigned(296));
    }

    #[test]
    fn test_encode_out_of_frame_reports_memory_bound() {
        let signal = Signal {
            offset_bits: 16,
            len_bits: 16,
            order: BitOrder::LittleEndian,
            signed: false,
        };

        let mut frame = [0u8; 2];
        let mut cur = BitCursor::new(&mut frame);
        let flags = signal.encode(&mut cur, 0xFFFF);
        assert!(flags.contains(Flags::MEMORY_BOUND));
        assert_eq!(frame, [0, 0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_signal_from_json() {
        let json = r#"{
            "offset_bits": 7,
            "len_bits": 10,
            "order": "BigEndian",
            "signed": false
        }"#;

        let signal: Signal = serde_json::from_str(json).unwrap();
        assert_eq!(
            signal,
            Signal {
                offset_bits: 7,
                len_bits: 10,
                order: BitOrder::BigEndian,
                signed: false,
            }
        );
    }
}
