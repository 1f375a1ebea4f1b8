//! Bit-numbering conventions for signal fields inside a frame.

/// How a field's bit offset and length map onto buffer bytes.
///
/// `LittleEndian` is the Intel convention (DBC `@1`): bit 0 is the LSB of
/// byte 0 and the field grows toward higher addresses. `BigEndian` is the
/// Motorola convention (DBC `@0`): bit indices run MSB-first within
/// byte-reversed boundaries, so the field grows toward *lower* addresses from
/// the byte holding its last bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitOrder {
    LittleEndian,
    BigEndian,
}

impl Default for BitOrder {
    fn default() -> Self {
        BitOrder::LittleEndian
    }
}

/// Derived placement of a range: starting byte and the intra-byte split.
///
/// `lshift` is where the low end of each chunk lands inside the current byte;
/// `rshift` is its complement (`(8 - lshift) % 8`). Both stay constant while a
/// range is being consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    pub base: usize,
    pub lshift: u32,
    pub rshift: u32,
}

impl BitOrder {
    /// Computes the traversal starting byte and intra-byte shifts for a range.
    ///
    /// `length` must be non-zero; zero-length ranges are rejected before
    /// layout is ever computed.
    pub(crate) fn layout(self, offset: usize, length: usize) -> Layout {
        match self {
            BitOrder::LittleEndian => {
                let lshift = (offset % 8) as u32;
                Layout {
                    base: offset / 8,
                    lshift,
                    rshift: (8 - lshift) % 8,
                }
            }
            BitOrder::BigEndian => {
                // DBC reverses bit indexing inside each byte for Motorola
                // fields; XOR with 7 moves into the flipped index space.
                let rshift = (((offset ^ 7) + length) % 8) as u32;
                Layout {
                    base: ((offset ^ 7) + length - 1) / 8,
                    lshift: (8 - rshift) % 8,
                    rshift,
                }
            }
        }
    }

    /// Highest byte index the range touches, for the bounds pre-check.
    pub(crate) fn last_byte(self, offset: usize, length: usize) -> usize {
        match self {
            BitOrder::LittleEndian => (offset + length - 1) / 8,
            // The Motorola traversal starts at its highest byte and walks
            // backward, so the starting byte is also the bound.
            BitOrder::BigEndian => ((offset ^ 7) + length - 1) / 8,
        }
    }

    /// Byte-pointer step applied once the current byte is exhausted.
    pub(crate) fn step(self) -> isize {
        match self {
            BitOrder::LittleEndian => 1,
            BitOrder::BigEndian => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_layout() {
        let layout = BitOrder::LittleEndian.layout(3, 31);
        assert_eq!(layout.base, 0);
        assert_eq!(layout.lshift, 3);
        assert_eq!(layout.rshift, 5);

        let aligned = BitOrder::LittleEndian.layout(16, 16);
        assert_eq!(aligned.base, 2);
        assert_eq!(aligned.lshift, 0);
        assert_eq!(aligned.rshift, 0);
    }

    #[test]
    fn test_big_endian_layout_starts_at_last_bit() {
        // Start bit 7 is the MSB of byte 0; a 16 bit field ends at the LSB
        // of byte 1, which is where the traversal begins.
        let layout = BitOrder::BigEndian.layout(7, 16);
        assert_eq!(layout.base, 1);
        assert_eq!(layout.lshift, 0);
        assert_eq!(layout.rshift, 0);

        let layout = BitOrder::BigEndian.layout(6, 28);
        assert_eq!(layout.base, 3);
        assert_eq!(layout.lshift, 3);
        assert_eq!(layout.rshift, 5);
    }

    #[test]
    fn test_last_byte() {
        assert_eq!(BitOrder::LittleEndian.last_byte(3, 31), 4);
        assert_eq!(BitOrder::LittleEndian.last_byte(0, 8), 0);
        assert_eq!(BitOrder::BigEndian.last_byte(7, 16), 1);
        assert_eq!(BitOrder::BigEndian.last_byte(13, 10), 2);
    }
}
