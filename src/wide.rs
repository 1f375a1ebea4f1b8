//! Multi-byte values on top of the single-chunk primitive.
//!
//! 16/32-bit values decompose into chunk calls least-significant chunk first;
//! signed reads sign-extend relative to the configured field width, not the
//! return width.

use crate::cursor::BitCursor;
use crate::trace::TraceSink;

impl<S: TraceSink> BitCursor<'_, S> {
    /// Writes a 16-bit value as two chunks, LSB chunk first.
    pub fn write_u16(&mut self, value: u16) {
        self.write(value as u8);
        self.write((value >> 8) as u8);
    }

    /// Writes a 32-bit value as four chunks, LSB chunk first.
    pub fn write_u32(&mut self, value: u32) {
        self.write(value as u8);
        self.write((value >> 8) as u8);
        self.write((value >> 16) as u8);
        self.write((value >> 24) as u8);
    }

    /// Reads two chunks and composes them LSB first.
    pub fn read_u16(&mut self) -> u16 {
        let value = self.read() as u16;
        value | (self.read() as u16) << 8
    }

    /// Reads four chunks and composes them LSB first.
    pub fn read_u32(&mut self) -> u32 {
        let value = self.read() as u32;
        let value = value | (self.read() as u32) << 8;
        let value = value | (self.read() as u32) << 16;
        value | (self.read() as u32) << 24
    }

    /// Reads one chunk and sign-extends it from the field width.
    pub fn read_i8(&mut self) -> i8 {
        let raw = self.read();
        sign_extend(raw as u32, self.range_len(), 8) as i8
    }

    /// Reads an unsigned 16-bit value and sign-extends it from the field
    /// width.
    pub fn read_i16(&mut self) -> i16 {
        let raw = self.read_u16();
        sign_extend(raw as u32, self.range_len(), 16) as i16
    }

    /// Reads an unsigned 32-bit value and sign-extends it from the field
    /// width.
    pub fn read_i32(&mut self) -> i32 {
        let raw = self.read_u32();
        sign_extend(raw, self.range_len(), 32) as i32
    }
}

/// Two's-complement extension of the low `bits` of `value` into 32 bits.
/// Left as-is when the field width already fills (or exceeds) `width`.
pub(crate) fn sign_extend(value: u32, bits: usize, width: usize) -> u32 {
    if bits == 0 || bits >= width {
        return value;
    }

    if value & (1 << (bits - 1)) != 0 {
        value | (u32::MAX << bits)
    } else {
        value
    }
}
