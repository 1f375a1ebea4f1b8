//! Absolute single-bit accessors for isolated flag bits in a frame.
//!
//! These are independent of the ranged cursor: `bit_index` addresses the raw
//! buffer directly (`byte = bit_index / 8`, LSB-first within the byte), which
//! is how standalone status bits are usually laid out next to multi-bit
//! signals.

use crate::errors::AccessError;

/// Sets or clears the bit at `bit_index`.
pub fn set_flag(data: &mut [u8], bit_index: usize, value: bool) -> Result<(), AccessError> {
    if bit_index >= data.len() * 8 {
        return Err(AccessError::OutOfBounds);
    }

    let mask = 1u8 << (bit_index % 8);
    if value {
        data[bit_index / 8] |= mask;
    } else {
        data[bit_index / 8] &= !mask;
    }

    Ok(())
}

/// Reads the bit at `bit_index`.
pub fn get_flag(data: &[u8], bit_index: usize) -> Result<bool, AccessError> {
    if bit_index >= data.len() * 8 {
        return Err(AccessError::OutOfBounds);
    }

    Ok(data[bit_index / 8] & (1 << (bit_index % 8)) != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_flag() {
        let mut data = [0u8; 2];

        set_flag(&mut data, 0, true).unwrap();
        set_flag(&mut data, 9, true).unwrap();
        assert_eq!(data, [0x01, 0x02]);

        assert_eq!(get_flag(&data, 0), Ok(true));
        assert_eq!(get_flag(&data, 1), Ok(false));
        assert_eq!(get_flag(&data, 9), Ok(true));
    }

    #[test]
    fn test_clear_flag_preserves_neighbors() {
        let mut data = [0xFFu8];
        set_flag(&mut data, 3, false).unwrap();
        assert_eq!(data, [0b1111_0111]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut data = [0u8; 1];
        assert_eq!(
            set_flag(&mut data, 8, true).unwrap_err(),
            AccessError::OutOfBounds
        );
        assert_eq!(get_flag(&data, 8).unwrap_err(), AccessError::OutOfBounds);
        assert_eq!(data, [0]);
    }

    #[test]
    fn test_flag_is_independent_of_signal_fields() {
        // A flag bit inside a byte that also carries a signal must not
        // disturb the surrounding bits.
        let mut data = [0b0101_0101u8];
        set_flag(&mut data, 1, true).unwrap();
        assert_eq!(data, [0b0101_0111]);
    }
}
