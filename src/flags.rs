//! Sticky status flags reported by the cursor.
//!
//! A flag stays set until the next [crate::cursor::BitCursor::begin] recomputes
//! it; no operation ever returns an error mid-call.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bitmask of cursor conditions accumulated since the last `begin`.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    /// More chunk calls were issued than the declared range allows.
    /// Recoverable; the buffer is untouched by the excess calls.
    pub const OVERFLOW: Flags = Flags(1 << 0);
    /// A range was closed or superseded before being fully consumed.
    pub const UNDERFLOW: Flags = Flags(1 << 1);
    /// A zero-length range was requested, or a chunk call was issued with no
    /// usable range configured.
    pub const UNDEFINED: Flags = Flags(1 << 2);
    /// The declared range reaches past the bound buffer; no access is ever
    /// attempted for such a range.
    pub const MEMORY_BOUND: Flags = Flags(1 << 3);

    pub const fn empty() -> Flags {
        Flags(0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every flag in `other` is set in `self`.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any flag in `other` is set in `self`.
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Flags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Flags) {
        self.0 &= !other.0;
    }

    /// Raw bit representation, stable across releases.
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Flags(empty)");
        }

        let names = [
            (Flags::OVERFLOW, "OVERFLOW"),
            (Flags::UNDERFLOW, "UNDERFLOW"),
            (Flags::UNDEFINED, "UNDEFINED"),
            (Flags::MEMORY_BOUND, "MEMORY_BOUND"),
        ];

        let mut first = true;
        f.write_str("Flags(")?;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_contains_nothing() {
        let flags = Flags::empty();
        assert!(flags.is_empty());
        assert!(!flags.contains(Flags::OVERFLOW));
        assert!(!flags.intersects(Flags::OVERFLOW | Flags::UNDERFLOW));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut flags = Flags::empty();
        flags.insert(Flags::OVERFLOW);
        flags.insert(Flags::MEMORY_BOUND);

        assert!(flags.contains(Flags::OVERFLOW));
        assert!(flags.contains(Flags::OVERFLOW | Flags::MEMORY_BOUND));
        assert!(!flags.contains(Flags::OVERFLOW | Flags::UNDERFLOW));
        assert!(flags.intersects(Flags::UNDERFLOW | Flags::MEMORY_BOUND));

        flags.remove(Flags::OVERFLOW);
        assert!(!flags.contains(Flags::OVERFLOW));
        assert!(flags.contains(Flags::MEMORY_BOUND));
    }

    #[test]
    fn test_debug_lists_set_flags() {
        assert_eq!(format!("{:?}", Flags::empty()), "Flags(empty)");
        assert_eq!(
            format!("{:?}", Flags::UNDERFLOW | Flags::UNDEFINED),
            "Flags(UNDERFLOW | UNDEFINED)"
        );
    }
}
