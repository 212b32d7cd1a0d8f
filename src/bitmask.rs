//! Pure single-bit arithmetic on the 8-bit output latch value.
//!
//! Both functions leave every bit other than `index` untouched, which is
//! what keeps a single-relay switch from clobbering its neighbours.

/// Returns `value` with bit `index` set. Defined for `index` in 0..=7.
pub fn set_bit(value: u8, index: u8) -> u8 {
    value | (1 << index)
}

/// Returns `value` with bit `index` cleared. Defined for `index` in 0..=7.
pub fn clear_bit(value: u8, index: u8) -> u8 {
    value & !(1 << index)
}

#[cfg(test)]
mod tests {
    use super::clear_bit;
    use super::set_bit;

    #[test]
    fn set_bit_sets_only_the_requested_bit() {
        for value in 0..=255u8 {
            for index in 0..8u8 {
                let diff = set_bit(value, index) ^ value;
                assert_eq!(diff & !(1 << index), 0);
            }
        }
    }

    #[test]
    fn clear_bit_clears_only_the_requested_bit() {
        for value in 0..=255u8 {
            for index in 0..8u8 {
                let diff = clear_bit(value, index) ^ value;
                assert_eq!(diff & !(1 << index), 0);
            }
        }
    }

    #[test]
    fn set_then_clear_restores_the_original_value() {
        for value in 0..=255u8 {
            for index in 0..8u8 {
                let cleared = clear_bit(value, index);
                assert_eq!(clear_bit(set_bit(cleared, index), index), cleared);
            }
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(set_bit(0x00, 3), 0x08);
        assert_eq!(clear_bit(0xFF, 3), 0xF7);
        assert_eq!(set_bit(0xF7, 3), 0xFF);
        assert_eq!(clear_bit(0x00, 7), 0x00);
        assert_eq!(set_bit(0x80, 7), 0x80);
    }
}
