//! Integer logarithms used to size codewords.

/// Floor of the base-2 logarithm of `x`.
///
/// `floor_log2(0)` is defined as 0 so callers never see a wrap-around; the
/// codecs reject zero before asking.
#[inline]
pub fn floor_log2(x: u64) -> u32 {
    if x == 0 {
        0
    } else {
        63 - x.leading_zeros()
    }
}

/// Ceiling of the base-2 logarithm of `x`: the smallest `k` with `2^k >= x`.
///
/// Returns 0 for `x <= 1`.
#[inline]
pub fn ceiling_log2(x: u64) -> u32 {
    if x <= 1 {
        0
    } else {
        64 - (x - 1).leading_zeros()
    }
}

/// Number of bits in the minimal binary representation of `x`.
#[inline]
pub fn bit_length(x: u64) -> u32 {
    64 - x.leading_zeros()
}

/// Mask selecting the low `width` bits (`width` in `0..=64`).
#[inline]
pub(crate) fn low_mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_log2() {
        assert_eq!(floor_log2(0), 0);
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(2), 1);
        assert_eq!(floor_log2(3), 1);
        assert_eq!(floor_log2(10), 3);
        assert_eq!(floor_log2(255), 7);
        assert_eq!(floor_log2(256), 8);
        assert_eq!(floor_log2(u64::MAX), 63);
    }

    #[test]
    fn test_ceiling_log2() {
        assert_eq!(ceiling_log2(0), 0);
        assert_eq!(ceiling_log2(1), 0);
        assert_eq!(ceiling_log2(2), 1);
        assert_eq!(ceiling_log2(3), 2);
        assert_eq!(ceiling_log2(10), 4);
        assert_eq!(ceiling_log2(256), 8);
        assert_eq!(ceiling_log2(257), 9);
        assert_eq!(ceiling_log2(u64::MAX), 64);
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(13), 4);
        assert_eq!(bit_length(1 << 62), 63);
        assert_eq!(bit_length(u64::MAX), 64);
    }

    #[test]
    fn test_low_mask() {
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(1), 1);
        assert_eq!(low_mask(7), 0x7f);
        assert_eq!(low_mask(64), u64::MAX);
    }
}
