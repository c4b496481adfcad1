#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::_pdep_u64;

/// Bit-mask words the rank-select primitive operates on.
///
/// Slot masks are `u32` (one bit per slot of a 32-wide block), but the
/// primitive itself is width agnostic so other block widths can reuse it.
pub trait BitWord: Copy {
    /// Width of the word, also used as the "no such rank" sentinel.
    const BITS: u32;

    fn to_u64(self) -> u64;
}

impl BitWord for u32 {
    const BITS: u32 = u32::BITS;

    #[inline]
    fn to_u64(self) -> u64 {
        self as u64
    }
}

impl BitWord for u64 {
    const BITS: u32 = u64::BITS;

    #[inline]
    fn to_u64(self) -> u64 {
        self
    }
}

const fn build_rank_bits() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut rank = 0;
    while rank < 64 {
        table[rank] = 1u64 << rank;
        rank += 1;
    }
    table
}

/// `RANK_BITS[rank]` has exactly bit `rank` set. This is the source word
/// PDEP scatters into the mask's set-bit positions.
pub const RANK_BITS: [u64; 64] = build_rank_bits();

/// Returns the position of the `rank`-th set bit of `mask` (`rank = 0` is the
/// lowest set bit).
///
/// Returns `W::BITS` (e.g. `32` for a `u32` mask) when `mask` has `rank` or
/// fewer set bits.
///
/// Uses BMI2 `PDEP` when the CPU supports it, otherwise falls back to
/// [`word_select_portable`]. Both paths produce identical results.
///
/// # Examples
/// ```
/// use simd_iceberg::word_select;
///
/// let mask: u32 = 0b0010_0001_0001_0000;
/// assert_eq!(word_select(mask, 0), 4);
/// assert_eq!(word_select(mask, 1), 8);
/// assert_eq!(word_select(mask, 2), 13);
/// assert_eq!(word_select(mask, 3), 32);
/// ```
#[inline]
pub fn word_select<W: BitWord>(mask: W, rank: u32) -> u32 {
    #[cfg(target_arch = "x86_64")]
    {
        if std::is_x86_feature_detected!("bmi2") {
            // SAFETY: guarded by runtime feature detection.
            return unsafe { word_select_bmi2(mask, rank) };
        }
    }

    word_select_portable(mask, rank)
}

/// `PDEP` rank-select: deposit a single bit at position `rank` into the set
/// bits of `mask`, then count trailing zeros. No loop, no branch on the mask.
///
/// # Safety
/// The caller must ensure the running CPU supports BMI2.
#[cfg(target_arch = "x86_64")]
#[inline]
#[target_feature(enable = "bmi2")]
pub unsafe fn word_select_bmi2<W: BitWord>(mask: W, rank: u32) -> u32 {
    let Some(&bit) = RANK_BITS.get(rank as usize) else {
        return W::BITS;
    };

    let deposited = unsafe { _pdep_u64(bit, mask.to_u64()) };

    // An empty deposit yields 64; narrow it to this word's sentinel.
    deposited.trailing_zeros().min(W::BITS)
}

/// Reference rank-select: clear the lowest set bit `rank` times, then count
/// trailing zeros.
#[inline]
pub fn word_select_portable<W: BitWord>(mask: W, rank: u32) -> u32 {
    let mut remaining = mask.to_u64();

    for _ in 0..rank.min(W::BITS) {
        remaining &= remaining.wrapping_sub(1);
    }

    remaining.trailing_zeros().min(W::BITS)
}
