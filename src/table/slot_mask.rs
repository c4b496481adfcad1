use crate::table::constants::SLOTS_PER_BLOCK;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

/// Returns a mask with bit `i` set iff `block[i] == fingerprint`.
///
/// `block` is the fingerprint row of one block. Passing `EMPTY_FPRINT`
/// yields the mask of empty slots.
///
/// Dispatches to AVX2 when detected at runtime, then to SSE2 (baseline on
/// x86_64) or NEON (baseline on aarch64), and otherwise to
/// [`slot_mask_portable`]. Every path returns the same mask.
///
/// # Examples
/// ```
/// use simd_iceberg::{slot_mask, SLOTS_PER_BLOCK};
///
/// let mut block = [0u8; SLOTS_PER_BLOCK];
/// block[3] = 0xAB;
/// block[31] = 0xAB;
/// assert_eq!(slot_mask(&block, 0xAB), (1 << 3) | (1 << 31));
/// assert_eq!(slot_mask(&block, 0).count_ones(), 30);
/// ```
#[inline]
#[allow(unreachable_code)]
pub fn slot_mask(block: &[u8; SLOTS_PER_BLOCK], fingerprint: u8) -> u32 {
    #[cfg(target_arch = "x86_64")]
    {
        if std::is_x86_feature_detected!("avx2") {
            // SAFETY: guarded by runtime feature detection.
            return unsafe { slot_mask_avx2(block, fingerprint) };
        }

        #[cfg(target_feature = "sse2")]
        return slot_mask_sse2(block, fingerprint);
    }

    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    {
        return slot_mask_neon(block, fingerprint);
    }

    slot_mask_portable(block, fingerprint)
}

/// One 32-byte load, one broadcast compare, one movemask.
///
/// # Safety
/// The caller must ensure the running CPU supports AVX2.
#[cfg(target_arch = "x86_64")]
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn slot_mask_avx2(block: &[u8; SLOTS_PER_BLOCK], fingerprint: u8) -> u32 {
    unsafe {
        let needle = _mm256_set1_epi8(fingerprint as i8);
        let bytes = _mm256_loadu_si256(block.as_ptr() as *const __m256i);
        let eq = _mm256_cmpeq_epi8(bytes, needle);

        _mm256_movemask_epi8(eq) as u32
    }
}

/// Two 16-byte halves, packed into one 32-bit mask.
#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
#[inline]
pub fn slot_mask_sse2(block: &[u8; SLOTS_PER_BLOCK], fingerprint: u8) -> u32 {
    // SAFETY: SSE2 is enabled at compile time and both loads stay within the
    // 32-byte row.
    unsafe {
        let needle = _mm_set1_epi8(fingerprint as i8);
        let lo = _mm_loadu_si128(block.as_ptr() as *const __m128i);
        let hi = _mm_loadu_si128(block.as_ptr().add(16) as *const __m128i);

        let lo_mask = (_mm_movemask_epi8(_mm_cmpeq_epi8(lo, needle)) as u32) & 0xFFFF;
        let hi_mask = (_mm_movemask_epi8(_mm_cmpeq_epi8(hi, needle)) as u32) & 0xFFFF;

        lo_mask | (hi_mask << 16)
    }
}

/// Per-lane bit weights. AND-ing a compare result with these and summing each
/// 8-lane half reproduces an x86 style movemask byte.
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
const LANE_WEIGHTS: [u8; 16] = [1, 2, 4, 8, 16, 32, 64, 128, 1, 2, 4, 8, 16, 32, 64, 128];

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
#[inline]
pub fn slot_mask_neon(block: &[u8; SLOTS_PER_BLOCK], fingerprint: u8) -> u32 {
    // SAFETY: NEON is enabled at compile time and both loads stay within the
    // 32-byte row.
    unsafe {
        let needle = vdupq_n_u8(fingerprint);
        let weights = vld1q_u8(LANE_WEIGHTS.as_ptr());

        let lo = vandq_u8(vceqq_u8(vld1q_u8(block.as_ptr()), needle), weights);
        let hi = vandq_u8(vceqq_u8(vld1q_u8(block.as_ptr().add(16)), needle), weights);

        let b0 = vaddv_u8(vget_low_u8(lo)) as u32;
        let b1 = vaddv_u8(vget_high_u8(lo)) as u32;
        let b2 = vaddv_u8(vget_low_u8(hi)) as u32;
        let b3 = vaddv_u8(vget_high_u8(hi)) as u32;

        b0 | (b1 << 8) | (b2 << 16) | (b3 << 24)
    }
}

/// Byte-by-byte reference implementation.
#[inline]
pub fn slot_mask_portable(block: &[u8; SLOTS_PER_BLOCK], fingerprint: u8) -> u32 {
    block
        .iter()
        .enumerate()
        .fold(0u32, |mask, (slot, &byte)| {
            mask | (((byte == fingerprint) as u32) << slot)
        })
}
