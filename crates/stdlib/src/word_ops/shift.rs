//! # Shift operations
//!
//! Includes the following operations:
//!   - `SHL` over 32-byte words and native words
//!   - `SHR` over 32-byte words and native words
//!
//! Shift amounts are signed 32-bit values as produced by generated code. Any
//! amount `<= 0` leaves the value unchanged and any amount `>= 256` yields
//! zero.

use crate::{
    constants::{WORD_LANES, WORD_SIZE_IN_BITS, WORD_SIZE_IN_BYTES_USIZE},
    word::{bytes_to_word, from_lanes, lanes, word_to_bytes},
};
use ethereum_types::{H256, U256};

const LANE_BITS: i32 = 64;

/// Implementation for the `SHL` operation over a 32-byte word.
pub fn shl_bytes32(value: &H256, shift: i32) -> H256 {
    if shift <= 0 {
        return *value;
    }
    if shift >= WORD_SIZE_IN_BITS {
        return H256::zero();
    }
    if shift <= LANE_BITS {
        return shl_low_u32(value, shift).unwrap_or_else(|| shl_via_word(value, shift));
    }

    // Move whole lanes first, then shift the remaining bits (< 64) once.
    let (lane_shift, remainder) = ((shift / LANE_BITS) as usize, shift % LANE_BITS);
    let value_lanes = lanes(value);
    let mut shifted = [0u64; WORD_LANES];
    shifted[..WORD_LANES - lane_shift].copy_from_slice(&value_lanes[lane_shift..]);

    shl_bytes32(&from_lanes(shifted), remainder)
}

/// Fast path for values that fit in their low 32 bits: for `shift <= 32` the
/// result fits in the lowest lane.
#[inline(always)]
fn shl_low_u32(value: &H256, shift: i32) -> Option<H256> {
    let [high, mid_high, mid_low, low] = lanes(value);
    let fits = shift <= 32 && high == 0 && mid_high == 0 && mid_low == 0 && low >> 32 == 0;
    fits.then(|| from_lanes([0, 0, 0, low << shift]))
}

#[inline(always)]
fn shl_via_word(value: &H256, shift: i32) -> H256 {
    word_to_bytes(shl_word(bytes_to_word(value), shift))
}

/// Implementation for the `SHL` operation over a native word. Bits shifted past
/// bit 255 are discarded.
#[inline]
pub fn shl_word(value: U256, shift: i32) -> U256 {
    if shift <= 0 {
        return value;
    }
    if shift >= WORD_SIZE_IN_BITS {
        return U256::zero();
    }
    value << shift as usize
}

/// Implementation for the `SHR` operation over a 32-byte word, byte by byte.
pub fn shr_bytes32(value: &H256, shift: i32) -> H256 {
    if shift <= 0 {
        return *value;
    }
    if shift >= WORD_SIZE_IN_BITS {
        return H256::zero();
    }

    let byte_shift = (shift / 8) as usize;
    let bit_shift = (shift % 8) as u32;
    let mut result = H256::zero();

    for i in 0..WORD_SIZE_IN_BYTES_USIZE - byte_shift {
        let mut byte = value.0[i] >> bit_shift;
        if i > 0 && bit_shift > 0 {
            // Low bits of the previous byte carried into this one.
            byte |= value.0[i - 1] << (8 - bit_shift);
        }
        result.0[i + byte_shift] = byte;
    }

    result
}

/// Implementation for the `SHR` operation over a native word.
#[inline]
pub fn shr_word(value: U256, shift: i32) -> U256 {
    if shift <= 0 {
        return value;
    }
    if shift >= WORD_SIZE_IN_BITS {
        return U256::zero();
    }
    value >> shift as usize
}
