//! # Word codecs
//!
//! A word has two interchangeable representations:
//!   - [`H256`]: 32 bytes, most significant byte first. This is the exchange
//!     format with the host.
//!   - [`U256`]: a native 256-bit integer stored as four little-endian `u64`
//!     limbs.
//!
//! Narrow values (32 and 64 bits) travel in the low-order bytes of a 32-byte
//! buffer.

use crate::constants::{LANE_SIZE_IN_BYTES, WORD_LANES, WORD_SIZE_IN_BYTES_USIZE};
use ethereum_types::{H256, U256};

/// Decodes a big-endian 32-byte buffer into a native word.
#[inline(always)]
pub fn bytes_to_word(bytes: &H256) -> U256 {
    let mut limbs = [0u64; WORD_LANES];
    for (i, lane) in lanes(bytes).into_iter().enumerate() {
        limbs[WORD_LANES - i - 1] = lane;
    }
    U256(limbs)
}

/// Encodes a native word as a big-endian 32-byte buffer.
#[inline(always)]
pub fn word_to_bytes(value: U256) -> H256 {
    let mut lanes = [0u64; WORD_LANES];
    for (i, lane) in lanes.iter_mut().enumerate() {
        *lane = value.0[WORD_LANES - i - 1];
    }
    from_lanes(lanes)
}

/// Decodes up to 32 big-endian bytes, left-padding with zeros.
///
/// # Panics
///
/// Panics if `slice` is longer than 32 bytes.
pub fn word_from_big_endian_slice(slice: &[u8]) -> U256 {
    let mut padded = H256::zero();
    padded.0[WORD_SIZE_IN_BYTES_USIZE - slice.len()..].copy_from_slice(slice);
    bytes_to_word(&padded)
}

/// Splits a buffer into its four 8-byte lanes. Lane 0 is the most significant.
#[inline(always)]
pub fn lanes(bytes: &H256) -> [u64; WORD_LANES] {
    let mut lanes = [0u64; WORD_LANES];
    for (lane, chunk) in lanes.iter_mut().zip(bytes.0.chunks_exact(LANE_SIZE_IN_BYTES)) {
        let mut lane_bytes = [0u8; LANE_SIZE_IN_BYTES];
        lane_bytes.copy_from_slice(chunk);
        *lane = u64::from_be_bytes(lane_bytes);
    }
    lanes
}

/// Inverse of [`lanes`].
#[inline(always)]
pub fn from_lanes(lanes: [u64; WORD_LANES]) -> H256 {
    let mut bytes = H256::zero();
    for (chunk, lane) in bytes.0.chunks_exact_mut(LANE_SIZE_IN_BYTES).zip(lanes) {
        chunk.copy_from_slice(&lane.to_be_bytes());
    }
    bytes
}

/// Places `value` in the low 4 bytes of a zeroed buffer, big-endian.
pub fn i32_to_bytes32_big_endian(value: i32) -> H256 {
    let mut bytes = H256::zero();
    bytes.0[28..].copy_from_slice(&value.to_be_bytes());
    bytes
}

/// Reads the low 4 bytes as a signed big-endian integer. The high 28 bytes are
/// ignored.
pub fn i32_from_bytes32_big_endian(bytes: &H256) -> i32 {
    let mut low = [0u8; 4];
    low.copy_from_slice(&bytes.0[28..]);
    i32::from_be_bytes(low)
}

pub fn u32_to_bytes32_big_endian(value: u32) -> H256 {
    let mut bytes = H256::zero();
    bytes.0[28..].copy_from_slice(&value.to_be_bytes());
    bytes
}

pub fn u32_from_bytes32_big_endian(bytes: &H256) -> u32 {
    let mut low = [0u8; 4];
    low.copy_from_slice(&bytes.0[28..]);
    u32::from_be_bytes(low)
}

pub fn u64_to_bytes32_big_endian(value: u64) -> H256 {
    from_lanes([0, 0, 0, value])
}

pub fn u64_from_bytes32_big_endian(bytes: &H256) -> u64 {
    lanes(bytes)[WORD_LANES - 1]
}
