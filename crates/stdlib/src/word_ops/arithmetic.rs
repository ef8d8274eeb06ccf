// Arithmetic Operations
// Operations: ADD (32-byte words), EXP, SIGNEXTEND

use crate::constants::WORD_SIZE_IN_BYTES_USIZE;
use ethereum_types::{H256, U256};

/// Implementation for the `ADD` operation over 32-byte big-endian words.
///
/// The carry ripples from the least significant byte (index 31) towards
/// index 0. The final carry is dropped, so the result wraps modulo 2^256.
pub fn add_bytes32(augend: &H256, addend: &H256) -> H256 {
    let mut sum = H256::zero();
    let mut carry = 0u16;
    for i in (0..WORD_SIZE_IN_BYTES_USIZE).rev() {
        let byte_sum = u16::from(augend.0[i]) + u16::from(addend.0[i]) + carry;
        sum.0[i] = byte_sum.to_le_bytes()[0];
        carry = byte_sum >> 8;
    }
    sum
}

/// Implementation for the `EXP` operation: `base ^ exponent mod 2^256` by
/// square-and-multiply.
pub fn exp_word(mut base: U256, mut exponent: U256) -> U256 {
    let mut power = U256::one();
    while !exponent.is_zero() {
        if exponent.bit(0) {
            power = power.overflowing_mul(base).0;
        }
        exponent = exponent >> 1;
        if exponent.is_zero() {
            break;
        }
        base = base.overflowing_mul(base).0;
    }
    power
}

/// Implementation for the `SIGNEXTEND` operation.
///
/// Treats `value` as a signed integer of `byte_index + 1` bytes and extends
/// its sign bit through bit 255. Indices above 31 return `value` unchanged.
pub fn sign_extend_word(byte_index: u32, value: U256) -> U256 {
    if byte_index > 31 {
        return value;
    }

    let sign_bit_index = byte_index as usize * 8 + 7;
    let mask = (U256::one() << sign_bit_index) - U256::one();

    if value.bit(sign_bit_index) {
        value | !mask
    } else {
        value & mask
    }
}
