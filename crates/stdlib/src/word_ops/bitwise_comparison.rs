//! # Bitwise and comparison operations
//!
//! Includes the following operations over 32-byte big-endian words:
//!   - `LT`
//!   - `GT`
//!   - `SLT`
//!   - `SGT`
//!   - `EQ`
//!   - `ISZERO`
//!   - `AND`
//!   - `OR`
//!   - `XOR`
//!   - `NOT`

use crate::word::{from_lanes, lanes};
use ethereum_types::H256;
use std::cmp::Ordering;

/// Unsigned comparison. For big-endian buffers lexicographic byte order is
/// numeric order.
#[inline(always)]
fn compare_unsigned(lhs: &H256, rhs: &H256) -> Ordering {
    lhs.0.cmp(&rhs.0)
}

#[inline(always)]
fn is_negative(value: &H256) -> bool {
    value.0[0] & 0x80 != 0
}

/// Two's complement comparison.
///
/// Differing sign bits decide the result directly. With equal sign bits the
/// unsigned order of the encodings matches the signed order of the values.
#[inline(always)]
fn compare_signed(lhs: &H256, rhs: &H256) -> Ordering {
    match (is_negative(lhs), is_negative(rhs)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_unsigned(lhs, rhs),
    }
}

/// Implementation for the `LT` operation.
#[inline]
pub fn lt(lhs: &H256, rhs: &H256) -> bool {
    compare_unsigned(lhs, rhs) == Ordering::Less
}

/// Implementation for the `GT` operation.
#[inline]
pub fn gt(lhs: &H256, rhs: &H256) -> bool {
    compare_unsigned(lhs, rhs) == Ordering::Greater
}

/// Implementation for the `SLT` operation.
#[inline]
pub fn slt(lhs: &H256, rhs: &H256) -> bool {
    compare_signed(lhs, rhs) == Ordering::Less
}

/// Implementation for the `SGT` operation.
#[inline]
pub fn sgt(lhs: &H256, rhs: &H256) -> bool {
    compare_signed(lhs, rhs) == Ordering::Greater
}

/// Implementation for the `EQ` operation, compared lane by lane.
#[inline]
pub fn eq(lhs: &H256, rhs: &H256) -> bool {
    lanes(lhs)
        .into_iter()
        .zip(lanes(rhs))
        .all(|(lhs, rhs)| lhs == rhs)
}

/// Implementation for the `ISZERO` operation.
#[inline]
pub fn is_zero(value: &H256) -> bool {
    lanes(value).into_iter().all(|lane| lane == 0)
}

/// Implementation for the `NOT` operation.
#[inline]
pub fn not(value: &H256) -> H256 {
    from_lanes(lanes(value).map(|lane| !lane))
}

/// Implementation for the `AND` operation.
#[inline]
pub fn and(lhs: &H256, rhs: &H256) -> H256 {
    lane_wise(lhs, rhs, |lhs, rhs| lhs & rhs)
}

/// Implementation for the `OR` operation.
#[inline]
pub fn or(lhs: &H256, rhs: &H256) -> H256 {
    lane_wise(lhs, rhs, |lhs, rhs| lhs | rhs)
}

/// Implementation for the `XOR` operation.
#[inline]
pub fn xor(lhs: &H256, rhs: &H256) -> H256 {
    lane_wise(lhs, rhs, |lhs, rhs| lhs ^ rhs)
}

#[inline(always)]
fn lane_wise(lhs: &H256, rhs: &H256, op: impl Fn(u64, u64) -> u64) -> H256 {
    let lhs = lanes(lhs);
    let rhs = lanes(rhs);
    from_lanes(std::array::from_fn(|i| op(lhs[i], rhs[i])))
}
