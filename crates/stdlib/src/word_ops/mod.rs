//! Word-level operations called directly by generated code.
//!
//! Operations over [`H256`](ethereum_types::H256) work on the big-endian byte
//! form, either byte by byte or in four 8-byte lanes. Operations over
//! [`U256`](ethereum_types::U256) use the native representation.

pub mod arithmetic;
pub mod bitwise_comparison;
pub mod shift;

pub use arithmetic::{add_bytes32, exp_word, sign_extend_word};
pub use bitwise_comparison::{and, eq, gt, is_zero, lt, not, or, sgt, slt, xor};
pub use shift::{shl_bytes32, shl_word, shr_bytes32, shr_word};
