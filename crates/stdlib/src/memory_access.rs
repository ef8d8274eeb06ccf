//! Loads, stores and copies through the arena.
//!
//! EVM offsets are signed: negative offsets reach the constant data placed
//! below the arena. Stores make sure a whole word after the offset is
//! accessible before writing. Loads never grow memory.

use crate::{
    constants::{WORD_SIZE_IN_BYTES_U32, WORD_SIZE_IN_BYTES_USIZE},
    errors::MemoryError,
    host::LinearMemory,
    memory::MemoryArena,
    word::{
        bytes_to_word, u32_from_bytes32_big_endian, u32_to_bytes32_big_endian,
        u64_from_bytes32_big_endian, u64_to_bytes32_big_endian, word_to_bytes,
    },
};
use ethereum_types::{H256, U256};
use std::ops::Range;

/// Arena size needed to cover `len` bytes starting at `offset`.
#[inline]
fn end_offset(offset: i32, len: u32) -> u32 {
    let end = i64::from(offset) + i64::from(len);
    end.clamp(0, i64::from(u32::MAX)) as u32
}

impl<M: LinearMemory> MemoryArena<M> {
    /// Implementation for the `MSTORE` operation over a 32-byte word.
    pub fn store_bytes32(&mut self, offset: i32, value: &H256) -> Result<(), MemoryError> {
        self.ensure_capacity(end_offset(offset, WORD_SIZE_IN_BYTES_U32))?;
        let range = self.host_range(self.address_at(offset), WORD_SIZE_IN_BYTES_USIZE)?;
        self.host_mut().bytes_mut()[range].copy_from_slice(value.as_bytes());
        Ok(())
    }

    pub fn store_word(&mut self, offset: i32, value: U256) -> Result<(), MemoryError> {
        self.store_bytes32(offset, &word_to_bytes(value))
    }

    /// Stores `value` as a full word: high bytes zeroed, value in the low 4.
    pub fn store_u32(&mut self, offset: i32, value: u32) -> Result<(), MemoryError> {
        self.store_bytes32(offset, &u32_to_bytes32_big_endian(value))
    }

    /// Stores `value` as a full word: high bytes zeroed, value in the low 8.
    pub fn store_u64(&mut self, offset: i32, value: u64) -> Result<(), MemoryError> {
        self.store_bytes32(offset, &u64_to_bytes32_big_endian(value))
    }

    /// Implementation for the `MSTORE8` operation.
    ///
    /// Only one byte is written but a whole word is made accessible.
    pub fn store_u8(&mut self, offset: i32, value: u8) -> Result<(), MemoryError> {
        self.ensure_capacity(end_offset(offset, WORD_SIZE_IN_BYTES_U32))?;
        let range = self.host_range(self.address_at(offset), 1)?;
        self.host_mut().bytes_mut()[range.start] = value;
        Ok(())
    }

    /// Implementation for the `MLOAD` operation over a 32-byte word.
    pub fn load_bytes32(&self, offset: i32) -> Result<H256, MemoryError> {
        let range = self.host_range(self.address_at(offset), WORD_SIZE_IN_BYTES_USIZE)?;
        Ok(H256::from_slice(&self.host().bytes()[range]))
    }

    pub fn load_word(&self, offset: i32) -> Result<U256, MemoryError> {
        self.load_bytes32(offset).map(|bytes| bytes_to_word(&bytes))
    }

    /// Low 4 bytes of the word at `offset`.
    pub fn load_u32(&self, offset: i32) -> Result<u32, MemoryError> {
        self.load_bytes32(offset)
            .map(|bytes| u32_from_bytes32_big_endian(&bytes))
    }

    /// Low 8 bytes of the word at `offset`.
    pub fn load_u64(&self, offset: i32) -> Result<u64, MemoryError> {
        self.load_bytes32(offset)
            .map(|bytes| u64_from_bytes32_big_endian(&bytes))
    }

    /// Implementation for the `MCOPY` operation, also used for code and
    /// calldata copies out of constant data (`source_offset < 0`).
    ///
    /// Overlapping ranges are handled as `memmove`.
    pub fn copy(
        &mut self,
        dest_offset: i32,
        source_offset: i32,
        size: u32,
    ) -> Result<(), MemoryError> {
        self.ensure_capacity(end_offset(dest_offset, size))?;
        if size == 0 {
            return Ok(());
        }

        let len = size as usize;
        let source = self.host_range(self.address_at(source_offset), len)?;
        let dest = self.host_range(self.address_at(dest_offset), len)?;
        self.host_mut()
            .bytes_mut()
            .copy_within(source, dest.start);
        Ok(())
    }

    /// Copies `size` bytes starting at `offset` out of the arena, for return
    /// data, revert data and log payloads.
    pub fn read_bytes(&self, offset: i32, size: u32) -> Result<Vec<u8>, MemoryError> {
        if size == 0 {
            return Ok(Vec::new());
        }
        let range = self.host_range(self.address_at(offset), size as usize)?;
        Ok(self.host().bytes()[range].to_vec())
    }

    fn host_range(&self, address: u32, len: usize) -> Result<Range<usize>, MemoryError> {
        let start = address as usize;
        start
            .checked_add(len)
            .filter(|end| *end <= self.host().bytes().len())
            .map(|end| start..end)
            .ok_or(MemoryError::OutOfBounds { address, len })
    }
}
