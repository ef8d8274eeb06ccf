//! Per-invocation state: the memory arena plus the free memory pointer kept
//! outside EVM memory.

use crate::{
    config::ArenaConfig,
    constants::{MEMORY_GUARD_START, WORD_SIZE_IN_BYTES_U32},
    errors::{ConfigError, MemoryError},
    host::LinearMemory,
    memory::MemoryArena,
};
use tracing::error;

#[derive(Debug)]
pub struct Invocation<M> {
    arena: MemoryArena<M>,
    free_memory_pointer: i32,
}

impl<M: LinearMemory> Invocation<M> {
    pub fn new(host: M, config: ArenaConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            arena: MemoryArena::new(host, config)?,
            free_memory_pointer: 0,
        })
    }

    pub fn arena(&self) -> &MemoryArena<M> {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut MemoryArena<M> {
        &mut self.arena
    }

    /// Makes `size` bytes accessible and returns the first EVM address free
    /// for use, right after the scratch space and the free memory pointer slot.
    pub fn memory_guard(&mut self, size: u32) -> Result<u32, MemoryError> {
        self.arena.ensure_capacity(size)?;
        Ok(MEMORY_GUARD_START)
    }

    pub fn free_memory_pointer(&self) -> i32 {
        self.free_memory_pointer
    }

    pub fn set_free_memory_pointer(&mut self, pointer: i32) {
        self.free_memory_pointer = pointer;
    }

    /// Bumps the free memory pointer by `size` rounded up to a whole number of
    /// words and returns its previous value.
    ///
    /// Fails if the pointer would not move forward, which also covers
    /// zero-sized requests.
    pub fn allocate_memory(&mut self, size: u32) -> Result<i32, MemoryError> {
        let pointer = self.free_memory_pointer;
        let new_pointer = size
            .checked_next_multiple_of(WORD_SIZE_IN_BYTES_U32)
            .and_then(|rounded| i32::try_from(rounded).ok())
            .and_then(|rounded| pointer.checked_add(rounded))
            .filter(|new_pointer| *new_pointer > pointer);

        let Some(new_pointer) = new_pointer else {
            error!(pointer, size, "Memory allocation failed");
            return Err(MemoryError::AllocationOverflow { pointer, size });
        };

        self.free_memory_pointer = new_pointer;
        Ok(pointer)
    }

    /// Current host memory size in pages.
    pub fn memory_size_pages(&self) -> u32 {
        self.arena.host().size_pages()
    }

    pub fn into_arena(self) -> MemoryArena<M> {
        self.arena
    }
}
