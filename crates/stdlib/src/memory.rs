//! EVM memory arena.
//!
//! EVM memory is emulated as one contiguous region inside the host linear
//! memory. The region starts at `base`, which never moves once established:
//! growing only adds pages after it. `capacity` is how much of the region is
//! backed by host memory and `accessible_size` is how much the EVM program has
//! asked for so far. Neither ever decreases.

use crate::{
    config::ArenaConfig,
    constants::WASM_PAGE_SIZE,
    errors::{ConfigError, MemoryError},
    host::LinearMemory,
};
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Ready,
}

/// Where the arena lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The buffer reserved in the data segment, no host growth involved.
    Reserved,
    /// Fresh pages appended to the host memory at initialization.
    Paged,
}

#[derive(Debug)]
pub struct MemoryArena<M> {
    host: M,
    config: ArenaConfig,
    lifecycle: Lifecycle,
    placement: Option<Placement>,
    base: u32,
    accessible_size: u32,
    capacity: u32,
}

impl<M: LinearMemory> MemoryArena<M> {
    pub fn new(host: M, config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pages = host.size_pages();
        if pages == 0 {
            return Err(ConfigError::EmptyHostMemory { pages });
        }

        Ok(Self {
            host,
            config,
            lifecycle: Lifecycle::Uninitialized,
            placement: None,
            base: 0,
            accessible_size: 0,
            capacity: 0,
        })
    }

    /// Establishes the arena. Calls after the first one are no-ops.
    ///
    /// Modules whose initial memory spans more than one page, or callers that
    /// prefer a large region, get a fresh page appended to the host memory.
    /// Everything else uses the reserved buffer from [`ArenaConfig`].
    pub fn initialize(&mut self, prefer_large_region: bool) -> Result<(), MemoryError> {
        if self.lifecycle == Lifecycle::Ready {
            return Ok(());
        }

        let initial_pages = self.host.size_pages();
        if initial_pages > 1 || prefer_large_region {
            let base = initial_pages
                .checked_mul(WASM_PAGE_SIZE)
                .ok_or(MemoryError::GrowthFailed {
                    requested_pages: 1,
                    current_pages: initial_pages,
                })?;
            self.grow_host(1)?;

            self.base = base;
            self.capacity = WASM_PAGE_SIZE;
            self.placement = Some(Placement::Paged);
        } else {
            self.base = self.config.small_region_offset;
            self.capacity = self.config.small_region_size;
            self.placement = Some(Placement::Reserved);
        }
        self.accessible_size = 0;
        self.lifecycle = Lifecycle::Ready;

        debug!(
            base = self.base,
            capacity = self.capacity,
            placement = ?self.placement,
            "EVM memory arena established"
        );
        Ok(())
    }

    /// Makes at least `size` bytes of the arena accessible and returns `base`.
    ///
    /// Requests smaller than the current accessible size have no effect: the
    /// arena never shrinks.
    pub fn ensure_capacity(&mut self, size: u32) -> Result<u32, MemoryError> {
        debug_assert!(
            self.lifecycle == Lifecycle::Ready,
            "EVM memory used before initialization",
        );

        if size > self.capacity {
            let target_pages = size.div_ceil(WASM_PAGE_SIZE);
            let grow_pages = target_pages - self.capacity / WASM_PAGE_SIZE;
            let capacity = target_pages
                .checked_mul(WASM_PAGE_SIZE)
                .ok_or(MemoryError::GrowthFailed {
                    requested_pages: grow_pages,
                    current_pages: self.host.size_pages(),
                })?;
            self.grow_host(grow_pages)?;

            debug!(
                from = self.capacity,
                to = capacity,
                grow_pages,
                "EVM memory capacity grown"
            );
            self.capacity = capacity;
            self.accessible_size = size;
        } else if size > self.accessible_size {
            self.accessible_size = size;
        }

        Ok(self.base)
    }

    /// Host address of `offset` bytes into the arena.
    ///
    /// Negative offsets address data below the arena (constants in the data
    /// segment) and are not checked.
    #[inline]
    pub fn address_at(&self, offset: i32) -> u32 {
        self.base.wrapping_add_signed(offset)
    }

    /// Loose accessibility check: `address` is not below the arena and `size`
    /// does not exceed the accessible size.
    ///
    /// This does not prove `address + size` stays inside the arena; see
    /// [`Self::contains_range`] for that.
    #[inline]
    pub fn is_accessible(&self, address: u32, size: u32) -> bool {
        address >= self.base && size <= self.accessible_size
    }

    /// Checked variant of [`Self::is_accessible`]: the whole
    /// `[address, address + size)` range is inside the accessible part of the
    /// arena.
    pub fn contains_range(&self, address: u32, size: u32) -> bool {
        let Some(start) = address.checked_sub(self.base) else {
            return false;
        };
        u64::from(start) + u64::from(size) <= u64::from(self.accessible_size)
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn accessible_size(&self) -> u32 {
        self.accessible_size
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_initialized(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn host(&self) -> &M {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut M {
        &mut self.host
    }

    pub fn into_host(self) -> M {
        self.host
    }

    fn grow_host(&mut self, pages: u32) -> Result<(), MemoryError> {
        let current_pages = self.host.size_pages();
        match self.host.grow(pages) {
            Some(_) => Ok(()),
            None => {
                error!(
                    requested_pages = pages,
                    current_pages, "Linear memory grow failed, aborting invocation"
                );
                Err(MemoryError::GrowthFailed {
                    requested_pages: pages,
                    current_pages,
                })
            }
        }
    }
}
