use thiserror::Error;

/// Errors raised while managing or accessing EVM memory.
///
/// `GrowthFailed` and `AllocationOverflow` are fatal: the invocation must be
/// aborted. The arena is left exactly as it was before the failing call.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MemoryError {
    #[error("Linear memory grow failed: requested {requested_pages} pages on top of {current_pages}")]
    GrowthFailed {
        requested_pages: u32,
        current_pages: u32,
    },
    #[error("Memory allocation of {size} bytes overflows the free memory pointer {pointer}")]
    AllocationOverflow { pointer: i32, size: u32 },
    #[error("Out of bounds linear memory access at 0x{address:08x} ({len} bytes)")]
    OutOfBounds { address: u32, len: usize },
}

impl MemoryError {
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::GrowthFailed { .. } | Self::AllocationOverflow { .. }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Small region of {size} bytes exceeds the maximum of {max} bytes")]
    SmallRegionTooLarge { size: u32, max: u32 },
    #[error("Small region [{offset}, {offset} + {size}) does not fit in the first page")]
    SmallRegionOutsideFirstPage { offset: u32, size: u32 },
    #[error("Host memory has {pages} pages but at least one is required")]
    EmptyHostMemory { pages: u32 },
}
