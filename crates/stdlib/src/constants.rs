pub const WORD_SIZE_IN_BYTES_USIZE: usize = 32;
pub const WORD_SIZE_IN_BYTES_U32: u32 = 32;
pub const WORD_SIZE_IN_BITS: i32 = 256;

/// Number of 8-byte lanes in a word.
pub const WORD_LANES: usize = 4;
pub const LANE_SIZE_IN_BYTES: usize = 8;

/// WebAssembly page size. The host linear memory only grows in these units.
pub const WASM_PAGE_SIZE: u32 = 65536;

/// Upper bound for the pre-reserved buffer used as EVM memory by small modules.
pub const SMALL_REGION_MAX_SIZE: u32 = 16384;

// Default placement of the pre-reserved buffer inside the first page, after the
// first KiB of the data segment.
pub const DEFAULT_SMALL_REGION_OFFSET: u32 = 1024;

/// Solidity reserves `[0, 64)` as scratch space and `[64, 96)` for the free
/// memory pointer, so usable memory starts here.
pub const MEMORY_GUARD_START: u32 = 96;
