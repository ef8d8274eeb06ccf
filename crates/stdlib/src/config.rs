use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEFAULT_SMALL_REGION_OFFSET, SMALL_REGION_MAX_SIZE, WASM_PAGE_SIZE},
    errors::ConfigError,
};

/// Placement of the EVM memory arena inside the host linear memory.
///
/// Small modules (a single page of initial memory) use a buffer reserved in the
/// data segment instead of growing the host memory. `small_region_offset` is the
/// address of that buffer and `small_region_size` its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ArenaConfig {
    pub small_region_offset: u32,
    pub small_region_size: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            small_region_offset: DEFAULT_SMALL_REGION_OFFSET,
            small_region_size: SMALL_REGION_MAX_SIZE,
        }
    }
}

impl ArenaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.small_region_size > SMALL_REGION_MAX_SIZE {
            return Err(ConfigError::SmallRegionTooLarge {
                size: self.small_region_size,
                max: SMALL_REGION_MAX_SIZE,
            });
        }

        let fits = self
            .small_region_offset
            .checked_add(self.small_region_size)
            .is_some_and(|end| end <= WASM_PAGE_SIZE);
        if !fits {
            return Err(ConfigError::SmallRegionOutsideFirstPage {
                offset: self.small_region_offset,
                size: self.small_region_size,
            });
        }

        Ok(())
    }
}
