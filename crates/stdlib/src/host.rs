//! Host linear memory.
//!
//! The arena never owns memory on its own: it reserves pages from the host's
//! linear memory (WASM `memory.size` / `memory.grow`) and hands out addresses
//! inside it. [`LinearMemory`] is that seam. [`VecLinearMemory`] backs it with a
//! `Vec<u8>` for native execution and tests.

use crate::constants::WASM_PAGE_SIZE;

/// Page-granular, grow-only linear memory provided by the host.
pub trait LinearMemory {
    /// Current size in pages.
    fn size_pages(&self) -> u32;

    /// Grows the memory by `delta` pages.
    ///
    /// Returns the previous size in pages, or `None` if the host refused to
    /// grow. New pages are zero-filled. Growing by zero pages always succeeds.
    fn grow(&mut self, delta: u32) -> Option<u32>;

    fn bytes(&self) -> &[u8];

    fn bytes_mut(&mut self) -> &mut [u8];

    /// Current size in bytes.
    fn size_bytes(&self) -> u64 {
        u64::from(self.size_pages()) * u64::from(WASM_PAGE_SIZE)
    }
}

/// In-process linear memory with a page limit.
#[derive(Debug, Clone)]
pub struct VecLinearMemory {
    data: Vec<u8>,
    max_pages: u32,
    grow_calls: usize,
}

impl VecLinearMemory {
    /// Creates a memory with `initial_pages` zeroed pages that can grow up to
    /// `max_pages`.
    pub fn new(initial_pages: u32, max_pages: u32) -> Self {
        let max_pages = max_pages.max(initial_pages);
        Self {
            data: vec![0; page_bytes(initial_pages)],
            max_pages,
            grow_calls: 0,
        }
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Number of successful non-zero grow requests served so far.
    pub fn grow_calls(&self) -> usize {
        self.grow_calls
    }
}

impl LinearMemory for VecLinearMemory {
    fn size_pages(&self) -> u32 {
        (self.data.len() / WASM_PAGE_SIZE as usize) as u32
    }

    fn grow(&mut self, delta: u32) -> Option<u32> {
        let previous = self.size_pages();
        let target = previous.checked_add(delta)?;
        if target > self.max_pages {
            return None;
        }
        if delta > 0 {
            self.data.resize(page_bytes(target), 0);
            self.grow_calls += 1;
        }
        Some(previous)
    }

    fn bytes(&self) -> &[u8] {
        &self.data
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

fn page_bytes(pages: u32) -> usize {
    pages as usize * WASM_PAGE_SIZE as usize
}
