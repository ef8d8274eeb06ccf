//! # wevm-stdlib - runtime support for EVM code compiled to WebAssembly
//!
//! Code emitted by the Yul-to-WASM compiler links against this library for the
//! pieces of EVM semantics that a WASM module does not provide natively.
//!
//! ## Overview
//!
//! - **EVM memory**: a growable, never-shrinking byte region laid over the
//!   page-granular linear memory of the host.
//! - **Word operations**: exact 256-bit arithmetic, comparison and bitwise
//!   operations over both 32-byte big-endian buffers ([`H256`]) and native
//!   256-bit integers ([`U256`]).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Invocation                            │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐ │
//! │  │       MemoryArena        │  │   free memory pointer    │ │
//! │  │  (base, accessible size, │  │   memory guard           │ │
//! │  │   capacity, lifecycle)   │  └──────────────────────────┘ │
//! │  └────────────┬─────────────┘                               │
//! └───────────────┼─────────────────────────────────────────────┘
//!                 ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              LinearMemory (host, 64 KiB pages)               │
//! └─────────────────────────────────────────────────────────────┘
//!
//!   word ◄── word_ops::{bitwise_comparison, shift, arithmetic}
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`word`] | `H256` ⇄ `U256` codecs and narrow subword codecs |
//! | [`word_ops`] | Comparison, bitwise, shift and arithmetic operations |
//! | [`host`] | `LinearMemory` trait and the in-process implementation |
//! | [`memory`] | `MemoryArena`: EVM memory bookkeeping |
//! | [`memory_access`] | MSTORE/MLOAD family and MCOPY through the arena |
//! | [`invocation`] | Per-invocation context |
//! | [`config`] | Arena configuration |
//! | [`errors`] | `MemoryError`, `ConfigError` |
//!
//! ## Quick Start
//!
//! ```
//! use wevm_stdlib::{config::ArenaConfig, host::VecLinearMemory, invocation::Invocation, U256};
//!
//! let host = VecLinearMemory::new(1, 16);
//! let mut invocation = Invocation::new(host, ArenaConfig::default()).unwrap();
//! invocation.arena_mut().initialize(false).unwrap();
//!
//! invocation.arena_mut().store_word(0, U256::from(42)).unwrap();
//! assert_eq!(invocation.arena().load_word(0).unwrap(), U256::from(42));
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod host;
pub mod invocation;
pub mod memory;
pub mod memory_access;
pub mod word;
pub mod word_ops;

pub use ethereum_types::{H256, U256};
