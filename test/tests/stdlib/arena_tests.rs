#![allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
use ethereum_types::{H256, U256};
use hex_literal::hex;
use wevm_stdlib::{
    config::ArenaConfig,
    constants::WASM_PAGE_SIZE,
    errors::MemoryError,
    host::{LinearMemory, VecLinearMemory},
    memory::{Lifecycle, MemoryArena, Placement},
};

fn new_arena(initial_pages: u32, max_pages: u32) -> MemoryArena<VecLinearMemory> {
    MemoryArena::new(
        VecLinearMemory::new(initial_pages, max_pages),
        ArenaConfig::default(),
    )
    .unwrap()
}

#[test]
fn test_lifecycle() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut arena = new_arena(2, 16);
    assert_eq!(arena.lifecycle(), Lifecycle::Uninitialized);
    assert_eq!(arena.placement(), None);

    arena.initialize(false).unwrap();
    assert_eq!(arena.lifecycle(), Lifecycle::Ready);
    assert_eq!(arena.placement(), Some(Placement::Paged));
    assert_eq!(arena.base(), 2 * WASM_PAGE_SIZE);
    assert_eq!(arena.accessible_size(), 0);
}

#[test]
fn test_initialize_twice_keeps_base() {
    let mut arena = new_arena(1, 16);
    arena.initialize(true).unwrap();
    let base = arena.base();
    let pages = arena.host().size_pages();

    arena.initialize(true).unwrap();

    assert_eq!(arena.base(), base);
    assert_eq!(arena.host().size_pages(), pages);
    assert_eq!(arena.host().grow_calls(), 1);
}

#[test]
fn test_high_water_mark() {
    let mut arena = new_arena(1, 16);
    arena.initialize(false).unwrap();

    arena.ensure_capacity(100).unwrap();
    arena.ensure_capacity(50).unwrap();
    assert_eq!(arena.accessible_size(), 100);

    let mut previous = arena.accessible_size();
    for size in [0, 10, 5_000, 200, 80_000, 3, 140_000, 70_000] {
        arena.ensure_capacity(size).unwrap();
        assert!(arena.accessible_size() >= previous);
        assert!(arena.capacity() >= arena.accessible_size());
        previous = arena.accessible_size();
    }
    assert_eq!(arena.accessible_size(), 140_000);
}

#[test]
fn test_base_never_moves_on_growth() {
    let mut arena = new_arena(3, 16);
    arena.initialize(false).unwrap();
    let base = arena.base();

    arena.store_word(0, U256::from(7)).unwrap();
    for pages in 1..=4 {
        assert_eq!(arena.ensure_capacity(pages * WASM_PAGE_SIZE).unwrap(), base);
    }

    assert_eq!(arena.base(), base);
    assert_eq!(arena.load_word(0).unwrap(), U256::from(7));
}

#[test]
fn test_growth_failure_is_fatal() {
    let mut arena = new_arena(2, 3);
    arena.initialize(false).unwrap();
    arena.ensure_capacity(64).unwrap();

    let error = arena.ensure_capacity(WASM_PAGE_SIZE + 1).unwrap_err();

    assert!(error.is_fatal());
    assert_eq!(
        error,
        MemoryError::GrowthFailed {
            requested_pages: 1,
            current_pages: 3
        }
    );
    assert_eq!(arena.accessible_size(), 64);
    assert_eq!(arena.capacity(), WASM_PAGE_SIZE);
}

#[test]
fn test_is_accessible_does_not_check_range_end() {
    let mut arena = new_arena(2, 16);
    arena.initialize(false).unwrap();
    arena.ensure_capacity(32).unwrap();

    let past_end = arena.address_at(32);
    assert!(arena.is_accessible(past_end, 32));
    assert!(!arena.contains_range(past_end, 32));
    assert!(arena.contains_range(arena.address_at(0), 32));
}

#[test]
fn test_mstore_mload() {
    let mut arena = new_arena(1, 16);
    arena.initialize(false).unwrap();

    let value = H256(hex!(
        "ff00000000000000000000000000000000000000000000000000000000000001"
    ));
    arena.store_bytes32(32, &value).unwrap();

    assert_eq!(arena.load_bytes32(32).unwrap(), value);
    assert_eq!(
        arena.load_word(32).unwrap(),
        (U256::from(0xff) << 248) | U256::one()
    );
    assert_eq!(arena.accessible_size(), 64);
    assert_eq!(arena.load_bytes32(0).unwrap(), H256::zero());
}

#[test]
fn test_mstore8() {
    let mut arena = new_arena(1, 16);
    arena.initialize(false).unwrap();

    arena.store_word(0, U256::MAX).unwrap();
    arena.store_u8(31, 0x00).unwrap();

    assert_eq!(arena.load_word(0).unwrap(), U256::MAX - U256::from(0xff));
    assert_eq!(arena.accessible_size(), 63);
}

#[test]
fn test_mcopy() {
    {
        let mut arena = new_arena(1, 16);
        arena.initialize(false).unwrap();

        arena.store_word(0, U256::from(4)).unwrap();
        arena.copy(32, 0, 32).unwrap();

        assert_eq!(arena.load_word(32).unwrap(), U256::from(4));
        assert_eq!(arena.accessible_size(), 64);
    }

    {
        let mut arena = new_arena(1, 16);
        arena.initialize(false).unwrap();

        arena.store_word(32, U256::from(4)).unwrap();
        arena.copy(0, 32, 32).unwrap();

        assert_eq!(arena.load_word(0).unwrap(), U256::from(4));
        assert_eq!(arena.accessible_size(), 64);
    }

    {
        let mut arena = new_arena(1, 16);
        arena.initialize(false).unwrap();

        arena.store_word(0, U256::from(4)).unwrap();
        arena.copy(0, 0, 32).unwrap();

        assert_eq!(arena.load_word(0).unwrap(), U256::from(4));
        assert_eq!(arena.accessible_size(), 32);
    }

    {
        let mut arena = new_arena(1, 16);
        arena.initialize(false).unwrap();

        arena.copy(128, 0, 0).unwrap();

        assert_eq!(arena.accessible_size(), 128);
    }
}

#[test]
fn test_read_bytes() {
    let mut arena = new_arena(1, 16);
    arena.initialize(false).unwrap();

    arena.store_u32(0, 0x0102_0304).unwrap();

    assert_eq!(arena.read_bytes(28, 4).unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(arena.read_bytes(0, 4).unwrap(), vec![0; 4]);
}
