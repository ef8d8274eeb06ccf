#![allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
use ethereum_types::U256;
use wevm_stdlib::{
    config::ArenaConfig, errors::MemoryError, host::VecLinearMemory, invocation::Invocation,
};

fn new_invocation() -> Invocation<VecLinearMemory> {
    let mut invocation =
        Invocation::new(VecLinearMemory::new(1, 16), ArenaConfig::default()).unwrap();
    invocation.arena_mut().initialize(false).unwrap();
    invocation
}

#[test]
fn test_solidity_prologue() {
    let mut invocation = new_invocation();

    // memoryguard(0x80) followed by mstore(0x40, 0x80)
    let guard = invocation.memory_guard(0x80).unwrap();
    assert_eq!(guard, 96);
    invocation.set_free_memory_pointer(0x80);
    invocation.arena_mut().store_u32(0x40, 0x80).unwrap();

    assert_eq!(invocation.arena().load_u32(0x40).unwrap(), 0x80);
    assert_eq!(invocation.arena().accessible_size(), 0x80);
}

#[test]
fn test_allocate_memory() {
    let mut invocation = new_invocation();
    invocation.set_free_memory_pointer(0x80);

    let first = invocation.allocate_memory(64).unwrap();
    let second = invocation.allocate_memory(5).unwrap();

    assert_eq!(first, 0x80);
    assert_eq!(second, 0xc0);
    assert_eq!(invocation.free_memory_pointer(), 0xe0);

    invocation
        .arena_mut()
        .store_word(second, U256::from(0xabcd))
        .unwrap();
    assert_eq!(
        invocation.arena().load_word(second).unwrap(),
        U256::from(0xabcd)
    );
}

#[test]
fn test_allocate_memory_overflow() {
    let mut invocation = new_invocation();
    invocation.set_free_memory_pointer(i32::MAX - 31);

    assert_eq!(
        invocation.allocate_memory(64),
        Err(MemoryError::AllocationOverflow {
            pointer: i32::MAX - 31,
            size: 64
        })
    );
}

#[test]
fn test_memory_size_pages() {
    let mut invocation =
        Invocation::new(VecLinearMemory::new(2, 16), ArenaConfig::default()).unwrap();
    assert_eq!(invocation.memory_size_pages(), 2);

    invocation.arena_mut().initialize(false).unwrap();
    assert_eq!(invocation.memory_size_pages(), 3);

    invocation.memory_guard(3 * 65536).unwrap();
    assert_eq!(invocation.memory_size_pages(), 5);
}
