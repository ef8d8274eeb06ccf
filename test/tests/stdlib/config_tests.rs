use wevm_stdlib::{
    config::ArenaConfig,
    errors::ConfigError,
    host::VecLinearMemory,
    memory::{MemoryArena, Placement},
};

#[test]
fn test_config_from_json() {
    let config: ArenaConfig =
        serde_json::from_str(r#"{ "small_region_offset": 4096, "small_region_size": 8192 }"#)
            .unwrap();
    config.validate().unwrap();

    let mut arena = MemoryArena::new(VecLinearMemory::new(1, 4), config).unwrap();
    arena.initialize(false).unwrap();

    assert_eq!(arena.placement(), Some(Placement::Reserved));
    assert_eq!(arena.base(), 4096);
    assert_eq!(arena.capacity(), 8192);
}

#[test]
fn test_config_serialization() {
    let json = serde_json::to_value(ArenaConfig::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "small_region_offset": 1024, "small_region_size": 16384 })
    );
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = ArenaConfig {
        small_region_offset: 60_000,
        small_region_size: 16_384,
    };

    let error = MemoryArena::new(VecLinearMemory::new(1, 4), config).unwrap_err();
    assert_eq!(
        error,
        ConfigError::SmallRegionOutsideFirstPage {
            offset: 60_000,
            size: 16_384
        }
    );
}
