use tree_core::{AssetError, PlacardTextures, TextureSlot};

#[test]
fn request_is_idempotent() {
    let mut textures: PlacardTextures<u32> = PlacardTextures::new();
    assert!(textures.request(1));
    assert!(!textures.request(1));
    assert_eq!(textures.len(), 1);
    assert_eq!(textures.pending().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn success_replaces_the_placeholder_once() {
    let mut textures = PlacardTextures::new();
    textures.request(4);
    textures.resolve(4, Ok("first"));
    textures.resolve(4, Ok("second"));
    assert_eq!(textures.slot(4), Some(&TextureSlot::Loaded("first")));
    assert_eq!(textures.pending().count(), 0);
}

#[test]
fn failure_is_permanent() {
    let mut textures: PlacardTextures<u32> = PlacardTextures::new();
    textures.request(2);
    textures.resolve(
        2,
        Err(AssetError::Decode {
            path: "photos/2.png".into(),
            reason: "truncated".into(),
        }),
    );
    textures.resolve(2, Ok(7));
    match textures.slot(2) {
        Some(TextureSlot::Failed(msg)) => {
            assert!(msg.contains("photos/2.png"));
            assert!(msg.contains("truncated"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn unknown_ids_are_ignored() {
    let mut textures: PlacardTextures<u32> = PlacardTextures::new();
    textures.resolve(99, Ok(1));
    assert!(textures.is_empty());
}

#[test]
fn retain_drops_removed_placards() {
    let mut textures: PlacardTextures<u32> = PlacardTextures::new();
    for id in 0..5 {
        textures.request(id);
    }
    textures.retain_ids(&[1, 3]);
    assert_eq!(textures.len(), 2);
    assert!(textures.slot(0).is_none());
    assert!(textures.slot(3).is_some());
}
