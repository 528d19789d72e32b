//! Texture store resource.
//!
//! Owns every loaded texture for the lifetime of the program. Entities
//! reference textures by string key and never hold handles themselves, so
//! many layers can share one bitmap and nothing but the store can drop it.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Texture2D, Vector2};
use rustc_hash::FxHashMap;

/// Loaded textures keyed by string IDs.
///
/// Pixel sizes are recorded at insert time so composition code can resolve
/// bitmap dimensions without touching the GPU handles.
#[derive(Resource, Default)]
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
    sizes: FxHashMap<String, Vector2>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        let key = key.into();
        let size = Vector2::new(texture.width as f32, texture.height as f32);
        self.sizes.insert(key.clone(), size);
        self.textures.insert(key, texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.textures.get(key)
    }

    /// Pixel dimensions of a loaded texture.
    pub fn size_of(&self, key: &str) -> Option<Vector2> {
        self.sizes.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
