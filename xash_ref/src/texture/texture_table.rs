/// Texture lookup seam between the renderer and the texture subsystem.

use rustc_hash::FxHashMap;

use super::texture_descriptor::TextureDescriptor;

/// Read (and narrowly write) access to texture descriptors by host index
pub trait TextureLookup {
    /// Descriptor for a host texture index, `None` if unknown
    fn texture(&self, index: i32) -> Option<&TextureDescriptor>;

    /// Mutable descriptor for a host texture index, `None` if unknown
    fn texture_mut(&mut self, index: i32) -> Option<&mut TextureDescriptor>;

    /// Total GPU memory used by textures, in bytes
    fn memory_usage(&self) -> usize;
}

/// Simple index → descriptor table
///
/// Index 0 is never handed out so it can stand for "no texture".
#[derive(Debug, Default)]
pub struct TextureTable {
    textures: FxHashMap<i32, TextureDescriptor>,
    next_index: i32,
}

impl TextureTable {
    pub fn new() -> Self {
        Self { textures: FxHashMap::default(), next_index: 1 }
    }

    /// Add a descriptor at the next free index
    pub fn insert(&mut self, descriptor: TextureDescriptor) -> i32 {
        while self.textures.contains_key(&self.next_index) || self.next_index <= 0 {
            self.next_index = self.next_index.wrapping_add(1).max(1);
        }
        let index = self.next_index;
        self.textures.insert(index, descriptor);
        self.next_index = self.next_index.wrapping_add(1);
        index
    }

    /// Put a descriptor at a fixed index, returning the one it replaces
    pub fn insert_at(&mut self, index: i32, descriptor: TextureDescriptor) -> Option<TextureDescriptor> {
        self.textures.insert(index, descriptor)
    }

    pub fn remove(&mut self, index: i32) -> Option<TextureDescriptor> {
        self.textures.remove(&index)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Index of the first texture with the given name
    pub fn find(&self, name: &str) -> Option<i32> {
        self.textures
            .iter()
            .find(|(_, t)| t.name == name)
            .map(|(index, _)| *index)
    }
}

impl TextureLookup for TextureTable {
    fn texture(&self, index: i32) -> Option<&TextureDescriptor> {
        self.textures.get(&index)
    }

    fn texture_mut(&mut self, index: i32) -> Option<&mut TextureDescriptor> {
        self.textures.get_mut(&index)
    }

    fn memory_usage(&self) -> usize {
        self.textures.values().map(|t| t.size).sum()
    }
}

#[cfg(test)]
#[path = "texture_table_tests.rs"]
mod tests;
