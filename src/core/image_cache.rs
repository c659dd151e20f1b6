use std::collections::HashMap;

use egui::TextureHandle;

use crate::core::image_loader::ImageRequest;

/// Least-recently-used store of decoded images keyed by request.
pub struct ImageCache<V = TextureHandle> {
    entries: HashMap<ImageRequest, V>,
    max_cache_size: usize,
    access_order: Vec<ImageRequest>,
}

impl<V> ImageCache<V> {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_cache_size: max_size.max(1),
            access_order: Vec::new(),
        }
    }

    pub fn get(&mut self, key: &ImageRequest) -> Option<&V> {
        if !self.entries.contains_key(key) {
            return None;
        }
        self.touch(key);
        self.entries.get(key)
    }

    fn touch(&mut self, key: &ImageRequest) {
        if let Some(pos) = self.access_order.iter().position(|k| k == key) {
            let key = self.access_order.remove(pos);
            self.access_order.push(key);
        }
    }

    pub fn insert(&mut self, key: ImageRequest, value: V) {
        if self.entries.contains_key(&key) {
            self.entries.insert(key.clone(), value);
            self.touch(&key);
            return;
        }
        while self.entries.len() >= self.max_cache_size && !self.access_order.is_empty() {
            let oldest = self.access_order.remove(0);
            self.entries.remove(&oldest);
        }
        self.entries.insert(key.clone(), value);
        self.access_order.push(key);
    }

    /// Grows or shrinks capacity, evicting the oldest entries if needed.
    pub fn set_capacity(&mut self, max_size: usize) {
        self.max_cache_size = max_size.max(1);
        while self.entries.len() > self.max_cache_size && !self.access_order.is_empty() {
            let oldest = self.access_order.remove(0);
            self.entries.remove(&oldest);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.access_order.clear();
    }

    pub fn contains(&self, key: &ImageRequest) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
