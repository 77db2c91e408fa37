//! Image cache collaborator.
//!
//! The core never decodes image files. It consumes images through the
//! [`ImageSource`] trait: fetch a single image by id, or fetch the numbered
//! sequence that shares a prefix (`prefix00.png`, `prefix01.png`, ...).
//!
//! [`ImageStore`] is the in-memory implementation used by the headless host
//! and by tests. It is populated before gameplay starts and then only read,
//! so entities can share it by reference without synchronization.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::error::CoreError;

/// Handle to one loaded image.
///
/// Cloning is cheap: the id is reference counted and the pixel data lives in
/// whatever backend the host uses. The core only needs the size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    pub id: Arc<str>,
    pub width: u32,
    pub height: u32,
}

impl Image {
    pub fn new(id: impl Into<Arc<str>>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// Id of frame `index` in the sequence named by `prefix`.
pub fn sequence_image_id(prefix: &str, index: usize) -> String {
    format!("{prefix}{index:02}.png")
}

/// Read access to a populated image cache.
pub trait ImageSource {
    /// Ids currently registered.
    fn registered_images(&self) -> Vec<&str>;

    fn image_exists(&self, id: &str) -> bool;

    /// Fetch one image. Fails with [`CoreError::ImageNotFound`] if absent.
    fn get_image(&self, id: &str) -> Result<Image, CoreError>;

    /// Fetch `prefix00.png`, `prefix01.png`, ... stopping at the first
    /// missing index. The result may be empty.
    fn get_image_sequence(&self, prefix: &str) -> Vec<Image> {
        let mut images = Vec::new();
        loop {
            let id = sequence_image_id(prefix, images.len());
            match self.get_image(&id) {
                Ok(image) => images.push(image),
                Err(_) => break,
            }
        }
        images
    }
}

/// In-memory image cache keyed by id.
#[derive(Resource, Debug, Default, Clone)]
pub struct ImageStore {
    pub map: FxHashMap<String, Image>,
}

impl ImageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        ImageStore {
            map: FxHashMap::default(),
        }
    }

    /// Register an image of the given size under `id`.
    pub fn insert(&mut self, id: impl Into<String>, width: u32, height: u32) {
        let id = id.into();
        let image = Image::new(id.as_str(), width, height);
        self.map.insert(id, image);
    }

    /// Register `count` equally sized frames named after `prefix`.
    pub fn insert_sequence(&mut self, prefix: &str, count: usize, width: u32, height: u32) {
        for index in 0..count {
            self.insert(sequence_image_id(prefix, index), width, height);
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl ImageSource for ImageStore {
    fn registered_images(&self) -> Vec<&str> {
        self.map.keys().map(String::as_str).collect()
    }

    fn image_exists(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    fn get_image(&self, id: &str) -> Result<Image, CoreError> {
        self.map
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::image_not_found(id))
    }
}
