//! Ordered, fixed-length list of frames for one visual action.

use std::ops::Index;
use std::sync::Arc;

use crate::error::CoreError;
use crate::resources::imagestore::{Image, ImageSource, sequence_image_id};

/// Immutable, non-empty sequence of images.
///
/// Cloning shares the underlying slice, so several cycles or entities can
/// reuse one loaded sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSequence {
    frames: Arc<[Image]>,
}

impl FrameSequence {
    /// Build a sequence from `frames`. `what` names it in the error when the
    /// list is empty.
    pub fn new(frames: Vec<Image>, what: &str) -> Result<Self, CoreError> {
        if frames.is_empty() {
            return Err(CoreError::empty_sequence(what));
        }
        Ok(Self {
            frames: frames.into(),
        })
    }

    /// One-frame sequence.
    pub fn single(image: Image) -> Self {
        Self {
            frames: Arc::from(vec![image]),
        }
    }

    /// Load the numbered sequence named by `prefix`. An empty result is
    /// reported as a missing first frame.
    pub fn from_source(source: &impl ImageSource, prefix: &str) -> Result<Self, CoreError> {
        let frames = source.get_image_sequence(prefix);
        if frames.is_empty() {
            return Err(CoreError::image_not_found(sequence_image_id(prefix, 0)));
        }
        Self::new(frames, prefix)
    }

    /// Load a single image as a one-frame sequence.
    pub fn from_image(source: &impl ImageSource, id: &str) -> Result<Self, CoreError> {
        Ok(Self::single(source.get_image(id)?))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.frames.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Image> {
        self.frames.get(index)
    }

    pub fn first(&self) -> &Image {
        &self.frames[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Image> {
        self.frames.iter()
    }
}

impl Index<usize> for FrameSequence {
    type Output = Image;

    fn index(&self, index: usize) -> &Image {
        &self.frames[index]
    }
}
