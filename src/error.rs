//! Crate error type.
//!
//! Missing images and missing actions are content bugs, not transient
//! conditions: every constructor or operation that can hit one returns
//! [`CoreError`] and callers propagate it with `?`.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// An image id (or every id of a sequence prefix) is absent from the cache.
    ImageNotFound { id: String },
    /// An action is not present in an actor's action set.
    ActionNotFound { action: String },
    /// A frame sequence was built with zero frames.
    EmptyFrameSequence { what: String },
    /// An action manifest could not be read or parsed.
    Manifest(String),
    /// A configuration file could not be read or written.
    Config(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageNotFound { id } => write!(f, "image not found: {id}"),
            Self::ActionNotFound { action } => write!(f, "action not found: {action}"),
            Self::EmptyFrameSequence { what } => {
                write!(f, "empty frame sequence for {what}")
            }
            Self::Manifest(msg) => write!(f, "action manifest error: {msg}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl CoreError {
    pub fn image_not_found(id: impl Into<String>) -> Self {
        Self::ImageNotFound { id: id.into() }
    }

    pub fn action_not_found(action: impl Into<String>) -> Self {
        Self::ActionNotFound {
            action: action.into(),
        }
    }

    pub fn empty_sequence(what: impl Into<String>) -> Self {
        Self::EmptyFrameSequence { what: what.into() }
    }
}
