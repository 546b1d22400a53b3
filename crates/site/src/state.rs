//! Per-section load state.

use crate::error::ClientError;

/// What a renderer knows about one section of data.
///
/// A failed or empty section is never silently swapped for placeholder
/// content; callers that want a fallback ask for it with
/// [`LoadState::or_default_with`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    NotLoaded,
    Loaded(T),
    Empty,
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::NotLoaded
    }
}

impl<T> LoadState<T> {
    /// Build from a fetch whose "nothing there" answer is `None`.
    pub fn from_optional(result: Result<Option<T>, ClientError>) -> Self {
        match result {
            Ok(Some(value)) => LoadState::Loaded(value),
            Ok(None) => LoadState::Empty,
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// The loaded value, or `fallback()` for every other state.
    pub fn or_default_with(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            LoadState::Loaded(value) => value,
            _ => fallback(),
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Build from a list fetch; an empty list is [`LoadState::Empty`].
    pub fn from_list(result: Result<Vec<T>, ClientError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => LoadState::Empty,
            Ok(items) => LoadState::Loaded(items),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }
}
