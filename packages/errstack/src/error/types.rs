//! Core error type

use crate::stack::Stack;

/// Boxed source error attached to a [`StackError`]
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error with a message, an optional source and an optional captured stack
pub struct StackError {
    pub(super) message: String,
    pub(super) source: Option<BoxedSource>,
    /// Stack captured at construction, absent when capture was skipped
    pub(super) stack: Option<Stack>,
}

/// Result type alias defaulting to [`StackError`]
pub type Result<T, E = StackError> = std::result::Result<T, E>;
