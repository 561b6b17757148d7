//! Error constructors and accessors
//!
//! Every capturing constructor calls [`Stack::from_policy`] directly and is
//! never inlined. The default skip depth relies on exactly that frame layout:
//! the capture primitive, `Stack::from_policy`, then the constructor.

use super::types::{BoxedSource, StackError};
use crate::policy::CapturePolicy;
use crate::stack::{Location, Stack};

impl StackError {
    /// Create an error, capturing the stack with the process-wide policy
    #[inline(never)]
    #[must_use]
    pub fn new<M: Into<String>>(message: M) -> Self {
        let stack = Stack::from_policy(&CapturePolicy::current());
        Self {
            message: message.into(),
            source: None,
            stack: Some(stack),
        }
    }

    /// Create an error wrapping `source`, capturing the stack with the
    /// process-wide policy
    #[inline(never)]
    #[must_use]
    pub fn with_source<M, E>(message: M, source: E) -> Self
    where
        M: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let stack = Stack::from_policy(&CapturePolicy::current());
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
            stack: Some(stack),
        }
    }

    /// Create an error, capturing the stack with an explicit policy
    ///
    /// The shared default is left untouched.
    #[inline(never)]
    #[must_use]
    pub fn with_policy<M: Into<String>>(message: M, policy: &CapturePolicy) -> Self {
        let stack = Stack::from_policy(policy);
        Self {
            message: message.into(),
            source: None,
            stack: Some(stack),
        }
    }

    /// Create an error without capturing a stack
    #[must_use]
    pub fn without_stack<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
            source: None,
            stack: None,
        }
    }

    /// Attach a source error
    #[must_use]
    pub fn caused_by<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source) as BoxedSource);
        self
    }

    /// The error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The captured stack, if capture was not skipped
    #[must_use]
    pub fn stack(&self) -> Option<&Stack> {
        self.stack.as_ref()
    }

    /// Source position of the innermost captured frame
    ///
    /// Unknown when no stack was captured.
    #[must_use]
    pub fn location(&self) -> Location {
        self.stack.as_ref().map(Stack::location).unwrap_or_default()
    }
}
