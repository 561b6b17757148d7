//! Stack capture policy and the process-wide default
//!
//! The default policy lives behind an [`ArcSwap`], so captures read it without
//! locking. It is meant to be configured once at startup, before errors are
//! constructed concurrently. Racing two [`configure`] calls loses one of the
//! updates, and a capture running alongside [`configure`] may observe either
//! the old or the new policy.

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default number of frames skipped by policy-driven captures
///
/// Counting from the capture primitive: the primitive itself, its internal
/// caller ([`crate::Stack::from_policy`]) and the error constructor.
pub const DEFAULT_SKIP_DEPTH: usize = 3;

/// Default maximum number of frames retained by one capture
pub const DEFAULT_TRACE_DEPTH: usize = 20;

static DEFAULT_POLICY: Lazy<ArcSwap<CapturePolicy>> =
    Lazy::new(|| ArcSwap::from_pointee(CapturePolicy::default()));

/// How many frames a capture discards and how many it keeps
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapturePolicy {
    /// Frames discarded from the innermost end, counted from the capture
    /// primitive's own frame
    #[serde(default = "default_skip_depth")]
    pub skip_depth: usize,
    /// Maximum frames retained
    #[serde(default = "default_trace_depth")]
    pub trace_depth: usize,
}

fn default_skip_depth() -> usize {
    DEFAULT_SKIP_DEPTH
}

fn default_trace_depth() -> usize {
    DEFAULT_TRACE_DEPTH
}

impl Default for CapturePolicy {
    fn default() -> Self {
        Self {
            skip_depth: default_skip_depth(),
            trace_depth: default_trace_depth(),
        }
    }
}

impl CapturePolicy {
    /// Snapshot of the process-wide default policy
    #[must_use]
    pub fn current() -> Self {
        **DEFAULT_POLICY.load()
    }

    /// Copy of this policy with a different skip depth
    #[must_use]
    pub fn with_skip_depth(mut self, skip_depth: usize) -> Self {
        self.skip_depth = skip_depth;
        self
    }

    /// Copy of this policy with a different trace depth
    #[must_use]
    pub fn with_trace_depth(mut self, trace_depth: usize) -> Self {
        self.trace_depth = trace_depth;
        self
    }
}

/// A single mutation applied to a policy by [`configure`]
pub type PolicyOption = Box<dyn FnOnce(&mut CapturePolicy) + Send>;

/// Option setting the skip depth
#[must_use]
pub fn skip_depth(n: usize) -> PolicyOption {
    Box::new(move |policy| policy.skip_depth = n)
}

/// Option setting the trace depth
#[must_use]
pub fn trace_depth(n: usize) -> PolicyOption {
    Box::new(move |policy| policy.trace_depth = n)
}

/// Apply `options` in order to the process-wide default policy
///
/// The updated policy is published in one step once every option has run.
/// Call this during startup; see the module docs for the concurrency
/// contract.
pub fn configure<I>(options: I)
where
    I: IntoIterator<Item = PolicyOption>,
{
    let mut policy = CapturePolicy::current();
    for option in options {
        option(&mut policy);
    }
    DEFAULT_POLICY.store(Arc::new(policy));
    tracing::debug!(
        skip_depth = policy.skip_depth,
        trace_depth = policy.trace_depth,
        "capture policy updated"
    );
}

/// Restore the built-in default policy
pub fn reset_policy() {
    DEFAULT_POLICY.store(Arc::new(CapturePolicy::default()));
    tracing::debug!("capture policy reset to defaults");
}
