//! Captured call stacks
//!
//! A [`Stack`] stores raw return addresses only. Symbol resolution is
//! deferred until the stack is iterated or rendered, which keeps capture
//! cheap on error construction paths.

mod address;
mod capture;
pub mod render;
pub mod symbolize;

pub use address::Address;
pub use render::{Location, RenderError, HEADER};
pub use symbolize::{Frames, NativeSymbolizer, ResolvedFrame, Symbolizer, UNKNOWN_FILE};

use crate::policy::CapturePolicy;

/// Immutable snapshot of return addresses, innermost frame first
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Stack {
    addresses: Box<[Address]>,
}

impl Stack {
    /// Capture the current stack
    ///
    /// With `skip == 0` the first address is the direct caller of this
    /// function. At most `depth` addresses are kept; a shallower stack yields
    /// fewer.
    #[inline(never)]
    #[must_use]
    pub fn capture(skip: usize, depth: usize) -> Self {
        // Frame 0 is the walker, frame 1 is this function
        let addresses = capture::trace_addresses(skip.saturating_add(2), depth);
        Self::from(addresses)
    }

    /// Capture the current stack as described by `policy`
    ///
    /// Skip counting starts at the capture primitive, so a skip depth of 2
    /// begins at the caller of this function.
    #[inline(never)]
    #[must_use]
    pub fn from_policy(policy: &CapturePolicy) -> Self {
        let addresses = capture::trace_addresses(policy.skip_depth, policy.trace_depth);
        Self::from(addresses)
    }

    /// Build a stack from addresses captured elsewhere
    pub fn from_addresses<I>(addresses: I) -> Self
    where
        I: IntoIterator<Item = Address>,
    {
        Self {
            addresses: addresses.into_iter().collect(),
        }
    }

    /// Number of captured addresses
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Whether nothing was captured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Captured addresses, innermost first
    #[must_use]
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Resolve frames lazily from the running binary
    pub fn frames(&self) -> Frames<'_, NativeSymbolizer> {
        self.frames_with(NativeSymbolizer)
    }

    /// Resolve frames lazily with `symbolizer`
    pub fn frames_with<S: Symbolizer>(&self, symbolizer: S) -> Frames<'_, S> {
        Frames::new(&self.addresses, symbolizer)
    }
}

impl From<Vec<Address>> for Stack {
    fn from(addresses: Vec<Address>) -> Self {
        Self {
            addresses: addresses.into_boxed_slice(),
        }
    }
}
