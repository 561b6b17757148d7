//! Address to source-location resolution

use super::Address;
use std::ffi::c_void;
use std::slice;

/// File name reported when a symbol has no debug info
pub const UNKNOWN_FILE: &str = "?";

/// Human-readable description of one frame
///
/// Derived on demand from an [`Address`] and never stored in a
/// [`crate::Stack`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedFrame {
    /// Demangled function name, without the hash suffix
    pub function: String,
    /// Source file path, or [`UNKNOWN_FILE`]
    pub file: String,
    /// Source line, or 0 when unknown
    pub line: u32,
}

/// Resolves raw return addresses into frames
pub trait Symbolizer {
    /// Resolve one address, or `None` if no symbol covers it
    fn resolve(&self, address: Address) -> Option<ResolvedFrame>;
}

impl<S: Symbolizer + ?Sized> Symbolizer for &S {
    fn resolve(&self, address: Address) -> Option<ResolvedFrame> {
        (**self).resolve(address)
    }
}

/// Resolves addresses against the running binary's debug info
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeSymbolizer;

impl Symbolizer for NativeSymbolizer {
    fn resolve(&self, address: Address) -> Option<ResolvedFrame> {
        let mut resolved = None;
        // `backtrace::resolve` steps back from the return address itself.
        // With inlining several symbols come back; the first is the innermost.
        backtrace::resolve(address.get() as *mut c_void, |symbol| {
            if resolved.is_some() {
                return;
            }
            let Some(name) = symbol.name() else {
                return;
            };
            resolved = Some(ResolvedFrame {
                function: format!("{name:#}"),
                file: symbol
                    .filename()
                    .map_or_else(|| UNKNOWN_FILE.to_string(), |p| p.display().to_string()),
                line: symbol.lineno().unwrap_or(0),
            });
        });
        resolved
    }
}

/// Lazily resolved frames of a [`crate::Stack`]
///
/// Addresses that fail to resolve are skipped.
pub struct Frames<'a, S> {
    addresses: slice::Iter<'a, Address>,
    symbolizer: S,
}

impl<'a, S> Frames<'a, S> {
    pub(super) fn new(addresses: &'a [Address], symbolizer: S) -> Self {
        Self {
            addresses: addresses.iter(),
            symbolizer,
        }
    }
}

impl<S: Symbolizer> Iterator for Frames<'_, S> {
    type Item = ResolvedFrame;

    fn next(&mut self) -> Option<Self::Item> {
        for &address in self.addresses.by_ref() {
            if let Some(frame) = self.symbolizer.resolve(address) {
                return Some(frame);
            }
            tracing::trace!(?address, "skipping unresolvable frame");
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.addresses.size_hint().1)
    }
}
