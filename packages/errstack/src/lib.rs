//! Errors carrying a call stack captured at construction
//!
//! This crate provides:
//! - [`Stack`]: raw return addresses captured cheaply, resolved lazily
//! - [`CapturePolicy`]: skip/trace depth with a process-wide default
//! - Rendering of stacks to any [`std::io::Write`] sink or a `String`
//! - [`StackError`]: an error value that owns its captured stack
//!
//! ```no_run
//! use errstack::{configure, skip_depth, trace_depth, StackError};
//!
//! configure([skip_depth(3), trace_depth(32)]);
//!
//! let err = StackError::new("disk full");
//! eprintln!("{err:#}");
//! ```

pub mod error;
pub mod logging;
pub mod policy;
pub mod stack;

pub use error::{Result, StackError};
pub use logging::LoggingTransformer;
pub use policy::{configure, reset_policy, skip_depth, trace_depth, CapturePolicy, PolicyOption};
pub use stack::{
    Address, Frames, Location, NativeSymbolizer, RenderError, ResolvedFrame, Stack, Symbolizer,
};
