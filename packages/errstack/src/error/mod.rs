//! Errors that carry a call stack captured at construction
//!
//! Provides:
//! - [`StackError`], an error owning an optional [`crate::Stack`]
//! - Constructors capturing with the shared or an explicit policy
//! - `err!`, `bail!` and `ensure!` macros that capture at the call site

pub mod constructors;
pub mod display;
pub mod macros;
pub mod types;

pub use types::{Result, StackError};
