//! Display and trait implementations for StackError

use super::types::StackError;
use std::fmt;

/// Writes the message; the alternate form (`{:#}`) adds the source and the
/// rendered stack.
impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;

        if f.alternate() {
            if let Some(source) = &self.source {
                write!(f, "\nCaused by: {source}")?;
            }
            if let Some(stack) = &self.stack {
                write!(f, "{stack}")?;
            }
        }

        Ok(())
    }
}

/// Always writes the message, the source and the rendered stack.
impl fmt::Debug for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {source:?}")?;
        }
        if let Some(stack) = &self.stack {
            write!(f, "{stack}")?;
        }

        Ok(())
    }
}

impl std::error::Error for StackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
