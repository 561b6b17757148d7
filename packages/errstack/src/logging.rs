//! env_logger setup and error reporting helpers
//!
//! Configure levels with the `RUST_LOG` environment variable, e.g.
//! `RUST_LOG=errstack=debug` to include full stack traces in reports.

use crate::error::StackError;
use log::{debug, error, info};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points for applications reporting [`StackError`]s
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging (call once at application startup)
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; later calls are ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Report an error at error level, with its full stack at debug level
    pub fn log_stack_error(err: &StackError) {
        error!("{}", Self::summary(err));

        if let Some(stack) = err.stack().filter(|s| !s.is_empty()) {
            debug!("{}{stack}", err.message());
        }
    }

    fn summary(err: &StackError) -> String {
        let location = err.location();
        if location.is_known() {
            format!("{} (at {location})", err.message())
        } else {
            err.message().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_without_stack() {
        LoggingTransformer::init_test();

        let err = StackError::without_stack("plain failure");
        assert_eq!(LoggingTransformer::summary(&err), "plain failure");
    }

    #[test]
    fn test_summary_includes_location() {
        LoggingTransformer::init_test();

        let (err, line) = (StackError::new("captured failure"), line!());
        let summary = LoggingTransformer::summary(&err);
        assert!(summary.starts_with("captured failure (at "), "got {summary}");
        assert!(
            summary.ends_with(&format!("logging.rs:{line})")),
            "got {summary}"
        );
    }

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        // These should not panic and should produce log output
        LoggingTransformer::log_stack_error(&StackError::new("captured failure"));
        LoggingTransformer::log_stack_error(&StackError::without_stack("bare failure"));
    }
}
