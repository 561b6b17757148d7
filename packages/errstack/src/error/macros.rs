//! Macros for error creation and handling
//!
//! The macros expand at the call site, so the innermost captured frame is the
//! caller's own function.

/// Create a [`StackError`](crate::StackError) from a format string
#[macro_export]
macro_rules! err {
    ($msg:literal $(,)?) => {
        $crate::StackError::new(format!($msg))
    };
    ($fmt:literal, $($arg:tt)+) => {
        $crate::StackError::new(format!($fmt, $($arg)+))
    };
    ($msg:expr $(,)?) => {
        $crate::StackError::new($msg)
    };
}

/// Return early with an error built by [`err!`]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return ::std::result::Result::Err($crate::err!($($arg)+).into())
    };
}

/// Return early with an error if a condition does not hold
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::bail!($($arg)+);
        }
    };
}
