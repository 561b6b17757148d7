//! StackError construction, display and the capture macros

use errstack::{bail, ensure, err, CapturePolicy, StackError};
use std::error::Error as _;
use std::io;

#[test]
fn test_new_points_at_construction_site() {
    let (err, line) = (StackError::new("boom"), line!());

    let stack = err.stack().expect("stack should be captured");
    assert!(!stack.is_empty());
    assert!(stack.len() <= CapturePolicy::default().trace_depth);

    let location = err.location();
    assert!(location.file.ends_with("error_test.rs"), "got {location}");
    assert_eq!(location.line, line);
}

#[test]
fn test_macro_points_at_call_site() {
    let value = 7;
    let (err, line) = (err!("bad value {}", value), line!());

    assert_eq!(err.message(), "bad value 7");
    assert!(err.location().file.ends_with("error_test.rs"));
    assert_eq!(err.location().line, line);
}

#[test]
fn test_display_shows_message_only() {
    let err = StackError::new("plain");
    assert_eq!(err.to_string(), "plain");

    let detailed = format!("{err:#}");
    assert!(detailed.starts_with("plain\nSTACK:\n"), "got {detailed}");
    assert_eq!(format!("{err:?}"), detailed);
}

#[test]
fn test_debug_includes_source_and_stack() {
    let err = StackError::with_source("load failed", io::Error::other("disk gone"));
    assert_eq!(err.to_string(), "load failed");

    let debug = format!("{err:?}");
    assert!(debug.starts_with("load failed\nCaused by: "), "got {debug}");
    assert!(debug.contains("disk gone"), "got {debug}");
    assert!(debug.contains("\nSTACK:\n"), "got {debug}");
    assert_eq!(format!("{err:#?}"), debug);
}

#[test]
fn test_without_stack() {
    let err = StackError::without_stack("quiet");
    assert!(err.stack().is_none());
    assert!(!err.location().is_known());
    assert_eq!(format!("{err:#}"), "quiet");
}

#[test]
fn test_source_is_exposed() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "missing file");
    let err = StackError::with_source("load failed", io_err);

    let source = err.source().expect("source should be set");
    assert_eq!(source.to_string(), "missing file");
    assert!(format!("{err:#}").starts_with("load failed\nCaused by: missing file\nSTACK:\n"));

    let err = StackError::without_stack("outer").caused_by(io::Error::other("inner"));
    assert_eq!(format!("{err:#}"), "outer\nCaused by: inner");
}

#[test]
fn test_policy_override() {
    let policy = CapturePolicy::default().with_trace_depth(1);
    let err = StackError::with_policy("one frame", &policy);
    assert_eq!(err.stack().map(|s| s.len()), Some(1));

    let policy = CapturePolicy::default().with_trace_depth(0);
    let err = StackError::with_policy("no frames", &policy);
    let stack = err.stack().expect("capture was requested");
    assert!(stack.is_empty());
    assert_eq!(format!("{err:#}"), "no frames");
    assert!(!err.location().is_known());
}

fn check_positive(n: i32) -> errstack::Result<i32> {
    ensure!(n > 0, "expected a positive number, got {}", n);
    Ok(n)
}

fn always_fails() -> errstack::Result<()> {
    bail!("gave up");
}

#[test]
fn test_bail_and_ensure() {
    assert_eq!(check_positive(3).ok(), Some(3));

    let err = check_positive(-1).expect_err("negative input should fail");
    assert_eq!(err.message(), "expected a positive number, got -1");

    let err = always_fails().expect_err("bail returns an error");
    assert_eq!(err.message(), "gave up");
    let frame = err
        .stack()
        .and_then(|s| s.frames().next())
        .expect("frame should resolve");
    assert!(frame.function.ends_with("always_fails"), "got {}", frame.function);
}
