//! Behaviour of the fake writer and its failure injection

use fakeio::FakeWriter;
use std::io::Write;

#[test]
fn test_write_flush_sync_close() {
    let mut w = FakeWriter::new();
    w.write_all(b"hello").expect("write should succeed");
    assert_eq!(w.as_string(), "hello");

    assert!(w.flush().is_ok());
    assert!(w.sync().is_ok());
    assert_eq!(w.as_string(), "");
    assert!(w.close().is_ok());

    let n = w.write_str("hello").expect("write_str should succeed");
    assert_eq!(n, 5);
    assert_eq!(w.reset_get(), "hello");
    assert!(w.is_empty());
}

#[test]
fn test_armed_failures() {
    let mut w = FakeWriter::new();

    w.set_err_on_write();
    assert!(w.write(b"hello").is_err());
    assert_eq!(w.as_string(), "");

    w.set_err_on_flush();
    assert!(w.flush().is_err());

    w.set_err_on_sync();
    assert!(w.sync().is_err());

    w.set_err_on_close();
    let err = w.close().expect_err("close should fail once armed");
    assert_eq!(err.to_string(), "fake close error");
}

#[test]
fn test_failures_keep_buffer() {
    let mut w = FakeWriter::new();
    w.write_all(b"kept").expect("write should succeed");
    w.set_err_on_flush().set_err_on_sync();

    assert!(w.flush().is_err());
    assert!(w.sync().is_err());
    assert_eq!(w.as_bytes(), b"kept");
}

#[test]
fn test_fail_after() {
    let mut w = FakeWriter::fail_after(2);
    assert!(w.write(b"a").is_ok());
    assert!(w.write(b"b").is_ok());
    assert!(w.write(b"c").is_err());
    assert!(w.write(b"d").is_err());
    assert_eq!(w.as_string(), "ab");
    assert_eq!(w.len(), 2);
}
