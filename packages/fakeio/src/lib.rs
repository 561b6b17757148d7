//! In-memory I/O test doubles
//!
//! [`FakeWriter`] is a buffer-backed [`std::io::Write`] implementation whose
//! write, flush, sync and close operations can be told to fail on demand.
//! Use it to exercise error paths of code that writes to arbitrary sinks
//! without touching real files or sockets.

use std::fmt;
use std::io;

/// Buffer-backed writer with injectable failures.
///
/// Flushing and syncing drain the buffer, mirroring a writer that hands its
/// pending bytes to an underlying device.
#[derive(Default)]
pub struct FakeWriter {
    buf: Vec<u8>,
    err_on_write: bool,
    err_on_flush: bool,
    err_on_sync: bool,
    err_on_close: bool,
    /// Remaining writes accepted before every write starts failing
    fail_after: Option<usize>,
}

impl FakeWriter {
    /// Create an empty writer that never fails
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer that accepts `writes` successful writes, then fails
    /// every write after that
    #[must_use]
    pub fn fail_after(writes: usize) -> Self {
        Self {
            fail_after: Some(writes),
            ..Self::default()
        }
    }

    /// Make every subsequent write fail
    pub fn set_err_on_write(&mut self) -> &mut Self {
        self.err_on_write = true;
        self
    }

    /// Make every subsequent flush fail
    pub fn set_err_on_flush(&mut self) -> &mut Self {
        self.err_on_flush = true;
        self
    }

    /// Make every subsequent sync fail
    pub fn set_err_on_sync(&mut self) -> &mut Self {
        self.err_on_sync = true;
        self
    }

    /// Make every subsequent close fail
    pub fn set_err_on_close(&mut self) -> &mut Self {
        self.err_on_close = true;
        self
    }

    /// Write a string slice, returning the number of bytes accepted
    ///
    /// # Errors
    /// Fails when write failures have been armed.
    pub fn write_str(&mut self, s: &str) -> io::Result<usize> {
        io::Write::write(self, s.as_bytes())
    }

    /// Buffered bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Buffered contents, lossily decoded as UTF-8
    #[must_use]
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }

    /// Number of buffered bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Take the buffered contents, leaving the buffer empty
    pub fn reset_get(&mut self) -> String {
        let out = self.as_string();
        self.buf.clear();
        out
    }

    /// Sync buffered data, which discards it
    ///
    /// # Errors
    /// Fails when sync failures have been armed.
    pub fn sync(&mut self) -> io::Result<()> {
        if self.err_on_sync {
            return Err(fake_error("sync"));
        }
        self.buf.clear();
        Ok(())
    }

    /// Close the writer
    ///
    /// The buffer stays readable after closing.
    ///
    /// # Errors
    /// Fails when close failures have been armed.
    pub fn close(&mut self) -> io::Result<()> {
        if self.err_on_close {
            return Err(fake_error("close"));
        }
        Ok(())
    }

    fn write_allowed(&mut self) -> bool {
        if self.err_on_write {
            return false;
        }
        match self.fail_after.as_mut() {
            Some(0) => false,
            Some(remaining) => {
                *remaining -= 1;
                true
            }
            None => true,
        }
    }
}

impl io::Write for FakeWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if !self.write_allowed() {
            tracing::trace!(len = data.len(), "fake writer rejected write");
            return Err(fake_error("write"));
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.err_on_flush {
            return Err(fake_error("flush"));
        }
        self.buf.clear();
        Ok(())
    }
}

impl fmt::Debug for FakeWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeWriter")
            .field("buffered", &self.buf.len())
            .field("err_on_write", &self.err_on_write)
            .field("err_on_flush", &self.err_on_flush)
            .field("err_on_sync", &self.err_on_sync)
            .field("err_on_close", &self.err_on_close)
            .field("fail_after", &self.fail_after)
            .finish()
    }
}

fn fake_error(op: &str) -> io::Error {
    io::Error::other(format!("fake {op} error"))
}
