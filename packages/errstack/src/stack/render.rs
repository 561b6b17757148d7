//! Text rendering of captured stacks

use super::symbolize::{NativeSymbolizer, ResolvedFrame, Symbolizer};
use super::Stack;
use std::fmt;
use std::io;
use thiserror::Error;

/// Line written before the first frame of a non-empty stack
pub const HEADER: &str = "\nSTACK:\n";

/// A sink rejected part of a rendered stack
///
/// Rendering keeps going after a failed write, so `written` counts every byte
/// the sink accepted and `source` is the first failure.
#[derive(Debug, Error)]
#[error("stack render failed after {written} bytes: {source}")]
pub struct RenderError {
    /// Bytes the sink accepted
    pub written: usize,
    /// First write error reported by the sink
    #[source]
    pub source: io::Error,
}

/// Source position of the innermost captured frame
///
/// The default value, an empty file and line 0, means the position is
/// unknown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    /// Source file path
    pub file: String,
    /// Source line
    pub line: u32,
}

impl Location {
    /// Whether the location resolved to something
    #[must_use]
    pub fn is_known(&self) -> bool {
        !self.file.is_empty()
    }
}

impl From<ResolvedFrame> for Location {
    fn from(frame: ResolvedFrame) -> Self {
        Self {
            file: frame.file,
            line: frame.line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Counts accepted bytes and keeps the first write error
struct Tally<'w, W: ?Sized> {
    sink: &'w mut W,
    written: usize,
    error: Option<io::Error>,
}

impl<'w, W: io::Write + ?Sized> Tally<'w, W> {
    fn new(sink: &'w mut W) -> Self {
        Self {
            sink,
            written: 0,
            error: None,
        }
    }

    fn put(&mut self, mut buf: &[u8]) {
        while !buf.is_empty() {
            match self.sink.write(buf) {
                Ok(0) => {
                    self.fail(io::ErrorKind::WriteZero.into());
                    return;
                }
                Ok(n) => {
                    self.written += n;
                    buf = &buf[n..];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.fail(e);
                    return;
                }
            }
        }
    }

    fn fail(&mut self, error: io::Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn finish(self) -> Result<usize, RenderError> {
        match self.error {
            None => Ok(self.written),
            Some(source) => Err(RenderError {
                written: self.written,
                source,
            }),
        }
    }
}

impl Stack {
    /// Render the stack into `sink`, resolving frames from the running binary
    ///
    /// Writes nothing for an empty stack. Otherwise writes [`HEADER`] followed
    /// by one `"<function>()\n  <file>:<line>\n"` block per resolvable frame,
    /// innermost first.
    ///
    /// # Errors
    /// Returns [`RenderError`] if any write failed. The remaining frames are
    /// still attempted, and the error carries the bytes that were accepted.
    pub fn write_to<W: io::Write + ?Sized>(&self, sink: &mut W) -> Result<usize, RenderError> {
        self.write_to_with(sink, NativeSymbolizer)
    }

    /// [`Stack::write_to`] with an explicit symbolizer
    ///
    /// # Errors
    /// Same as [`Stack::write_to`].
    pub fn write_to_with<W, S>(&self, sink: &mut W, symbolizer: S) -> Result<usize, RenderError>
    where
        W: io::Write + ?Sized,
        S: Symbolizer,
    {
        if self.is_empty() {
            return Ok(0);
        }

        let mut tally = Tally::new(sink);
        tally.put(HEADER.as_bytes());
        for frame in self.frames_with(symbolizer) {
            let block = format!("{}()\n  {}:{}\n", frame.function, frame.file, frame.line);
            tally.put(block.as_bytes());
        }
        tally.finish()
    }

    /// Render the stack to a string
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(NativeSymbolizer)
    }

    /// [`Stack::render`] with an explicit symbolizer
    #[must_use]
    pub fn render_with<S: Symbolizer>(&self, symbolizer: S) -> String {
        let mut buf = Vec::new();
        if let Err(err) = self.write_to_with(&mut buf, symbolizer) {
            tracing::warn!(%err, "rendering into memory failed");
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Source position of the innermost frame
    ///
    /// Unknown when the stack is empty or its first address does not resolve.
    #[must_use]
    pub fn location(&self) -> Location {
        self.location_with(NativeSymbolizer)
    }

    /// [`Stack::location`] with an explicit symbolizer
    #[must_use]
    pub fn location_with<S: Symbolizer>(&self, symbolizer: S) -> Location {
        self.addresses()
            .first()
            .and_then(|&address| symbolizer.resolve(address))
            .map(Location::from)
            .unwrap_or_default()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
