//! Raw body content of a part.

use std::fmt;
use std::io::{self, Read};

use bytes::Bytes;

/// Already-encoded body bytes of a part.
///
/// The renderer copies content verbatim; transfer encoding is the caller's
/// job.
pub enum Content {
    /// In-memory bytes. Left in place by rendering, so renders repeat.
    Buffer(Bytes),
    /// Sequential one-shot reader. Rendering drains it, so a second render
    /// sees an exhausted stream.
    Stream(Box<dyn Read + Send>),
}

impl Content {
    /// Wraps a reader as one-shot content.
    pub fn stream(reader: impl Read + Send + 'static) -> Self {
        Self::Stream(Box::new(reader))
    }

    /// Returns true if rendering consumes this content.
    #[must_use]
    pub const fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    /// Appends the content bytes to `buf`, draining streams.
    pub(crate) fn copy_into(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        match self {
            Self::Buffer(bytes) => {
                buf.extend_from_slice(bytes);
                Ok(bytes.len())
            }
            Self::Stream(reader) => reader.read_to_end(buf),
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer(bytes) => f.debug_tuple("Buffer").field(&bytes.len()).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl From<Bytes> for Content {
    fn from(bytes: Bytes) -> Self {
        Self::Buffer(bytes)
    }
}

impl From<Vec<u8>> for Content {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Buffer(bytes.into())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Buffer(text.into())
    }
}

impl From<&'static str> for Content {
    fn from(text: &'static str) -> Self {
        Self::Buffer(Bytes::from_static(text.as_bytes()))
    }
}

impl From<&'static [u8]> for Content {
    fn from(bytes: &'static [u8]) -> Self {
        Self::Buffer(Bytes::from_static(bytes))
    }
}
