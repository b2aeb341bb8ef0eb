//! Error types for rendering operations.

use std::fmt;
use std::io;

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Rendering step an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Rendering the header of a part.
    RenderHeader,
    /// Looking up the multipart boundary of a part.
    RetrieveBoundary,
    /// Rendering the top-level header of a message.
    RenderMessageHeader,
    /// Rendering the root part of a message.
    RenderMessageRoot,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RenderHeader => write!(f, "render header"),
            Self::RetrieveBoundary => write!(f, "retrieve boundary"),
            Self::RenderMessageHeader => write!(f, "render message header"),
            Self::RenderMessageRoot => write!(f, "render message root part"),
        }
    }
}

/// Root cause of an [`Error`], with every context layer removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field had no values.
    NoValues,
    /// A multipart header had no boundary.
    NoBoundary,
    /// A content stream failed while being drained.
    ContentRead,
    /// Writing the rendered bytes failed.
    Io,
}

/// Rendering error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field has no values to render.
    #[error("the attribute values of field {0:?} are empty")]
    NoValues(String),

    /// The header has no `Content-Type` field with a boundary parameter.
    #[error("the header has no Content-Type field with boundary parameter")]
    NoBoundary,

    /// The content stream of a part returned an error.
    #[error("failed to read content: {0}")]
    ContentRead(#[source] io::Error),

    /// A nested part failed to render.
    #[error("failed to render part {index}: {source}")]
    ChildRender {
        /// Position of the failing part among its siblings.
        index: usize,
        /// Error raised by the nested part.
        #[source]
        source: Box<Self>,
    },

    /// An error raised in a specific rendering step.
    #[error("failed to {context}: {source}")]
    Context {
        /// Step the error was raised in.
        context: Context,
        /// Underlying error.
        #[source]
        source: Box<Self>,
    },

    /// I/O error while writing rendered output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Wraps the error with the rendering step it was raised in.
    #[must_use]
    pub fn context(self, context: Context) -> Self {
        Self::Context {
            context,
            source: Box::new(self),
        }
    }

    /// Wraps the error as a failure of the nested part at `index`.
    #[must_use]
    pub fn child(self, index: usize) -> Self {
        Self::ChildRender {
            index,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping every context layer.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut err = self;
        while let Self::ChildRender { source, .. } | Self::Context { source, .. } = err {
            err = source.as_ref();
        }
        err
    }

    /// Returns the kind of the root cause.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoValues(_) => ErrorKind::NoValues,
            Self::NoBoundary => ErrorKind::NoBoundary,
            Self::ContentRead(_) => ErrorKind::ContentRead,
            Self::Io(_) => ErrorKind::Io,
            Self::ChildRender { source, .. } | Self::Context { source, .. } => source.kind(),
        }
    }

    /// Returns true if the error passed through a nested part.
    #[must_use]
    pub fn is_child_failure(&self) -> bool {
        let mut err = self;
        loop {
            match err {
                Self::ChildRender { .. } => return true,
                Self::Context { source, .. } => err = source.as_ref(),
                _ => return false,
            }
        }
    }
}
