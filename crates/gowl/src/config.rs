//! Render configuration types.

/// Line terminator emitted between header fields and around boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineEnding {
    /// Bare line feed (`\n`).
    #[default]
    Lf,
    /// Carriage return and line feed (`\r\n`), as SMTP DATA expects on the wire.
    CrLf,
}

impl LineEnding {
    /// Returns the terminator bytes.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Lf => b"\n",
            Self::CrLf => b"\r\n",
        }
    }
}

/// Options applied while rendering headers, parts and messages.
///
/// Content bytes are copied verbatim regardless of these options; only the
/// delimiters the renderer emits itself are affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Line terminator.
    pub line_ending: LineEnding,
}

impl RenderConfig {
    /// Creates the default configuration (`\n` line endings).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line_ending: LineEnding::Lf,
        }
    }

    /// Creates a configuration producing `\r\n` line endings.
    #[must_use]
    pub const fn crlf() -> Self {
        Self {
            line_ending: LineEnding::CrLf,
        }
    }

    /// Sets the line terminator.
    #[must_use]
    pub const fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Returns the line terminator bytes.
    pub(crate) const fn newline(&self) -> &'static [u8] {
        self.line_ending.as_bytes()
    }
}
