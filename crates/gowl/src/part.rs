//! Content tree nodes and multipart rendering.

use crate::config::RenderConfig;
use crate::content::Content;
use crate::error::{Context, Error, Result};
use crate::header::Header;

/// A node of the content tree.
///
/// A part carries either raw content or nested parts. A part with nested
/// parts needs a `Content-Type` field with a `boundary` parameter; this is
/// checked when rendering, never when building.
#[derive(Debug, Default)]
pub struct Part {
    /// Part header.
    pub header: Header,
    /// Raw body content, already encoded.
    pub content: Option<Content>,
    /// Nested parts, rendered between boundary delimiters.
    pub parts: Vec<Self>,
}

impl Part {
    /// Creates a part with the given header and no body.
    #[must_use]
    pub const fn new(header: Header) -> Self {
        Self {
            header,
            content: None,
            parts: Vec::new(),
        }
    }

    /// Sets the content, builder style.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<Content>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Replaces the content.
    pub fn set_content(&mut self, content: impl Into<Content>) {
        self.content = Some(content.into());
    }

    /// Appends a nested part, builder style.
    #[must_use]
    pub fn with_part(mut self, part: Self) -> Self {
        self.parts.push(part);
        self
    }

    /// Appends a nested part.
    pub fn add_part(&mut self, part: Self) {
        self.parts.push(part);
    }

    /// Returns true if the part has nested parts.
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        !self.parts.is_empty()
    }

    /// Renders the part and every nested part.
    ///
    /// The output is the header, then a blank line and the content if any,
    /// then for each nested part a blank line, the `--boundary` delimiter and
    /// the rendered part, and finally a blank line and the closing
    /// `--boundary--` delimiter. Nothing follows the closing delimiter.
    ///
    /// Stream content is drained, so a part holding a stream renders its
    /// body only once.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the header, the content stream,
    /// the boundary lookup or a nested part. No output is returned then.
    pub fn render(&mut self) -> Result<Vec<u8>> {
        self.render_with(&RenderConfig::default())
    }

    /// Renders the part with the given configuration.
    ///
    /// # Errors
    ///
    /// See [`Part::render`].
    pub fn render_with(&mut self, config: &RenderConfig) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.render_into(&mut buf, config)?;
        Ok(buf)
    }

    pub(crate) fn render_into(&mut self, buf: &mut Vec<u8>, config: &RenderConfig) -> Result<()> {
        let newline = config.newline();

        tracing::trace!(
            parts = self.parts.len(),
            has_content = self.content.is_some(),
            "rendering part"
        );

        self.header
            .render_into(buf, config)
            .map_err(|e| e.context(Context::RenderHeader))?;

        if let Some(content) = self.content.as_mut() {
            buf.extend_from_slice(newline);
            buf.extend_from_slice(newline);
            content.copy_into(buf).map_err(Error::ContentRead)?;
        }

        if self.parts.is_empty() {
            return Ok(());
        }

        let boundary = self
            .header
            .boundary()
            .map_err(|e| e.context(Context::RetrieveBoundary))?;
        let mut open = Vec::with_capacity(boundary.len() + 4);
        open.extend_from_slice(b"--");
        open.extend_from_slice(boundary.as_bytes());

        for (index, part) in self.parts.iter_mut().enumerate() {
            buf.extend_from_slice(newline);
            buf.extend_from_slice(newline);
            buf.extend_from_slice(&open);
            buf.extend_from_slice(newline);
            part.render_into(buf, config).map_err(|e| e.child(index))?;
        }

        buf.extend_from_slice(newline);
        buf.extend_from_slice(newline);
        buf.extend_from_slice(&open);
        buf.extend_from_slice(b"--");

        Ok(())
    }
}
