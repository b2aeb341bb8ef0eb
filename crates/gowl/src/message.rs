//! Message root and top-level rendering.

use std::io::Write;

use crate::config::RenderConfig;
use crate::error::{Context, Result};
use crate::header::Header;
use crate::part::Part;

/// An email message: top-level header fields plus the root of the content tree.
#[derive(Debug, Default)]
pub struct Message {
    /// Message headers (From, To, Date, MIME-Version, ...).
    pub header: Header,
    /// Root part of the content tree.
    pub root: Part,
}

impl Message {
    /// Creates a new message.
    #[must_use]
    pub const fn new(header: Header, root: Part) -> Self {
        Self { header, root }
    }

    /// Renders the message.
    ///
    /// The root part's header follows the last message header line
    /// directly; no separator is inserted between the two blocks.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while rendering the message header or
    /// the root part.
    pub fn render(&mut self) -> Result<Vec<u8>> {
        self.render_with(&RenderConfig::default())
    }

    /// Renders the message with the given configuration.
    ///
    /// # Errors
    ///
    /// See [`Message::render`].
    pub fn render_with(&mut self, config: &RenderConfig) -> Result<Vec<u8>> {
        let mut buf = Vec::new();

        let rendered = self
            .header
            .render_into(&mut buf, config)
            .map_err(|e| e.context(Context::RenderMessageHeader))
            .and_then(|()| {
                self.root
                    .render_into(&mut buf, config)
                    .map_err(|e| e.context(Context::RenderMessageRoot))
            });

        match rendered {
            Ok(()) => {
                tracing::debug!(bytes = buf.len(), "rendered message");
                Ok(buf)
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to render message");
                Err(e)
            }
        }
    }

    /// Renders the message and writes it to `writer`.
    ///
    /// Rendering happens fully in memory first; nothing is written if it
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns a rendering error, or [`Error::Io`](crate::Error::Io) if
    /// writing fails.
    pub fn write_to<W: Write>(&mut self, writer: &mut W, config: &RenderConfig) -> Result<()> {
        let bytes = self.render_with(config)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use crate::field::Field;

    fn alternative_root(boundary_values: &[&str]) -> Part {
        Part::new(Header::new(vec![Field::new(
            "Content-Type",
            boundary_values.iter().copied(),
        )]))
        .with_part(
            Part::new(Header::new(vec![Field::new("Content-Type", ["text/plain"])]))
                .with_content("This is a test message."),
        )
        .with_part(
            Part::new(Header::new(vec![Field::new("Content-Type", ["text/html"])]))
                .with_content(r#"<div dir="ltr">This is a test message.</div>"#),
        )
    }

    fn addresses(to: &[&str]) -> Header {
        Header::new(vec![
            Field::new("From", ["Johny <john.smith@example.com>"]),
            Field::new("To", to.iter().copied()),
        ])
    }

    #[test]
    fn test_render() {
        let mut message = Message::new(
            addresses(&["David Doe <david.doe@example.com>"]),
            alternative_root(&["multipart/alternative", r#"boundary="part_12345""#]),
        );

        let want = r#"From: Johny <john.smith@example.com>
To: David Doe <david.doe@example.com>Content-Type: multipart/alternative; boundary="part_12345"

--part_12345
Content-Type: text/plain

This is a test message.

--part_12345
Content-Type: text/html

<div dir="ltr">This is a test message.</div>

--part_12345--"#;

        assert_eq!(String::from_utf8(message.render().unwrap()).unwrap(), want);
    }

    #[test]
    fn test_header_error() {
        let mut message = Message::new(
            addresses(&[]),
            alternative_root(&["multipart/alternative", r#"boundary="part_12345""#]),
        );

        let err = message.render().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoValues);
        assert!(matches!(
            err,
            Error::Context {
                context: Context::RenderMessageHeader,
                ..
            }
        ));
    }

    #[test]
    fn test_root_error() {
        let mut message = Message::new(
            addresses(&["David Doe <david.doe@example.com>"]),
            alternative_root(&["multipart/alternative"]),
        );

        let err = message.render().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoBoundary);
        assert!(matches!(
            err,
            Error::Context {
                context: Context::RenderMessageRoot,
                ..
            }
        ));
    }

    #[test]
    fn test_write_to() {
        let mut message = Message::new(
            Header::new(vec![Field::new("Subject", ["Hi"])]),
            Part::new(Header::new(vec![Field::new("Content-Type", ["text/plain"])]))
                .with_content("body"),
        );
        let mut out = Vec::new();
        message.write_to(&mut out, &RenderConfig::default()).unwrap();
        assert_eq!(out, b"Subject: HiContent-Type: text/plain\n\nbody");
    }

    #[test]
    fn test_write_to_writes_nothing_on_failure() {
        let mut message = Message::new(addresses(&[]), Part::default());
        let mut out = Vec::new();
        assert!(message.write_to(&mut out, &RenderConfig::default()).is_err());
        assert!(out.is_empty());
    }
}
