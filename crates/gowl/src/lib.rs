//! # gowl
//!
//! MIME message rendering for email.
//!
//! ## Features
//!
//! - **Ordered headers**: fields render in insertion order, values joined with `"; "`
//! - **Multipart**: nested parts framed by the boundary of their parent's
//!   `Content-Type` field (RFC 2046)
//! - **Deferred validation**: building never fails; rendering reports the
//!   first problem with context
//! - **Content sources**: in-memory buffers or one-shot readers
//! - **Line endings**: `\n` by default, `\r\n` for the SMTP wire
//!
//! Content is copied verbatim. Transfer encoding, header folding and
//! delivery are left to the caller.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gowl::{ContentType, Field, Header, Message, Part};
//!
//! let root = Part::new(Header::new(vec![
//!     ContentType::multipart_alternative("part_12345").into(),
//! ]))
//! .with_part(
//!     Part::new(Header::new(vec![ContentType::text_plain().into()]))
//!         .with_content("Hello, World!"),
//! )
//! .with_part(
//!     Part::new(Header::new(vec![ContentType::text_html().into()]))
//!         .with_content("<p>Hello, World!</p>"),
//! );
//!
//! let mut message = Message::new(
//!     Header::new(vec![
//!         Field::new("From", ["sender@example.com"]),
//!         Field::new("To", ["recipient@example.com"]),
//!         Field::new("MIME-Version", ["1.0\n"]),
//!     ]),
//!     root,
//! );
//!
//! let bytes = message.render()?;
//! ```
//!
//! ### Streaming content
//!
//! ```ignore
//! use gowl::{Content, Header, Part};
//!
//! let file = std::fs::File::open("attachment.b64")?;
//! let mut part = Part::new(Header::default()).with_content(Content::stream(file));
//!
//! // The stream is drained here; rendering again yields an empty body.
//! let bytes = part.render()?;
//! ```
//!
//! ### Errors
//!
//! ```ignore
//! use gowl::ErrorKind;
//!
//! match message.render() {
//!     Ok(bytes) => send(bytes),
//!     Err(e) if e.kind() == ErrorKind::NoBoundary => fix_content_type(),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod config;
mod content;
mod content_type;
mod error;
mod field;
mod header;
mod message;
mod part;

pub use config::{LineEnding, RenderConfig};
pub use content::Content;
pub use content_type::ContentType;
pub use error::{Context, Error, ErrorKind, Result};
pub use field::Field;
pub use header::{CONTENT_TYPE, Header};
pub use message::Message;
pub use part::Part;
