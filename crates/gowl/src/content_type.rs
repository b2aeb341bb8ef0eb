//! Content-Type field construction.

use std::fmt;

use crate::field::Field;
use crate::header::CONTENT_TYPE;

/// Media type with ordered parameters, convertible into a `Content-Type` field.
///
/// Parameters keep insertion order and are always rendered quoted
/// (`key="value"`). Values are not escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    mime: String,
    parameters: Vec<(String, String)>,
}

impl ContentType {
    /// Creates a content type with no parameters (e.g. `"text/plain"`).
    #[must_use]
    pub fn new(mime: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            parameters: Vec::new(),
        }
    }

    /// Creates a text/plain content type with UTF-8 charset.
    #[must_use]
    pub fn text_plain() -> Self {
        Self::new("text/plain").with_parameter("charset", "UTF-8")
    }

    /// Creates a text/html content type with UTF-8 charset.
    #[must_use]
    pub fn text_html() -> Self {
        Self::new("text/html").with_parameter("charset", "UTF-8")
    }

    /// Creates a multipart/mixed content type with boundary.
    #[must_use]
    pub fn multipart_mixed(boundary: impl Into<String>) -> Self {
        Self::new("multipart/mixed").with_parameter("boundary", boundary)
    }

    /// Creates a multipart/alternative content type with boundary.
    #[must_use]
    pub fn multipart_alternative(boundary: impl Into<String>) -> Self {
        Self::new("multipart/alternative").with_parameter("boundary", boundary)
    }

    /// Creates a multipart/related content type with boundary.
    #[must_use]
    pub fn multipart_related(boundary: impl Into<String>) -> Self {
        Self::new("multipart/related").with_parameter("boundary", boundary)
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((key.into(), value.into()));
        self
    }

    /// Returns the media type.
    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Returns the first parameter named `key`.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the boundary parameter if present.
    #[must_use]
    pub fn boundary(&self) -> Option<&str> {
        self.parameter("boundary")
    }

    /// Checks if this is a multipart content type.
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        self.mime
            .get(..10)
            .is_some_and(|main| main.eq_ignore_ascii_case("multipart/"))
    }
}

impl From<ContentType> for Field {
    fn from(ct: ContentType) -> Self {
        let params = ct
            .parameters
            .into_iter()
            .map(|(key, value)| format!("{key}=\"{value}\""));
        Self::new(CONTENT_TYPE, std::iter::once(ct.mime).chain(params))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime)?;
        for (key, value) in &self.parameters {
            write!(f, "; {key}=\"{value}\"")?;
        }
        Ok(())
    }
}
