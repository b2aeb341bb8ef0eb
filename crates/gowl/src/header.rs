//! Ordered header field collection.

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::field::Field;

/// Name of the field holding the multipart boundary.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Ordered collection of header fields.
///
/// Fields are rendered in insertion order. Names need not be unique;
/// lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    fields: Vec<Field>,
}

impl Header {
    /// Creates a header from the given fields.
    #[must_use]
    pub const fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Returns the fields of the header.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the fields of the header for in-place editing.
    pub fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }

    /// Appends a field to the end of the header.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Appends a field, builder style.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Removes the first field named `name` and returns it.
    pub fn remove_field(&mut self, name: &str) -> Option<Field> {
        let index = self.fields.iter().position(|f| f.name() == name)?;
        Some(self.fields.remove(index))
    }

    /// Removes every field.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the header has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the first field named `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Returns the first field named `name` for in-place editing.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Returns the parameter `key` of the first field named `name`.
    #[must_use]
    pub fn param(&self, name: &str, key: &str) -> Option<&str> {
        self.field(name)?.param(key)
    }

    /// Returns the boundary parameter of the first `Content-Type` field.
    ///
    /// Later `Content-Type` fields are never consulted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoBoundary`] if there is no `Content-Type` field or
    /// it has no `boundary` parameter.
    pub fn boundary(&self) -> Result<&str> {
        self.param(CONTENT_TYPE, "boundary").ok_or(Error::NoBoundary)
    }

    /// Renders every field on its own line, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns the error of the first field that fails to render.
    pub fn render(&self) -> Result<Vec<u8>> {
        self.render_with(&RenderConfig::default())
    }

    /// Renders the header with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns the error of the first field that fails to render.
    pub fn render_with(&self, config: &RenderConfig) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.render_into(&mut buf, config)?;
        Ok(buf)
    }

    pub(crate) fn render_into(&self, buf: &mut Vec<u8>, config: &RenderConfig) -> Result<()> {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                buf.extend_from_slice(config.newline());
            }
            field.render_into(buf)?;
        }
        Ok(())
    }
}

impl FromIterator<Field> for Header {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<Field> for Header {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}
