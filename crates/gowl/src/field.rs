//! Single header field handling.

use crate::error::{Error, Result};

/// A single header field: a name and its ordered values.
///
/// The first value is the primary value; every following value is a
/// parameter (usually `key=value`). Values are joined with `"; "` when
/// rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    name: String,
    values: Vec<String>,
}

impl Field {
    /// Creates a new field.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the name of the field.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the values of the field.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Replaces the name of the field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces every value of the field.
    pub fn set_values<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
    }

    /// Appends a value to the end of the values.
    pub fn add_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// Appends a value, builder style.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.add_value(value);
        self
    }

    /// Empties both the name and the values, keeping the allocations.
    pub fn clear(&mut self) {
        self.name.clear();
        self.values.clear();
    }

    /// Returns true if the field has no values and therefore cannot be rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value of the parameter `key`.
    ///
    /// The first value containing `key=` is used. The `key=` prefix is
    /// removed only when the value starts with it; a value holding it
    /// further in (`"multipart/mixed; boundary=X"`) comes back whole. One
    /// pair of surrounding double quotes is then trimmed. Nothing is
    /// unescaped.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        let needle = format!("{key}=");
        let value = self.values.iter().find(|v| v.contains(&needle))?.as_str();
        let value = value.strip_prefix(needle.as_str()).unwrap_or(value);
        let value = value.strip_prefix('"').unwrap_or(value);
        Some(value.strip_suffix('"').unwrap_or(value))
    }

    /// Renders the field as `name: v1; v2; ...` without a line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValues`] if the field has no values.
    pub fn render(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.render_into(&mut buf)?;
        Ok(buf)
    }

    pub(crate) fn render_into(&self, buf: &mut Vec<u8>) -> Result<()> {
        if self.values.is_empty() {
            return Err(Error::NoValues(self.name.clone()));
        }

        buf.extend_from_slice(self.name.as_bytes());
        buf.extend_from_slice(b": ");
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                buf.extend_from_slice(b"; ");
            }
            buf.extend_from_slice(value.as_bytes());
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_render_single_value() {
        let field = Field::new("From", ["a@example.com"]);
        assert_eq!(field.render().unwrap(), b"From: a@example.com");
    }

    #[test]
    fn test_render_date() {
        let field = Field::new("Date", ["Fri, 10 May 2019 16:40:00 +0100"]);
        assert_eq!(
            field.render().unwrap(),
            b"Date: Fri, 10 May 2019 16:40:00 +0100"
        );
    }

    #[test]
    fn test_render_multiple_values() {
        let field = Field::new("Content-Type", ["text/plain", "charset=\"UTF-8\""]);
        assert_eq!(
            field.render().unwrap(),
            b"Content-Type: text/plain; charset=\"UTF-8\""
        );

        let field = Field::new(
            "Received",
            [
                "by 1010:abc:abcd:0:0:0:0:0 with SMTP id 123456789abcdef",
                "Sat, 13 Mar 2021 07:00:30 -0800 (PST)",
            ],
        );
        assert_eq!(
            String::from_utf8(field.render().unwrap()).unwrap(),
            "Received: by 1010:abc:abcd:0:0:0:0:0 with SMTP id 123456789abcdef; \
             Sat, 13 Mar 2021 07:00:30 -0800 (PST)"
        );
    }

    #[test]
    fn test_render_no_values() {
        let field = Field::new("To", Vec::<String>::new());
        assert!(field.is_empty());
        assert!(matches!(field.render(), Err(Error::NoValues(name)) if name == "To"));

        assert!(matches!(Field::default().render(), Err(Error::NoValues(_))));
    }

    #[test]
    fn test_param_boundary() {
        let field = Field::new("Content-Type", ["multipart/mixed", "boundary=\"part_1234567890\""]);
        assert_eq!(field.param("boundary"), Some("part_1234567890"));
    }

    #[test]
    fn test_param_charset() {
        let field = Field::new("Content-Type", ["text/plain", "charset=\"UTF-8\""]);
        assert_eq!(field.param("charset"), Some("UTF-8"));
        assert_eq!(field.param("boundary"), None);
    }

    #[test]
    fn test_param_unquoted_and_first_match() {
        let field = Field::new("Content-Type", ["text/plain", "charset=utf-8", "charset=latin1"]);
        assert_eq!(field.param("charset"), Some("utf-8"));
    }

    #[test]
    fn test_param_trims_one_pair_of_quotes() {
        let field = Field::new("X-Test", ["x", "key=\"\"inner\"\""]);
        assert_eq!(field.param("key"), Some("\"inner\""));

        let field = Field::new("X-Test", ["x", "key=a\"b\"c"]);
        assert_eq!(field.param("key"), Some("a\"b\"c"));
    }

    #[test]
    fn test_param_key_not_at_start_is_kept_whole() {
        let field = Field::new("Content-Type", ["multipart/mixed; boundary=X"]);
        assert_eq!(field.param("boundary"), Some("multipart/mixed; boundary=X"));

        let field = Field::new("Content-Type", ["text/plain", " charset=utf-8"]);
        assert_eq!(field.param("charset"), Some(" charset=utf-8"));
    }

    #[test]
    fn test_param_lone_quote() {
        let field = Field::new("X-Test", ["x", "k=\""]);
        assert_eq!(field.param("k"), Some(""));
    }

    #[test]
    fn test_clear() {
        let mut field = Field::new("Content-Type", ["text/plain", "charset=\"UTF-8\""]);
        field.clear();
        assert_eq!(field, Field::default());
        assert!(matches!(field.render(), Err(Error::NoValues(name)) if name.is_empty()));

        field.set_name("To");
        field.add_value("a@example.com");
        assert_eq!(field.render().unwrap(), b"To: a@example.com");
    }

    #[test]
    fn test_mutators() {
        let mut field = Field::default();
        field.set_name("Content-Type");
        field.add_value("text/plain");
        assert_eq!(field.name(), "Content-Type");
        assert_eq!(field.values(), ["text/plain"]);

        field.set_values(["text/html", "charset=\"UTF-8\""]);
        assert_eq!(field.values().len(), 2);

        let field = Field::new("To", ["a@example.com"]).with_value("b@example.com");
        assert_eq!(field.render().unwrap(), b"To: a@example.com; b@example.com");
    }

    proptest! {
        #[test]
        fn prop_render_joins_values(
            name in "[A-Za-z][A-Za-z-]{0,20}",
            values in proptest::collection::vec("[ -~]{0,30}", 1..6),
        ) {
            let field = Field::new(name.clone(), values.clone());
            let expected = format!("{name}: {}", values.join("; "));
            prop_assert_eq!(field.render().unwrap(), expected.into_bytes());
        }
    }
}
