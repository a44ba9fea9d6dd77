//! Input validation for content fields.
//!
//! Only presence is enforced: `title` and `content` must contain at least one
//! non-whitespace character. Anything beyond that is accepted verbatim.

use crate::constants::DEFAULT_OUTPUT;
use crate::{ContentError, ContentResult};

/// A string with at least one non-whitespace character, kept exactly as
/// given. Code bodies keep their indentation and trailing newline.
///
/// Construction goes through [`RequiredText::new`], which names the offending
/// field in the error so it can be reported back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequiredText(String);

impl RequiredText {
    /// Wraps `input` unchanged, or fails with [`ContentError::MissingField`]
    /// if it is blank.
    pub fn new(field: &'static str, input: impl Into<String>) -> ContentResult<Self> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(ContentError::MissingField { field });
        }
        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RequiredText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for RequiredText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for RequiredText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RequiredText::new("text", s).map_err(serde::de::Error::custom)
    }
}

/// Resolves the optional `output` annotation supplied on create.
///
/// Missing or blank values fall back to [`DEFAULT_OUTPUT`]; anything else is
/// kept exactly as given.
pub fn output_or_default(output: Option<String>) -> String {
    match output {
        Some(value) if !value.trim().is_empty() => value,
        _ => DEFAULT_OUTPUT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_keeps_surrounding_whitespace() {
        let text = RequiredText::new("content", "    if x:\n        y()\n").unwrap();
        assert_eq!(text.as_str(), "    if x:\n        y()\n");
    }

    #[test]
    fn required_text_rejects_whitespace_and_names_the_field() {
        let err = RequiredText::new("content", " \t ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "content is required");
    }

    #[test]
    fn output_falls_back_to_default_when_blank() {
        assert_eq!(output_or_default(None), DEFAULT_OUTPUT);
        assert_eq!(output_or_default(Some("   ".into())), DEFAULT_OUTPUT);
        assert_eq!(output_or_default(Some(" 1 ".into())), " 1 ");
    }
}
