// ABOUTME: Error types for feed encoding and scalar decoding.
// ABOUTME: Provides EncodeError with schema, URL, value, namespace, write, and parse variants.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while validating or encoding a feed.
#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
    /// A required attribute or text of an element is empty.
    #[error("<{element}> is missing required {attribute}")]
    MissingField {
        element: &'static str,
        attribute: &'static str,
    },

    /// A URL-typed attribute could not be parsed.
    #[error("<{element}> has invalid {attribute} {value:?}: {reason}")]
    InvalidUrl {
        element: &'static str,
        attribute: &'static str,
        value: String,
        reason: String,
    },

    /// A domain value cannot be rendered into its canonical form.
    #[error("<{element}> has invalid value: {reason}")]
    InvalidValue {
        element: &'static str,
        reason: String,
    },

    /// A namespace selector did not match any known prefix.
    #[error("unknown namespace prefix: {0:?}")]
    UnknownNamespace(String),

    /// The underlying XML writer failed.
    #[error("failed to write xml: {0}")]
    Write(String),

    /// A scalar decoder could not make sense of its input.
    #[error("failed to parse value: {0}")]
    Parse(String),
}

impl EncodeError {
    /// Creates a MissingField error.
    pub fn missing(element: &'static str, attribute: &'static str) -> Self {
        EncodeError::MissingField { element, attribute }
    }

    /// Creates an InvalidValue error with a custom message.
    pub fn invalid(element: &'static str, reason: impl Into<String>) -> Self {
        EncodeError::InvalidValue {
            element,
            reason: reason.into(),
        }
    }

    /// Creates a Write error from an underlying writer error.
    pub fn write(err: impl fmt::Display) -> Self {
        EncodeError::Write(err.to_string())
    }

    /// Creates a Parse error with a custom message.
    pub fn parse(msg: impl Into<String>) -> Self {
        EncodeError::Parse(msg.into())
    }

    /// True for errors caused by the entity graph violating the schema.
    pub fn is_schema_violation(&self) -> bool {
        matches!(
            self,
            EncodeError::MissingField { .. }
                | EncodeError::InvalidUrl { .. }
                | EncodeError::InvalidValue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_missing_field() {
        let err = EncodeError::missing("enclosure", "url");
        assert_eq!(err.to_string(), "<enclosure> is missing required url");
        assert!(err.is_schema_violation());
    }

    #[test]
    fn test_write_is_not_schema_violation() {
        let err = EncodeError::write("disk full");
        assert_eq!(err.to_string(), "failed to write xml: disk full");
        assert!(!err.is_schema_violation());
    }
}
