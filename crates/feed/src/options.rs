// ABOUTME: Configuration options for the feed encoder: Indent and EncodeOptions.
// ABOUTME: EncodeOptions provides a fluent API for pretty-printing, the XML declaration, and validation.

use std::fmt;

use crate::error::EncodeError;

/// One level of indentation: `width` copies of `ch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    pub ch: u8,
    pub width: usize,
}

impl Indent {
    pub fn spaces(width: usize) -> Self {
        Self { ch: b' ', width }
    }

    pub fn tabs(width: usize) -> Self {
        Self { ch: b'\t', width }
    }

    /// Builds an indent from a literal string such as `"  "` or `"\t"`.
    /// The string must repeat a single space or tab. An empty string
    /// yields `None`, meaning single-line output.
    pub fn from_unit(unit: &str) -> Result<Option<Self>, EncodeError> {
        let bytes = unit.as_bytes();
        match bytes.first() {
            None => Ok(None),
            Some(&ch) if (ch == b' ' || ch == b'\t') && bytes.iter().all(|&b| b == ch) => {
                Ok(Some(Self { ch, width: bytes.len() }))
            }
            Some(_) => Err(EncodeError::invalid(
                "rss",
                format!("indent must repeat one space or tab character, got {:?}", unit),
            )),
        }
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.width {
            write!(f, "{}", self.ch as char)?;
        }
        Ok(())
    }
}

/// Configuration for a single encoding pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// `None` writes the document on one line.
    pub indent: Option<Indent>,
    /// Prefix the document with `<?xml version="1.0" encoding="UTF-8"?>`.
    pub xml_declaration: bool,
    /// Check required fields and URLs before writing anything.
    pub validate: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: None,
            xml_declaration: false,
            validate: true,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two-space indentation, the conventional layout for published feeds.
    pub fn pretty() -> Self {
        Self::default().indent(Indent::spaces(2))
    }

    /// Sets the indent unit. A zero width falls back to single-line output.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = (indent.width > 0).then_some(indent);
        self
    }

    pub fn compact(mut self) -> Self {
        self.indent = None;
        self
    }

    pub fn xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    pub fn validate(mut self, enabled: bool) -> Self {
        self.validate = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = EncodeOptions::default();
        assert!(opts.indent.is_none());
        assert!(!opts.xml_declaration);
        assert!(opts.validate);
    }

    #[test]
    fn test_builder() {
        let opts = EncodeOptions::new()
            .indent(Indent::tabs(1))
            .xml_declaration(true)
            .validate(false);
        assert_eq!(opts.indent, Some(Indent { ch: b'\t', width: 1 }));
        assert!(opts.xml_declaration);
        assert!(!opts.validate);
        assert_eq!(EncodeOptions::pretty().indent, Some(Indent::spaces(2)));
    }

    #[test]
    fn test_indent_from_unit() {
        assert_eq!(Indent::from_unit("  ").unwrap(), Some(Indent::spaces(2)));
        assert_eq!(Indent::from_unit("\t").unwrap(), Some(Indent::tabs(1)));
        assert_eq!(Indent::from_unit("").unwrap(), None);
        assert!(Indent::from_unit(" \t").is_err());
        assert!(Indent::from_unit("--").is_err());
        assert_eq!(Indent::spaces(4).to_string(), "    ");
    }

    #[test]
    fn test_zero_width_indent_is_compact() {
        assert_eq!(EncodeOptions::new().indent(Indent::spaces(0)).indent, None);
        assert_eq!(EncodeOptions::new().indent(Indent::tabs(0)).indent, None);
    }

    #[test]
    fn test_compact_clears_indent() {
        let opts = EncodeOptions::pretty().xml_declaration(true).compact();
        assert_eq!(opts.indent, None);
        assert!(opts.xml_declaration);
    }
}
