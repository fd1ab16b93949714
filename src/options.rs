//! Wrap configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ClipError, ClipResult};
use crate::terminal::{default_wrap_options, screen_size};

/// Default escape that hands the next line margin spacing.
pub const DEFAULT_MARGIN_CHAR: u8 = b'\t';
/// Default escape that hands the next line indent spacing.
pub const DEFAULT_INDENT_CHAR: u8 = b'\r';

/// Options controlling a single wrap call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapOptions {
    /// Maximum line length in characters. 0 means the screen width.
    pub width: usize,
    /// Spaces before the first line and after an indent escape.
    pub indent: usize,
    /// Spaces before every other continuation line.
    pub margin: usize,
    /// Also strip leading spaces after an explicit newline.
    pub trim_newline_spaces: bool,
    /// Escape byte forcing a break onto a margin line. 0 or non-ASCII means TAB.
    pub margin_char: u8,
    /// Escape byte forcing a break onto an indent line. 0 or non-ASCII means CR.
    pub indent_char: u8,
    /// Stretch wrapped lines to exactly `width`.
    pub justify: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        default_wrap_options().clone()
    }
}

impl WrapOptions {
    /// The process-wide defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with an explicit width, independent of the cached screen size.
    pub fn for_width(width: usize) -> Self {
        Self {
            width,
            indent: 0,
            margin: 0,
            trim_newline_spaces: false,
            margin_char: DEFAULT_MARGIN_CHAR,
            indent_char: DEFAULT_INDENT_CHAR,
            justify: false,
        }
    }

    /// Set the maximum line length.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the first-line and indent-reset spacing.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the continuation-line spacing.
    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    /// Strip leading spaces after explicit newlines too.
    pub fn with_trim_newline_spaces(mut self, trim: bool) -> Self {
        self.trim_newline_spaces = trim;
        self
    }

    /// Set the margin escape byte. Non-ASCII bytes normalize to TAB.
    pub fn with_margin_char(mut self, ch: u8) -> Self {
        self.margin_char = ch;
        self
    }

    /// Set the indent escape byte. Non-ASCII bytes normalize to CR.
    pub fn with_indent_char(mut self, ch: u8) -> Self {
        self.indent_char = ch;
        self
    }

    /// Stretch wrapped lines to the full width.
    pub fn with_justify(mut self, justify: bool) -> Self {
        self.justify = justify;
        self
    }

    /// Return a copy with every field clamped into a usable range.
    ///
    /// Zero or non-ASCII escapes fall back to TAB and CR, a zero width falls
    /// back to the screen width, and the width is raised until it exceeds both
    /// the indent and the margin so that every line can place at least one
    /// character.
    pub fn normalized(&self) -> Self {
        let mut opts = self.clone();

        if opts.margin_char == 0 || !opts.margin_char.is_ascii() {
            opts.margin_char = DEFAULT_MARGIN_CHAR;
        }
        if opts.indent_char == 0 || !opts.indent_char.is_ascii() {
            opts.indent_char = DEFAULT_INDENT_CHAR;
        }
        if opts.width == 0 {
            opts.width = screen_size().width;
        }
        if opts.width <= opts.margin {
            opts.width = opts.margin + 1;
        }
        if opts.width <= opts.indent {
            opts.width = opts.indent + 1;
        }

        opts
    }

    pub(crate) fn margin_escape(&self) -> char {
        char::from(self.margin_char)
    }

    pub(crate) fn indent_escape(&self) -> char {
        char::from(self.indent_char)
    }
}

/// Parse an escape-character argument into its byte.
///
/// Accepts a single ASCII character, one of the names `tab`, `cr`, `lf`,
/// `space` (case-insensitive), or the backslash forms `\t`, `\r`, `\n`
/// and `\xHH`.
///
/// # Example
///
/// ```
/// use clip::options::parse_escape_char;
///
/// assert_eq!(parse_escape_char("\\t").unwrap(), b'\t');
/// assert_eq!(parse_escape_char("tab").unwrap(), b'\t');
/// assert_eq!(parse_escape_char("|").unwrap(), b'|');
/// assert!(parse_escape_char("ab").is_err());
/// ```
pub fn parse_escape_char(s: &str) -> ClipResult<u8> {
    let invalid = || ClipError::InvalidEscape(s.to_string());

    let byte = match s.to_ascii_lowercase().as_str() {
        "tab" | "\\t" => b'\t',
        "cr" | "\\r" => b'\r',
        "lf" | "\\n" => b'\n',
        "space" => b' ',
        lower => match lower.strip_prefix("\\x") {
            Some(hex) if hex.len() == 2 => u8::from_str_radix(hex, 16).map_err(|_| invalid())?,
            Some(_) => return Err(invalid()),
            None => match s.as_bytes() {
                [b] => *b,
                _ => return Err(invalid()),
            },
        },
    };

    if byte == 0 || !byte.is_ascii() {
        return Err(invalid());
    }
    Ok(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_width_defaults() {
        let opts = WrapOptions::for_width(20);
        assert_eq!(opts.width, 20);
        assert_eq!(opts.margin_char, b'\t');
        assert_eq!(opts.indent_char, b'\r');
        assert!(!opts.trim_newline_spaces);
        assert!(!opts.justify);
    }

    #[test]
    fn test_normalized_raises_width_past_margin() {
        let opts = WrapOptions::for_width(5).with_margin(10).normalized();
        assert_eq!(opts.width, 11);
    }

    #[test]
    fn test_normalized_raises_width_past_indent() {
        let opts = WrapOptions::for_width(5)
            .with_indent(8)
            .with_margin(3)
            .normalized();
        assert_eq!(opts.width, 9);
    }

    #[test]
    fn test_normalized_equal_width_and_margin() {
        let opts = WrapOptions::for_width(4).with_margin(4).normalized();
        assert_eq!(opts.width, 5);
    }

    #[test]
    fn test_normalized_zero_width_uses_screen() {
        let opts = WrapOptions::for_width(0).normalized();
        assert_eq!(opts.width, screen_size().width);
    }

    #[test]
    fn test_normalized_zero_escapes_restored() {
        let opts = WrapOptions::for_width(20)
            .with_margin_char(0)
            .with_indent_char(0)
            .normalized();
        assert_eq!(opts.margin_char, DEFAULT_MARGIN_CHAR);
        assert_eq!(opts.indent_char, DEFAULT_INDENT_CHAR);
    }

    #[test]
    fn test_normalized_non_ascii_escapes_restored() {
        let opts = WrapOptions::for_width(20)
            .with_margin_char(0xA0)
            .with_indent_char(0xFF)
            .normalized();
        assert_eq!(opts.margin_char, DEFAULT_MARGIN_CHAR);
        assert_eq!(opts.indent_char, DEFAULT_INDENT_CHAR);
        assert_eq!(opts.margin_escape(), '\t');
    }

    #[test]
    fn test_normalized_leaves_valid_options_alone() {
        let opts = WrapOptions::for_width(30).with_indent(5).with_margin(20);
        assert_eq!(opts.normalized(), opts);
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let opts: WrapOptions = serde_json::from_str(r#"{"width": 14, "justify": true}"#).unwrap();
        assert_eq!(opts.width, 14);
        assert!(opts.justify);
        assert_eq!(opts.indent, 0);
        assert_eq!(opts.margin_char, DEFAULT_MARGIN_CHAR);
    }

    #[test]
    fn test_serialize_field_names() {
        let json = serde_json::to_value(WrapOptions::for_width(10).with_margin(2)).unwrap();
        assert_eq!(json["width"], 10);
        assert_eq!(json["margin"], 2);
        assert_eq!(json["margin_char"], 9);
        assert_eq!(json["indent_char"], 13);
    }

    #[test]
    fn test_parse_escape_names() {
        assert_eq!(parse_escape_char("tab").unwrap(), b'\t');
        assert_eq!(parse_escape_char("CR").unwrap(), b'\r');
        assert_eq!(parse_escape_char("lf").unwrap(), b'\n');
        assert_eq!(parse_escape_char("space").unwrap(), b' ');
    }

    #[test]
    fn test_parse_escape_backslash_forms() {
        assert_eq!(parse_escape_char("\\t").unwrap(), b'\t');
        assert_eq!(parse_escape_char("\\r").unwrap(), b'\r');
        assert_eq!(parse_escape_char("\\x1f").unwrap(), 0x1f);
        assert_eq!(parse_escape_char("\\X7C").unwrap(), b'|');
    }

    #[test]
    fn test_parse_escape_literal() {
        assert_eq!(parse_escape_char("|").unwrap(), b'|');
        assert_eq!(parse_escape_char("\t").unwrap(), b'\t');
    }

    #[test]
    fn test_parse_escape_rejects_bad_input() {
        for bad in ["", "ab", "\\x", "\\xzz", "\\x100", "\\x00", "\\xff", "é"] {
            assert!(
                matches!(parse_escape_char(bad), Err(ClipError::InvalidEscape(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
