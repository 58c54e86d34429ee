//! Text/bytes conversion helpers.
//!
//! Inputs may already be in the target representation, in which case they
//! are passed through untouched.

use std::borrow::Cow;

/// Default filesystem encoding.
pub const DEFENC: &str = "utf-8";

/// Preferred locale encoding used by [`win_encode`].
pub const PREFERRED_ENCODING: &str = "utf-8";

/// Either decoded text or raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text<'a> {
    Str(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a [u8]> for Text<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

/// Decode to text. Invalid UTF-8 sequences are replaced rather than rejected.
pub fn safe_decode(text: Option<Text<'_>>) -> Option<Cow<'_, str>> {
    match text? {
        Text::Str(s) => Some(Cow::Borrowed(s)),
        Text::Bytes(b) => Some(String::from_utf8_lossy(b)),
    }
}

/// Encode text with [`DEFENC`].
pub fn safe_encode(text: Option<Text<'_>>) -> Option<Cow<'_, [u8]>> {
    match text? {
        Text::Str(s) => Some(Cow::Borrowed(s.as_bytes())),
        Text::Bytes(b) => Some(Cow::Borrowed(b)),
    }
}

/// Encode text with [`PREFERRED_ENCODING`] for use on Windows command lines.
pub fn win_encode(text: Option<Text<'_>>) -> Option<Cow<'_, [u8]>> {
    safe_encode(text)
}
