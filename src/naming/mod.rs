//! Filesystem-safe directory names from free-text labels.
//!
//! Reserved characters are replaced with `_` and legacy device names get a
//! trailing `_`, so generated trees stay portable to filesystems that keep
//! those reservations even when the host does not enforce them.

use std::fmt;
use thiserror::Error;

/// Characters that may not appear in a directory name on common filesystems.
pub const RESERVED_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Legacy device names, matched case-sensitively against the whole name.
pub const RESERVED_DEVICE_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

const REPLACEMENT: char = '_';

/// Replaces reserved characters and disambiguates reserved device names.
///
/// Whitespace is left untouched; labels are trimmed once when collected.
pub fn sanitize(label: &str) -> String {
    let mut out: String = label
        .chars()
        .map(|ch| {
            if RESERVED_CHARS.contains(&ch) {
                REPLACEMENT
            } else {
                ch
            }
        })
        .collect();

    if is_reserved_device_name(&out) {
        out.push(REPLACEMENT);
    }
    out
}

pub fn is_reserved_device_name(name: &str) -> bool {
    RESERVED_DEVICE_NAMES.contains(&name)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("directory name cannot be empty")]
    Empty,
}

/// A user-supplied, non-empty directory label.
///
/// The text is kept exactly as given; only emptiness is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    pub fn new(text: impl Into<String>) -> Result<Self, LabelError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(LabelError::Empty);
        }
        Ok(Self(text))
    }

    /// Trims surrounding whitespace before validating, as done at prompt time.
    pub fn from_input(raw: &str) -> Result<Self, LabelError> {
        Self::new(raw.trim())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn sanitized(&self) -> String {
        sanitize(&self.0)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Label {
    type Error = LabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Label {
    type Error = LabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
