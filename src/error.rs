//! Errors produced while opening faces and loading glyphs.

use std::{fmt, io, path::PathBuf};

use crate::char_size::MAX_PIXELS_PER_EM;

/// Errors that can occur when loading fonts or querying glyphs.
#[derive(Debug)]
pub enum ProbeError {
    /// The font file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The data does not contain a face the font library can parse.
    InvalidFont(String),
    /// No face is registered under the requested ID.
    FaceNotFound,
    /// No installed face matches the requested family.
    FamilyNotFound(String),
    /// The face has no glyph for the character (strict loading only).
    MissingGlyph(char),
    /// The character size is zero or too large.
    InvalidCharSize,
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read font file {}: {source}", path.display())
            }
            Self::InvalidFont(msg) => write!(f, "invalid font: {msg}"),
            Self::FaceNotFound => write!(f, "face not found"),
            Self::FamilyNotFound(name) => write!(f, "no face found for family \"{name}\""),
            Self::MissingGlyph(ch) => {
                write!(f, "face has no glyph for {ch:?} (U+{:04X})", *ch as u32)
            }
            Self::InvalidCharSize => write!(
                f,
                "character size must be greater than zero and at most \
                 {MAX_PIXELS_PER_EM} pixels per em"
            ),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_character() {
        let msg = ProbeError::MissingGlyph('a').to_string();
        assert_eq!(msg, "face has no glyph for 'a' (U+0061)");
    }

    #[test]
    fn io_error_keeps_source() {
        let err = ProbeError::Io {
            path: PathBuf::from("missing.otf"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("cannot read font file missing.otf"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
