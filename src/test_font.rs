//! Font data bundled for tests.

use crate::{char_size::CharSize, face::Face, font_storage::FontStorage};

/// DejaVu Sans Mono, family "DejaVu Sans Mono".
pub(crate) static DEJAVU_SANS_MONO: &[u8] =
    include_bytes!("../tests/fonts/DejaVuSansMono.ttf");

/// Tuffy, family "Tuffy".
pub(crate) static TUFFY: &[u8] = include_bytes!("../tests/fonts/Tuffy.ttf");

pub(crate) const MONO_FAMILY: &str = "DejaVu Sans Mono";

/// Outside every bundled font's cmap.
pub(crate) const UNMAPPED: char = '\u{10FFFD}';

/// Opens the bundled DejaVu Sans Mono face at `size`.
#[allow(clippy::unwrap_used)]
pub(crate) fn mono_face(size: CharSize) -> Face {
    let mut storage = FontStorage::new();
    let id = storage.load_font_binary(DEJAVU_SANS_MONO).unwrap()[0];
    let font = storage.font(id).unwrap();
    Face::new(id, font, size)
}
