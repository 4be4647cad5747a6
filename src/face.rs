use std::sync::Arc;

use crate::{
    char_size::CharSize,
    error::ProbeError,
    metrics::{Fitting, GlyphMetrics},
};

/// The glyph most recently loaded into a [`Face`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSlot {
    pub ch: char,
    /// Index of the glyph inside the face. `0` is `.notdef`.
    pub glyph_index: u16,
    pub metrics: GlyphMetrics,
}

/// One opened typeface at a given character size.
///
/// A face has a single glyph slot: every [`Face::load_char`] overwrites it.
/// Copy the slot out if it has to outlive the next load.
pub struct Face {
    id: fontdb::ID,
    font: Arc<fontdue::Font>,
    char_size: CharSize,
    fitting: Fitting,
    strict: bool,
    slot: Option<GlyphSlot>,
}

impl Face {
    pub fn new(id: fontdb::ID, font: Arc<fontdue::Font>, char_size: CharSize) -> Self {
        Self {
            id,
            font,
            char_size,
            fitting: Fitting::default(),
            strict: false,
            slot: None,
        }
    }

    /// Changes the nominal size. The glyph slot is emptied.
    pub fn set_char_size(&mut self, char_size: CharSize) {
        self.char_size = char_size;
        self.slot = None;
    }

    /// Changes how boxes are fitted. The glyph slot is emptied.
    pub fn set_fitting(&mut self, fitting: Fitting) {
        self.fitting = fitting;
        self.slot = None;
    }

    /// When set, characters without a glyph fail to load instead of
    /// falling back to `.notdef`.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Loads the glyph for `ch` into the glyph slot.
    pub fn load_char(&mut self, ch: char) -> Result<&GlyphSlot, ProbeError> {
        let glyph_index = self.font.lookup_glyph_index(ch);
        if glyph_index == 0 {
            if self.strict {
                return Err(ProbeError::MissingGlyph(ch));
            }
            log::warn!(
                "No glyph for {:?} (U+{:04X}) in face {:?}, using .notdef",
                ch,
                ch as u32,
                self.id
            );
        }

        let raw = self
            .font
            .metrics_indexed(glyph_index, self.char_size.pixels_per_em());
        let metrics = GlyphMetrics::from_fontdue(&raw, self.fitting);
        log::debug!(
            "Loaded {:?} (glyph {}) at {}px: {:?}",
            ch,
            glyph_index,
            self.char_size.pixels_per_em(),
            metrics
        );

        Ok(&*self.slot.insert(GlyphSlot {
            ch,
            glyph_index,
            metrics,
        }))
    }

    /// Returns the glyph slot, if a glyph has been loaded since the last
    /// size or fitting change.
    pub fn glyph(&self) -> Option<&GlyphSlot> {
        self.slot.as_ref()
    }
}

/// accessors
impl Face {
    pub fn id(&self) -> fontdb::ID {
        self.id
    }

    pub fn font(&self) -> &Arc<fontdue::Font> {
        &self.font
    }

    pub fn char_size(&self) -> CharSize {
        self.char_size
    }

    pub fn fitting(&self) -> Fitting {
        self.fitting
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Full name as stored in the font, if any.
    pub fn family_name(&self) -> Option<&str> {
        self.font.name()
    }

    pub fn units_per_em(&self) -> f32 {
        self.font.units_per_em()
    }

    pub fn glyph_count(&self) -> u16 {
        self.font.glyph_count()
    }
}
