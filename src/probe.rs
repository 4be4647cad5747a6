use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::{
    char_size::CharSize, error::ProbeError, face::Face, font_storage::FontStorage,
    report::GlyphReport,
};

/// High-level entry point for opening faces and measuring glyphs.
///
/// Uses a `Mutex` around the storage so one probe can be shared by
/// reference. The field is public to allow direct access to the storage when
/// necessary.
pub struct Probe {
    /// The underlying font storage.
    pub font_storage: Mutex<FontStorage>,
}

impl Default for Probe {
    fn default() -> Self {
        Self::new()
    }
}

impl Probe {
    /// Creates a probe with an empty storage.
    pub fn new() -> Self {
        Self {
            font_storage: Mutex::new(FontStorage::new()),
        }
    }
}

/// font storage initialization
impl Probe {
    /// Loads the system fonts into the storage.
    pub fn load_system_fonts(&self) {
        self.font_storage.lock().load_system_fonts();
    }

    /// Loads a font file. Returns the IDs of the faces it contains.
    pub fn load_font_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Vec<fontdb::ID>, ProbeError> {
        self.font_storage.lock().load_font_file(path)
    }

    /// Registers every face found in `data`.
    pub fn load_font_binary(
        &self,
        data: impl Into<Vec<u8>>,
    ) -> Result<Vec<fontdb::ID>, ProbeError> {
        self.font_storage.lock().load_font_binary(data)
    }

    /// Loads all fonts from a directory.
    pub fn load_fonts_dir(&self, dir: PathBuf) {
        self.font_storage.lock().load_fonts_dir(dir)
    }

    /// Checks if the storage is empty.
    pub fn is_empty(&self) -> bool {
        self.font_storage.lock().is_empty()
    }

    /// Returns the number of registered faces.
    pub fn len(&self) -> usize {
        self.font_storage.lock().len()
    }
}

/// opening faces
impl Probe {
    /// Opens a registered face at `char_size`.
    pub fn open_face(&self, id: fontdb::ID, char_size: CharSize) -> Result<Face, ProbeError> {
        let font = self.font_storage.lock().font(id)?;
        let face = Face::new(id, font, char_size);
        log::info!(
            "Opened face {:?} ({}) at {}pt, {} dpi",
            id,
            face.family_name().unwrap_or("unnamed"),
            char_size.points(),
            char_size.dpi()
        );
        Ok(face)
    }

    /// Loads a font file and opens its first face.
    pub fn open_file(
        &self,
        path: impl AsRef<Path>,
        char_size: CharSize,
    ) -> Result<Face, ProbeError> {
        let ids = self.load_font_file(path)?;
        let id = ids.first().copied().ok_or(ProbeError::FaceNotFound)?;
        self.open_face(id, char_size)
    }

    /// Opens the face that best matches a family name among the loaded fonts.
    ///
    /// Call [`Probe::load_system_fonts`] first to search installed fonts.
    pub fn open_family(&self, family: &str, char_size: CharSize) -> Result<Face, ProbeError> {
        self.open_family_or_else(family, char_size, |_| {})
    }

    /// Like [`Probe::open_family`], but when no loaded face matches, calls
    /// `load_more` and queries once more.
    pub fn open_family_or_else(
        &self,
        family: &str,
        char_size: CharSize,
        load_more: impl FnOnce(&Self),
    ) -> Result<Face, ProbeError> {
        let id = match self.query_family(family) {
            Some(id) => id,
            None => {
                log::debug!("Family \"{}\" not loaded yet, loading more fonts", family);
                load_more(self);
                self.query_family(family)
                    .ok_or_else(|| ProbeError::FamilyNotFound(family.to_string()))?
            }
        };
        self.open_face(id, char_size)
    }

    fn query_family(&self, family: &str) -> Option<fontdb::ID> {
        self.font_storage.lock().query(&fontdb::Query {
            families: &[fontdb::Family::Name(family)],
            ..Default::default()
        })
    }
}

/// measuring
impl Probe {
    /// Loads each character into the face's glyph slot in order and keeps a
    /// copy of every result.
    pub fn measure(
        &self,
        face: &mut Face,
        chars: impl IntoIterator<Item = char>,
    ) -> Result<Vec<GlyphReport>, ProbeError> {
        chars
            .into_iter()
            .map(|ch| face.load_char(ch).map(GlyphReport::from))
            .collect()
    }
}
