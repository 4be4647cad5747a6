use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::error::ProbeError;

/// Manages font loading and retrieval using `fontdb` and `fontdue`.
///
/// Faces are registered in a `fontdb` database; the `fontdue` font for a
/// face is only parsed the first time it is requested and then shared.
pub struct FontStorage {
    /// This is the font set that has been loaded by fontdb.
    font_db: fontdb::Database,
    /// Fonts parsed by fontdue so far.
    /// Not all faces in fontdb are necessarily parsed here.
    loaded_font: HashMap<fontdb::ID, Arc<fontdue::Font>, fxhash::FxBuildHasher>,
}

impl Default for FontStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FontStorage {
    /// Creates a new empty font storage.
    pub fn new() -> Self {
        Self {
            font_db: fontdb::Database::new(),
            loaded_font: HashMap::with_hasher(fxhash::FxBuildHasher::default()),
        }
    }
}

/// Loading fonts into fontdb.
impl FontStorage {
    /// Registers every face found in `data`.
    ///
    /// Returns the IDs of the new faces in collection order.
    pub fn load_font_binary(
        &mut self,
        data: impl Into<Vec<u8>>,
    ) -> Result<Vec<fontdb::ID>, ProbeError> {
        let data: Vec<u8> = data.into();
        let source = fontdb::Source::Binary(Arc::new(data));
        let ids = self.font_db.load_font_source(source).to_vec();

        if ids.is_empty() {
            return Err(ProbeError::InvalidFont(
                "no font face found in data".to_string(),
            ));
        }

        log::debug!("Registered {} face(s) from binary data", ids.len());
        Ok(ids)
    }

    /// Reads a font file and registers every face it contains.
    pub fn load_font_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<Vec<fontdb::ID>, ProbeError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| ProbeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_font_binary(data).map_err(|e| match e {
            ProbeError::InvalidFont(_) => {
                ProbeError::InvalidFont(format!("no font face found in {}", path.display()))
            }
            e => e,
        })
    }

    /// Loads all fonts from a directory.
    pub fn load_fonts_dir(&mut self, dir: PathBuf) {
        self.font_db.load_fonts_dir(dir)
    }

    /// Loads the system fonts.
    pub fn load_system_fonts(&mut self) {
        self.font_db.load_system_fonts();
    }

    /// Checks if the storage is empty.
    pub fn is_empty(&self) -> bool {
        self.font_db.is_empty()
    }

    /// Returns the number of registered faces.
    pub fn len(&self) -> usize {
        self.font_db.len()
    }
}

/// Get `Font`
impl FontStorage {
    /// Queries for the face best matching the description.
    pub fn query(&self, query: &fontdb::Query) -> Option<fontdb::ID> {
        self.font_db.query(query)
    }

    /// Retrieves a parsed font by ID, parsing it if necessary.
    pub fn font(&mut self, id: fontdb::ID) -> Result<Arc<fontdue::Font>, ProbeError> {
        use std::collections::hash_map::Entry;

        match self.loaded_font.entry(id) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let font_result = self
                    .font_db
                    .with_face_data(id, |data, index| {
                        fontdue::Font::from_bytes(
                            data,
                            fontdue::FontSettings {
                                collection_index: index,
                                scale: 40.0,
                                load_substitutions: true,
                            },
                        )
                    })
                    .ok_or(ProbeError::FaceNotFound)?;

                match font_result {
                    Ok(font) => {
                        let r: &mut Arc<fontdue::Font> = entry.insert(Arc::new(font));
                        Ok(Arc::clone(r))
                    }
                    Err(e) => {
                        log::error!("Failed to parse font (id: {:?}): {}", id, e);
                        Err(ProbeError::InvalidFont(e.to_string()))
                    }
                }
            }
        }
    }

    /// Returns an iterator over all registered faces.
    pub fn faces(&self) -> impl Iterator<Item = &fontdb::FaceInfo> {
        self.font_db.faces()
    }
}
