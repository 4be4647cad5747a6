use std::{io::Write, path::PathBuf};

use crate::{
    char_size::{CharSize, DEFAULT_DPI, FIXED_26_6},
    error::ProbeError,
    metrics::{Fitting, Units},
    probe::Probe,
    report::{GlyphReport, OutputFormat, write_reports},
};

/// Font file opened when no source is given.
pub const DEFAULT_FONT_PATH: &str = "asset/raw/consola.otf";

/// Characters measured when none are given.
pub const DEFAULT_CHARS: &str = "ab";

/// Where the face comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    /// A family name looked up among the installed fonts.
    Family(String),
}

/// Everything one measuring run needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    pub source: FontSource,
    /// Directories searched for [`FontSource::Family`]. Installed fonts are
    /// only loaded when none of them has the family.
    pub font_dirs: Vec<PathBuf>,
    /// 26.6 fixed-point points.
    pub char_size: u32,
    pub dpi: u32,
    pub chars: String,
    pub fitting: Fitting,
    pub units: Units,
    pub format: OutputFormat,
    pub strict: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            source: FontSource::File(PathBuf::from(DEFAULT_FONT_PATH)),
            font_dirs: Vec::new(),
            char_size: 48 * FIXED_26_6,
            dpi: DEFAULT_DPI,
            chars: DEFAULT_CHARS.to_string(),
            fitting: Fitting::Grid,
            units: Units::Fixed26_6,
            format: OutputFormat::Plain,
            strict: false,
        }
    }
}

impl ProbeConfig {
    /// Opens the face, loads every character in order and returns the
    /// snapshots.
    pub fn measure(&self, probe: &Probe) -> Result<Vec<GlyphReport>, ProbeError> {
        let char_size = CharSize::new(self.char_size, self.dpi)?;

        let mut face = match &self.source {
            FontSource::File(path) => probe.open_file(path, char_size)?,
            FontSource::Family(name) => {
                for dir in &self.font_dirs {
                    probe.load_fonts_dir(dir.clone());
                }
                probe.open_family_or_else(name, char_size, Probe::load_system_fonts)?
            }
        };
        face.set_fitting(self.fitting);
        face.set_strict(self.strict);

        probe.measure(&mut face, self.chars.chars())
    }

    /// Measures and writes the result to `writer`.
    pub fn run(&self, probe: &Probe, writer: &mut impl Write) -> anyhow::Result<()> {
        let reports = self.measure(probe)?;
        write_reports(writer, &reports, self.units, self.format)?;
        Ok(())
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_font::{DEJAVU_SANS_MONO, MONO_FAMILY, TUFFY};

    #[test]
    fn test_defaults_match_reference_run() {
        let config = ProbeConfig::default();
        assert_eq!(
            config.source,
            FontSource::File(PathBuf::from("asset/raw/consola.otf"))
        );
        assert!(config.font_dirs.is_empty());
        assert_eq!(config.char_size, 3072);
        assert_eq!(config.dpi, 72);
        assert_eq!(config.chars, "ab");
        assert_eq!(config.fitting, Fitting::Grid);
        assert_eq!(config.units, Units::Fixed26_6);
        assert_eq!(config.format, OutputFormat::Plain);
        assert!(!config.strict);
    }

    #[test]
    fn test_zero_size_fails_before_opening() {
        let config = ProbeConfig {
            char_size: 0,
            ..Default::default()
        };
        let probe = Probe::new();
        assert!(matches!(
            config.measure(&probe),
            Err(ProbeError::InvalidCharSize)
        ));
        assert!(probe.is_empty());
    }

    #[test]
    fn test_huge_dpi_fails_before_opening() {
        let config = ProbeConfig {
            dpi: 4_000_000_000,
            ..Default::default()
        };
        let probe = Probe::new();
        assert!(matches!(
            config.measure(&probe),
            Err(ProbeError::InvalidCharSize)
        ));
        assert!(probe.is_empty());
    }

    #[test]
    fn test_missing_file_writes_nothing() {
        let config = ProbeConfig {
            source: FontSource::File(PathBuf::from("no/such/font.ttf")),
            ..Default::default()
        };
        let mut out = Vec::new();
        let err = config.run(&Probe::new(), &mut out).unwrap_err();
        assert!(err.downcast_ref::<ProbeError>().is_some());
        assert!(out.is_empty());
    }

    fn font_dir(tag: &str, fonts: &[(&str, &[u8])]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "glyph_probe_fonts_{tag}_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        for (name, data) in fonts {
            std::fs::write(dir.join(name), data).unwrap();
        }
        dir
    }

    #[test]
    fn test_family_from_font_dir() {
        let dir = font_dir("mono", &[("DejaVuSansMono.ttf", DEJAVU_SANS_MONO)]);
        let config = ProbeConfig {
            source: FontSource::Family(MONO_FAMILY.to_string()),
            font_dirs: vec![dir.clone()],
            ..Default::default()
        };

        let probe = Probe::new();
        let mut out = Vec::new();
        let result = config.run(&probe, &mut out);
        let _ = std::fs::remove_dir_all(&dir);

        result.unwrap();
        // found in the directory, installed fonts never loaded
        assert_eq!(probe.len(), 1);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let numbers: Vec<i64> = line.split(' ').map(|n| n.parse().unwrap()).collect();
            assert_eq!(numbers.len(), 2);
            assert!(numbers.iter().all(|&n| n > 0 && n % 64 == 0), "{line}");
        }
    }

    #[test]
    fn test_font_dir_without_family_falls_back_to_installed() {
        let dir = font_dir("tuffy", &[("Tuffy.ttf", TUFFY)]);
        let config = ProbeConfig {
            source: FontSource::Family("No Such Family 1f3a".to_string()),
            font_dirs: vec![dir.clone()],
            ..Default::default()
        };

        let installed = {
            let probe = Probe::new();
            probe.load_system_fonts();
            probe.len()
        };

        let probe = Probe::new();
        let result = config.measure(&probe);
        let _ = std::fs::remove_dir_all(&dir);

        assert!(matches!(result, Err(ProbeError::FamilyNotFound(_))));
        // the unrelated face in the directory did not stop the fallback
        assert_eq!(probe.len(), 1 + installed);
    }

    #[test]
    fn test_file_run_matches_grid_contract() {
        let dir = font_dir("file", &[("consola.otf", DEJAVU_SANS_MONO)]);
        let config = ProbeConfig {
            source: FontSource::File(dir.join("consola.otf")),
            ..Default::default()
        };
        let result = config.measure(&Probe::new());
        let _ = std::fs::remove_dir_all(&dir);

        let reports = result.unwrap();
        assert_eq!(reports.len(), 2);
        assert!(
            reports
                .iter()
                .all(|r| r.metrics.width % 64 == 0 && r.metrics.height % 64 == 0)
        );
    }
}
