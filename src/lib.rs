//! # glyph-probe
//!
//! Opens a font face, sets a character size and reports the bounding-box
//! metrics of individual glyphs.
//!
//! ## Overview
//!
//! Font parsing and metric computation are done by `fontdue`; faces are
//! registered and looked up through `fontdb`. The [`Probe`] owns the storage
//! and opens [`Face`]s. A face has a single glyph slot that is overwritten by
//! every [`Face::load_char`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use glyph_probe::{CharSize, Probe};
//!
//! let probe = Probe::new();
//! let mut face = probe.open_file("asset/raw/consola.otf", CharSize::new(48 * 64, 72)?)?;
//!
//! for ch in ['a', 'b'] {
//!     let metrics = face.load_char(ch)?.metrics;
//!     println!("{} {}", metrics.width, metrics.height);
//! }
//! # Ok::<(), glyph_probe::ProbeError>(())
//! ```
//!
//! Metrics are 26.6 fixed point: 64 units per pixel.

pub mod char_size;
pub mod config;
pub mod error;
pub mod face;
pub mod font_storage;
pub mod metrics;
pub mod probe;
pub mod report;

#[cfg(test)]
mod test_font;

// common re-exports
pub use char_size::CharSize;
pub use config::{FontSource, ProbeConfig};
pub use error::ProbeError;
pub use face::{Face, GlyphSlot};
pub use font_storage::FontStorage;
pub use metrics::{Fitting, GlyphMetrics, Units};
pub use probe::Probe;
pub use report::{GlyphReport, OutputFormat};

// re-export dependencies
pub use fontdb;
pub use fontdue;
