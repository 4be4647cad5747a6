use crate::error::ProbeError;

/// Units per point/pixel in 26.6 fixed point.
pub const FIXED_26_6: u32 = 64;

/// Largest scale accepted, in pixels per em. Keeps every 26.6 metric of a
/// glyph within `i32`.
pub const MAX_PIXELS_PER_EM: f32 = 16384.0;

/// Resolution assumed when none is given.
pub const DEFAULT_DPI: u32 = 72;

/// Nominal character size of a face.
///
/// The size is kept in 26.6 fixed-point points, so `48 * 64` is 48pt. At the
/// default 72 dpi one point is one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CharSize {
    size: u32, // points * FIXED_26_6
    dpi: u32,
}

impl CharSize {
    /// Creates a size from a 26.6 point value and a resolution.
    ///
    /// A `dpi` of zero means [`DEFAULT_DPI`]. Fails when the size is zero or
    /// the resulting scale exceeds [`MAX_PIXELS_PER_EM`].
    pub fn new(size_26_6: u32, dpi: u32) -> Result<Self, ProbeError> {
        if size_26_6 == 0 {
            return Err(ProbeError::InvalidCharSize);
        }

        let size = Self {
            size: size_26_6,
            dpi: if dpi == 0 { DEFAULT_DPI } else { dpi },
        };
        if size.pixels_per_em() > MAX_PIXELS_PER_EM {
            return Err(ProbeError::InvalidCharSize);
        }

        Ok(size)
    }

    /// Creates a size from points at [`DEFAULT_DPI`].
    pub fn from_points(points: f32) -> Result<Self, ProbeError> {
        if !points.is_finite() || points <= 0.0 {
            return Err(ProbeError::InvalidCharSize);
        }
        Self::new((points * FIXED_26_6 as f32).round() as u32, DEFAULT_DPI)
    }

    /// Returns the raw 26.6 value.
    pub fn raw(&self) -> u32 {
        self.size
    }

    pub fn points(&self) -> f32 {
        self.size as f32 / FIXED_26_6 as f32
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Returns the scale handed to the rasterizer.
    pub fn pixels_per_em(&self) -> f32 {
        self.points() * self.dpi as f32 / DEFAULT_DPI as f32
    }
}
