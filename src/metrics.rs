use euclid::{Box2D, Point2D, UnknownUnit};

use crate::char_size::FIXED_26_6;

/// How glyph boxes are snapped before they are reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Fitting {
    /// Box of the rendered bitmap, snapped to whole pixels.
    #[default]
    Grid,
    /// Outline box rounded to the nearest 1/64 pixel.
    Exact,
}

/// Unit used when metrics are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Units {
    /// 26.6 fixed point, 64 units per pixel.
    #[default]
    Fixed26_6,
    /// Pixels, fractional where needed.
    Pixels,
}

/// Metrics of one glyph at one size.
///
/// All values are 26.6 fixed point. The y axis goes **up**: `bearing_y` is
/// the distance from the baseline to the top of the box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub width: i32,
    pub height: i32,
    pub bearing_x: i32,
    pub bearing_y: i32,
    pub advance: i32,
}

fn to_26_6(value: f32) -> i32 {
    (value * FIXED_26_6 as f32).round() as i32
}

impl GlyphMetrics {
    /// Converts metrics computed by `fontdue` for a given pixel size.
    pub fn from_fontdue(metrics: &fontdue::Metrics, fitting: Fitting) -> Self {
        let unit = FIXED_26_6 as i32;

        match fitting {
            Fitting::Grid => {
                let width = metrics.width as i32;
                let height = metrics.height as i32;

                Self {
                    width: width * unit,
                    height: height * unit,
                    bearing_x: metrics.xmin * unit,
                    bearing_y: (metrics.ymin + height) * unit,
                    advance: metrics.advance_width.round() as i32 * unit,
                }
            }
            Fitting::Exact => {
                let bounds = &metrics.bounds;

                Self {
                    width: to_26_6(bounds.width),
                    height: to_26_6(bounds.height),
                    bearing_x: to_26_6(bounds.xmin),
                    bearing_y: to_26_6(bounds.ymin + bounds.height),
                    advance: to_26_6(metrics.advance_width),
                }
            }
        }
    }

    /// Bounding box relative to the glyph origin, y up.
    pub fn bbox(&self) -> Box2D<i32, UnknownUnit> {
        Box2D::new(
            Point2D::new(self.bearing_x, self.bearing_y - self.height),
            Point2D::new(self.bearing_x + self.width, self.bearing_y),
        )
    }

    /// Whether the glyph has no visible extent (e.g. a space).
    pub fn is_blank(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Formats `width` and `height` in the requested unit.
    pub fn size_in(&self, units: Units) -> [String; 2] {
        [
            format_value(self.width, units),
            format_value(self.height, units),
        ]
    }
}

/// Formats a single 26.6 value.
pub fn format_value(value: i32, units: Units) -> String {
    match units {
        Units::Fixed26_6 => value.to_string(),
        Units::Pixels => (value as f64 / FIXED_26_6 as f64).to_string(),
    }
}
