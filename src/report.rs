use std::io::{self, Write};

use crate::{
    face::GlyphSlot,
    metrics::{GlyphMetrics, Units, format_value},
};

/// Snapshot of a glyph slot, taken before the next load overwrites it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphReport {
    pub ch: char,
    pub glyph_index: u16,
    pub metrics: GlyphMetrics,
}

impl From<&GlyphSlot> for GlyphReport {
    fn from(slot: &GlyphSlot) -> Self {
        Self {
            ch: slot.ch,
            glyph_index: slot.glyph_index,
            metrics: slot.metrics,
        }
    }
}

/// Layout of each printed line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `width height`
    #[default]
    Plain,
    /// Character, glyph index, size, bearings and advance.
    Detailed,
}

impl GlyphReport {
    /// Formats the report as a single line without the trailing newline.
    pub fn line(&self, units: Units, format: OutputFormat) -> String {
        let [width, height] = self.metrics.size_in(units);

        match format {
            OutputFormat::Plain => format!("{width} {height}"),
            OutputFormat::Detailed => format!(
                "{:?} U+{:04X} glyph={} width={} height={} bearing_x={} bearing_y={} advance={}",
                self.ch,
                self.ch as u32,
                self.glyph_index,
                width,
                height,
                format_value(self.metrics.bearing_x, units),
                format_value(self.metrics.bearing_y, units),
                format_value(self.metrics.advance, units),
            ),
        }
    }
}

/// Writes one line per report.
pub fn write_reports(
    writer: &mut impl Write,
    reports: &[GlyphReport],
    units: Units,
    format: OutputFormat,
) -> io::Result<()> {
    for report in reports {
        writeln!(writer, "{}", report.line(units, format))?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(ch: char, width: i32, height: i32) -> GlyphReport {
        GlyphReport {
            ch,
            glyph_index: 68,
            metrics: GlyphMetrics {
                width,
                height,
                bearing_x: 128,
                bearing_y: 1664,
                advance: 1664,
            },
        }
    }

    #[test]
    fn test_plain_lines() {
        let mut out = Vec::new();
        write_reports(
            &mut out,
            &[report('a', 1344, 1728), report('b', 1408, 2304)],
            Units::Fixed26_6,
            OutputFormat::Plain,
        )
        .expect("write to vec");
        assert_eq!(String::from_utf8_lossy(&out), "1344 1728\n1408 2304\n");
    }

    #[test]
    fn test_plain_pixels() {
        let line = report('a', 1344, 1760).line(Units::Pixels, OutputFormat::Plain);
        assert_eq!(line, "21 27.5");
    }

    #[test]
    fn test_detailed_line() {
        let line = report('a', 1344, 1728).line(Units::Fixed26_6, OutputFormat::Detailed);
        assert_eq!(
            line,
            "'a' U+0061 glyph=68 width=1344 height=1728 bearing_x=128 bearing_y=1664 advance=1664"
        );
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        let mut out = Vec::new();
        write_reports(&mut out, &[], Units::Fixed26_6, OutputFormat::Plain).expect("write to vec");
        assert!(out.is_empty());
    }
}
