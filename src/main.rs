//! `glyph-probe` CLI: print glyph box sizes of a font.

use std::{io, path::PathBuf, process};

use anyhow::Context;
use clap::Parser;

use glyph_probe::{
    CharSize, FontSource, Probe, ProbeConfig,
    config::{DEFAULT_CHARS, DEFAULT_FONT_PATH},
    metrics::{Fitting, Units},
    report::OutputFormat,
};

#[derive(Parser)]
#[command(version, about = "Print glyph bounding-box width and height of a font")]
struct Cli {
    /// Font file to open (.otf, .ttf, .ttc)
    #[arg(default_value = DEFAULT_FONT_PATH, conflicts_with = "family")]
    font: PathBuf,

    /// Use an installed font family instead of a file
    #[arg(long, value_name = "NAME")]
    family: Option<String>,

    /// Directories searched for --family before the installed fonts
    #[arg(long = "font-dir", value_name = "DIR", requires = "family")]
    font_dirs: Vec<PathBuf>,

    /// Character size in points
    #[arg(short, long, default_value_t = 48.0)]
    size: f32,

    /// Resolution in dots per inch
    #[arg(long, default_value_t = 72)]
    dpi: u32,

    /// Characters to measure, in order
    #[arg(short, long, default_value = DEFAULT_CHARS)]
    chars: String,

    /// Report the unfitted outline box instead of the pixel-fitted one
    #[arg(long)]
    exact: bool,

    /// Print pixels instead of 26.6 fixed-point units
    #[arg(long)]
    pixels: bool,

    /// Print bearings, advance and glyph index as well
    #[arg(short, long)]
    detailed: bool,

    /// Fail on characters the font has no glyph for
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<ProbeConfig> {
        let char_size = CharSize::from_points(self.size)
            .with_context(|| format!("invalid size {}", self.size))?;

        let source = match self.family {
            Some(name) => FontSource::Family(name),
            None => FontSource::File(self.font),
        };

        Ok(ProbeConfig {
            source,
            font_dirs: self.font_dirs,
            char_size: char_size.raw(),
            dpi: self.dpi,
            chars: self.chars,
            fitting: if self.exact {
                Fitting::Exact
            } else {
                Fitting::Grid
            },
            units: if self.pixels {
                Units::Pixels
            } else {
                Units::Fixed26_6
            },
            format: if self.detailed {
                OutputFormat::Detailed
            } else {
                OutputFormat::Plain
            },
            strict: self.strict,
        })
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.into_config()?;
    log::debug!("Running with {:?}", config);

    let source = match &config.source {
        FontSource::File(path) => path.display().to_string(),
        FontSource::Family(name) => format!("family \"{name}\""),
    };

    let probe = Probe::new();
    let stdout = io::stdout();
    config
        .run(&probe, &mut stdout.lock())
        .with_context(|| format!("failed to measure glyphs of {source}"))
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
