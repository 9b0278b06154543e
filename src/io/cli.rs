//! Command-line interface for converting one image to ASCII art on stdout

use crate::algorithm::converter::{AsciiConverter, ConversionConfig};
use crate::analysis::glyphs::GlyphTable;
use crate::io::configuration::DEFAULT_COLUMNS;
use crate::io::error::Result;
use clap::Parser;
use log::{LevelFilter, debug};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cage")]
#[command(author, version, about = "cage creates ascii art from images")]
/// Command-line arguments for the converter
pub struct Cli {
    /// Image file to convert
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Width of output in characters
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_COLUMNS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub width: u32,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Conversion settings selected by the arguments
    pub fn conversion_config(&self) -> ConversionConfig {
        ConversionConfig {
            columns: self.width,
            glyph_table: GlyphTable::classic(),
        }
    }
}

/// Initialize `env_logger`, honoring `RUST_LOG` unless `verbose` is set
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    // A logger installed earlier (by a test harness) stays in place
    if builder.try_init().is_err() {
        debug!("Logger already initialized, keeping the existing one");
    }
}

/// Runs a conversion for parsed CLI arguments
pub struct Processor {
    cli: Cli,
    converter: AsciiConverter,
}

impl Processor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let converter = AsciiConverter::new(cli.conversion_config());
        Self { cli, converter }
    }

    /// Convert the image and print it to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded or converted, or the
    /// output cannot be written
    pub fn process(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.process_to(&mut handle)
    }

    /// Convert the image and write the rendering to `writer`
    ///
    /// Nothing is written unless the whole conversion succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded or converted, or the
    /// output cannot be written
    pub fn process_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        debug!(
            "Converting {} at {} columns",
            self.cli.image.display(),
            self.cli.width
        );
        let output = self.converter.convert_path(&self.cli.image)?;
        output.write_to(writer)
    }
}
