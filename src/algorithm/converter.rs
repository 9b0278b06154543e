//! One-pass image to ASCII conversion
//!
//! Drives the pipeline stages in order: partition the image into regions,
//! measure each region's mean luminance, map it to a glyph and place the
//! glyph in the output grid at the region's coordinates.

use crate::analysis::glyphs::GlyphTable;
use crate::analysis::luminance::RegionLuminance;
use crate::io::configuration::DEFAULT_COLUMNS;
use crate::io::error::Result;
use crate::io::image::load_image;
use crate::io::render::OutputGrid;
use crate::spatial::region::RegionGrid;
use image::RgbaImage;
use log::debug;
use std::path::Path;

/// Settings for a conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Number of regions across the image width
    pub columns: u32,
    /// Threshold table used to pick glyphs
    pub glyph_table: GlyphTable,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            glyph_table: GlyphTable::classic(),
        }
    }
}

/// Measured regions of one image together with the grid they came from
#[derive(Debug, Clone, PartialEq)]
pub struct RegionAnalysis {
    /// Layout the regions were cut from
    pub grid: RegionGrid,
    /// Regions in row-major order
    pub regions: Vec<RegionLuminance>,
}

/// Converts images into glyph grids
#[derive(Debug, Clone, Default)]
pub struct AsciiConverter {
    config: ConversionConfig,
}

impl AsciiConverter {
    /// Create a converter with the given settings
    pub const fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Settings this converter runs with
    pub const fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Partition `image` and measure every region's mean luminance
    ///
    /// # Errors
    ///
    /// Returns a division error if the region size comes out as zero or a
    /// region holds no pixels
    pub fn analyze(&self, image: &RgbaImage) -> Result<RegionAnalysis> {
        let grid = RegionGrid::for_image(image, self.config.columns)?;

        let mut regions = Vec::with_capacity(grid.len());
        grid.for_each_region(image, |_, _, region| {
            regions.push(RegionLuminance::measure(&region)?);
            Ok(())
        })?;

        debug!("Measured {} regions", regions.len());
        Ok(RegionAnalysis { grid, regions })
    }

    /// Map measured regions to glyphs and lay them out in an output grid
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if a region lies outside the grid
    pub fn render(&self, analysis: &RegionAnalysis) -> Result<OutputGrid> {
        let mut output = OutputGrid::new(analysis.grid.columns(), analysis.grid.rows());
        for region in &analysis.regions {
            let glyph = self.config.glyph_table.glyph_for(region.average_luminance);
            output.set(region.column, region.row, glyph)?;
        }
        Ok(output)
    }

    /// Convert a decoded image into a glyph grid
    ///
    /// # Errors
    ///
    /// Returns an error if partitioning, measurement or grid assembly fails
    pub fn convert(&self, image: &RgbaImage) -> Result<OutputGrid> {
        let analysis = self.analyze(image)?;
        self.render(&analysis)
    }

    /// Load an image file and convert it into a glyph grid
    ///
    /// # Errors
    ///
    /// Returns an image load error if the file cannot be opened or decoded,
    /// and any error [`AsciiConverter::convert`] returns
    pub fn convert_path<P: AsRef<Path>>(&self, path: P) -> Result<OutputGrid> {
        let image = load_image(path)?;
        self.convert(&image)
    }
}
