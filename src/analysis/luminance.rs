//! Per-region mean luminance

use crate::io::error::{Result, division_error};
use crate::spatial::region::{RegionBounds, RegionView};
use crate::spatial::sampler::PixelSample;

/// Luminance of one pixel: the mean of its red, green and blue channels
///
/// Alpha is ignored.
pub const fn pixel_luminance(sample: &PixelSample) -> f64 {
    (sample.red as f64 + sample.green as f64 + sample.blue as f64) / 3.0
}

/// Mean luminance over a sequence of pixel samples
///
/// # Errors
///
/// Returns a division error if `samples` is empty
pub fn average_luminance<I>(samples: I) -> Result<f64>
where
    I: IntoIterator<Item = PixelSample>,
{
    let (sum, count) = samples
        .into_iter()
        .fold((0.0_f64, 0_u64), |(sum, count), sample| {
            (sum + pixel_luminance(&sample), count + 1)
        });

    if count == 0 {
        return Err(division_error(
            "average luminance",
            &"region contains no pixels",
        ));
    }

    Ok(sum / count as f64)
}

/// Measured luminance of one region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionLuminance {
    /// Pixel rectangle of the region
    pub bounds: RegionBounds,
    /// Column index in the region grid
    pub column: usize,
    /// Row index in the region grid
    pub row: usize,
    /// Mean pixel luminance, in `[0, 255]`
    pub average_luminance: f64,
}

impl RegionLuminance {
    /// Sample every pixel of `region` and record its mean luminance
    ///
    /// # Errors
    ///
    /// Returns a division error if the region contains no pixels
    pub fn measure(region: &RegionView<'_>) -> Result<Self> {
        Ok(Self {
            bounds: region.bounds(),
            column: region.column(),
            row: region.row(),
            average_luminance: average_luminance(region.samples())?,
        })
    }
}
