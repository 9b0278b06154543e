//! Lazy row-major pixel sampling over a region view

use crate::spatial::region::RegionView;
use image::Rgba;

/// One pixel with its absolute image coordinates and 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSample {
    /// Absolute x coordinate
    pub x: u32,
    /// Absolute y coordinate
    pub y: u32,
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Alpha channel
    pub alpha: u8,
}

impl PixelSample {
    /// Build a sample from a pixel and its coordinates
    pub const fn from_rgba(x: u32, y: u32, pixel: Rgba<u8>) -> Self {
        let [red, green, blue, alpha] = pixel.0;
        Self {
            x,
            y,
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// Iterator visiting each pixel of a region view exactly once
///
/// Walks the view's local coordinates row by row and yields absolute image
/// coordinates. Calling [`RegionView::samples`] again restarts from the
/// first pixel.
#[derive(Debug, Clone)]
pub struct PixelSamples<'a> {
    view: RegionView<'a>,
    index: u64,
    total: u64,
}

impl<'a> PixelSamples<'a> {
    /// Start sampling at the top-left pixel of `view`
    pub const fn new(view: RegionView<'a>) -> Self {
        Self {
            view,
            index: 0,
            total: view.bounds().area(),
        }
    }
}

impl Iterator for PixelSamples<'_> {
    type Item = PixelSample;

    fn next(&mut self) -> Option<Self::Item> {
        let bounds = self.view.bounds();
        let width = u64::from(bounds.width());

        while self.index < self.total {
            let local = self.index;
            self.index += 1;

            let x = bounds.min[0] + (local % width) as u32;
            let y = bounds.min[1] + (local / width) as u32;
            if let Some(pixel) = self.view.pixel(x, y) {
                return Some(PixelSample::from_rgba(x, y, *pixel));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PixelSamples<'_> {}
