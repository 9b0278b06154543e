//! Partitioning of an image into a grid of equal square regions
//!
//! The region size is derived from the image width and the requested column
//! count. Trailing pixels that do not fill a whole region, on either axis,
//! are dropped.

use crate::io::error::{Result, division_error};
use crate::spatial::sampler::PixelSamples;
use image::{Rgba, RgbaImage};
use log::debug;

/// Half-open pixel rectangle `[min, max)` in absolute image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionBounds {
    /// Top-left corner `[x, y]` (inclusive)
    pub min: [u32; 2],
    /// Bottom-right corner `[x, y]` (exclusive)
    pub max: [u32; 2],
}

impl RegionBounds {
    /// Create bounds from inclusive minimum and exclusive maximum corners
    pub const fn new(min: [u32; 2], max: [u32; 2]) -> Self {
        Self { min, max }
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.max[0].saturating_sub(self.min[0])
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.max[1].saturating_sub(self.min[1])
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check if a pixel lies inside the bounds
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min[0] && x < self.max[0] && y >= self.min[1] && y < self.max[1]
    }

    /// Shrink the bounds so they do not extend past a `width` x `height` image
    pub const fn clipped_to(&self, width: u32, height: u32) -> Self {
        let max_x = if self.max[0] < width {
            self.max[0]
        } else {
            width
        };
        let max_y = if self.max[1] < height {
            self.max[1]
        } else {
            height
        };
        Self {
            min: self.min,
            max: [max_x, max_y],
        }
    }
}

/// Read-only view over one region of an image
///
/// Carries the region's grid coordinates alongside its pixel rectangle. The
/// view borrows the image and never owns pixel data.
#[derive(Debug, Clone, Copy)]
pub struct RegionView<'a> {
    image: &'a RgbaImage,
    bounds: RegionBounds,
    column: usize,
    row: usize,
}

impl<'a> RegionView<'a> {
    /// Create a view, clipping `bounds` to the image
    pub fn new(image: &'a RgbaImage, bounds: RegionBounds, column: usize, row: usize) -> Self {
        Self {
            image,
            bounds: bounds.clipped_to(image.width(), image.height()),
            column,
            row,
        }
    }

    /// Column index of the region in the grid
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Row index of the region in the grid
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Pixel rectangle covered by the view
    pub const fn bounds(&self) -> RegionBounds {
        self.bounds
    }

    /// Pixel at absolute image coordinates, if it lies inside the view
    pub fn pixel(&self, x: u32, y: u32) -> Option<&'a Rgba<u8>> {
        if self.bounds.contains(x, y) {
            self.image.get_pixel_checked(x, y)
        } else {
            None
        }
    }

    /// Lazily sample every pixel of the view in row-major order
    pub const fn samples(&self) -> PixelSamples<'a> {
        PixelSamples::new(*self)
    }
}

/// Grid layout of square regions over an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionGrid {
    region_size: u32,
    columns: usize,
    rows: usize,
}

impl RegionGrid {
    /// Lay out a grid with `columns` regions across the image width
    ///
    /// The region size is `image.width() / columns`, truncated.
    ///
    /// # Errors
    ///
    /// Returns a division error if `columns` is zero or the image is
    /// narrower than `columns` pixels
    pub fn for_image(image: &RgbaImage, columns: u32) -> Result<Self> {
        if columns == 0 {
            return Err(division_error("region size", &"column count is zero"));
        }

        let width = image.width();
        if width < columns {
            return Err(division_error(
                "region size",
                &format!("image width {width} is narrower than {columns} columns"),
            ));
        }

        let grid = Self::with_region_size(width, image.height(), width / columns)?;
        debug!(
            "Partitioned {width}x{} image into {}x{} regions of {} px",
            image.height(),
            grid.columns,
            grid.rows,
            grid.region_size
        );
        Ok(grid)
    }

    /// Lay out a grid over a `width` x `height` image with a fixed region size
    ///
    /// # Errors
    ///
    /// Returns a division error if `region_size` is zero
    pub fn with_region_size(width: u32, height: u32, region_size: u32) -> Result<Self> {
        if region_size == 0 {
            return Err(division_error(
                "region partitioning",
                &format!("region size is zero for a {width}x{height} image"),
            ));
        }

        Ok(Self {
            region_size,
            columns: (width / region_size) as usize,
            rows: (height / region_size) as usize,
        })
    }

    /// Edge length of each square region in pixels
    pub const fn region_size(&self) -> u32 {
        self.region_size
    }

    /// Number of region columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of region rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of regions
    pub const fn len(&self) -> usize {
        self.columns * self.rows
    }

    /// Check if the grid holds no regions
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid coordinates `(column, row)` of the region at a row-major index
    pub const fn coordinates(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.len() {
            return None;
        }
        Some((index % self.columns, index / self.columns))
    }

    /// Pixel rectangle of the region at `(column, row)`
    pub const fn bounds(&self, column: usize, row: usize) -> RegionBounds {
        let x = column as u32 * self.region_size;
        let y = row as u32 * self.region_size;
        RegionBounds::new([x, y], [x + self.region_size, y + self.region_size])
    }

    /// Views over every region of `image` in row-major order
    pub fn regions<'a>(
        &self,
        image: &'a RgbaImage,
    ) -> impl Iterator<Item = RegionView<'a>> + use<'a> {
        let grid = *self;
        (0..grid.len())
            .filter_map(move |index| grid.coordinates(index))
            .map(move |(column, row)| RegionView::new(image, grid.bounds(column, row), column, row))
    }

    /// Invoke `callback` with the coordinates and view of every region
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error produced by `callback`
    pub fn for_each_region<F>(&self, image: &RgbaImage, mut callback: F) -> Result<()>
    where
        F: FnMut(usize, usize, RegionView<'_>) -> Result<()>,
    {
        for view in self.regions(image) {
            callback(view.column(), view.row(), view)?;
        }
        Ok(())
    }
}
