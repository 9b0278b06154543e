//! Image decoding with truncating narrowing to 8-bit RGBA

use crate::io::error::{ConversionError, Result, invalid_parameter};
use image::{DynamicImage, ImageBuffer, ImageReader, Pixel, Primitive, Rgba, RgbaImage};
use log::debug;
use std::path::Path;

/// Channel types that can be narrowed to 8 bits
///
/// Narrowing always truncates: a value never rounds up into the next 8-bit
/// step.
pub trait NarrowChannel: Copy {
    /// Narrow this channel value to 8 bits
    fn narrow(self) -> u8;
}

impl NarrowChannel for u8 {
    fn narrow(self) -> u8 {
        self
    }
}

impl NarrowChannel for u16 {
    fn narrow(self) -> u8 {
        (self >> 8) as u8
    }
}

impl NarrowChannel for f32 {
    // NaN casts to 0
    fn narrow(self) -> u8 {
        (self.clamp(0.0, 1.0) * 255.0) as u8
    }
}

/// Open and decode an image file, narrowing it to 8-bit RGBA
///
/// The container format is sniffed from the file contents, so the file
/// extension does not need to match.
///
/// # Errors
///
/// Returns [`ConversionError::ImageLoad`] if the file cannot be opened or its
/// contents cannot be decoded
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let image_load = |source: image::ImageError| ConversionError::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| image_load(image::ImageError::IoError(e)))?;
    let decoded = reader.decode().map_err(image_load)?;
    let color = decoded.color();
    let image = narrow_to_rgba8(decoded)?;

    debug!(
        "Decoded {} ({}x{}, {color:?})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Convert a decoded image of any depth to 8-bit RGBA
///
/// 8-bit sources convert losslessly. 16-bit channels keep their high byte
/// and float channels are clamped to `[0, 1]` before scaling, both truncated.
///
/// # Errors
///
/// Returns an error if the converted channel buffer does not match the image
/// dimensions
pub fn narrow_to_rgba8(image: DynamicImage) -> Result<RgbaImage> {
    let color = image.color();
    let channel_bytes = color.bytes_per_pixel() / color.channel_count().max(1);

    match channel_bytes {
        1 => Ok(image.into_rgba8()),
        2 => narrow_buffer(image.into_rgba16()),
        _ => narrow_buffer(image.into_rgba32f()),
    }
}

fn narrow_buffer<S>(buffer: ImageBuffer<Rgba<S>, Vec<S>>) -> Result<RgbaImage>
where
    S: Primitive + NarrowChannel,
    Rgba<S>: Pixel<Subpixel = S>,
{
    let (width, height) = buffer.dimensions();
    let data: Vec<u8> = buffer
        .into_raw()
        .into_iter()
        .map(NarrowChannel::narrow)
        .collect();

    RgbaImage::from_raw(width, height, data).ok_or_else(|| {
        invalid_parameter(
            "image",
            &format!("{width}x{height}"),
            &"narrowed channel buffer does not match the image dimensions",
        )
    })
}
