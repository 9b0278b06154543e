//! Tests for per-pixel and per-region luminance

#[cfg(test)]
mod tests {
    use cage::ConversionError;
    use cage::analysis::luminance::{RegionLuminance, average_luminance, pixel_luminance};
    use cage::spatial::region::{RegionBounds, RegionView};
    use cage::spatial::sampler::PixelSample;
    use image::{Rgba, RgbaImage};

    fn sample(red: u8, green: u8, blue: u8, alpha: u8) -> PixelSample {
        PixelSample::from_rgba(0, 0, Rgba([red, green, blue, alpha]))
    }

    // Tests luminance is the plain mean of red, green and blue
    // Verified by applying weighted luma coefficients
    #[test]
    fn test_pixel_luminance_is_channel_mean() {
        let luminance = pixel_luminance(&sample(30, 60, 90, 255));

        assert!((luminance - 60.0).abs() < f64::EPSILON);
    }

    // Tests alpha does not contribute
    // Verified by including alpha in the mean
    #[test]
    fn test_pixel_luminance_ignores_alpha() {
        let opaque = pixel_luminance(&sample(10, 20, 30, 255));
        let clear = pixel_luminance(&sample(10, 20, 30, 0));

        assert!((opaque - clear).abs() < f64::EPSILON);
    }

    // Tests a uniform gray sequence averages to exactly its value
    // Verified by dividing by count + 1
    #[test]
    fn test_average_of_uniform_samples_is_exact() -> cage::Result<()> {
        let samples = vec![sample(123, 123, 123, 255); 16];

        let average = average_luminance(samples)?;

        assert!((average - 123.0).abs() < f64::EPSILON);
        Ok(())
    }

    // Tests mixed samples average across pixels
    // Verified by returning the last pixel's luminance
    #[test]
    fn test_average_of_mixed_samples() -> cage::Result<()> {
        let samples = vec![sample(0, 0, 0, 255), sample(255, 255, 255, 255)];

        let average = average_luminance(samples)?;

        assert!((average - 127.5).abs() < f64::EPSILON);
        Ok(())
    }

    // Tests an empty sequence is a division error, never NaN
    // Verified by removing the zero count check
    #[test]
    fn test_average_of_no_samples_is_division_error() {
        let result = average_luminance(Vec::<PixelSample>::new());

        assert!(matches!(result, Err(ConversionError::Division { .. })));
    }

    // Tests measuring a region records its coordinates, bounds and mean
    // Verified by measuring the whole image instead of the region
    #[test]
    fn test_region_measure() -> cage::Result<()> {
        let image = RgbaImage::from_fn(4, 2, |x, _| {
            if x < 2 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([90, 90, 90, 255])
            }
        });
        let bounds = RegionBounds::new([2, 0], [4, 2]);
        let view = RegionView::new(&image, bounds, 1, 0);

        let region = RegionLuminance::measure(&view)?;

        assert_eq!(region.bounds, bounds);
        assert_eq!((region.column, region.row), (1, 0));
        assert!((region.average_luminance - 90.0).abs() < f64::EPSILON);
        Ok(())
    }

    // Tests an empty region fails instead of producing NaN
    // Verified by returning 0.0 for empty regions
    #[test]
    fn test_region_measure_empty_is_division_error() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([10, 10, 10, 255]));
        let view = RegionView::new(&image, RegionBounds::new([1, 1], [1, 1]), 0, 0);

        let result = RegionLuminance::measure(&view);

        assert!(matches!(result, Err(ConversionError::Division { .. })));
    }
}
