use crate::data::raster::Raster;

use super::{clamp_y, wrap_x};

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Reconstruct a color at fractional source coordinates from the four
/// nearest samples. Columns wrap, rows clamp.
pub fn sample(source: &Raster, x: f64, y: f64) -> [u8; 4] {
    let width = source.width();
    let height = source.height();

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let sx0 = wrap_x(x0, width);
    let sy0 = clamp_y(y0, height);
    let sx1 = wrap_x(x0 + 1, width);
    let sy1 = clamp_y(y0 + 1, height);

    let p00 = source.pixel(sx0, sy0);
    let p10 = source.pixel(sx1, sy0);
    let p01 = source.pixel(sx0, sy1);
    let p11 = source.pixel(sx1, sy1);

    let mut sample = [0u8; 4];
    for channel in 0..4 {
        let top = lerp(p00[channel] as f64, p10[channel] as f64, fx);
        let bottom = lerp(p01[channel] as f64, p11[channel] as f64, fx);
        sample[channel] = lerp(top, bottom, fy).round().clamp(0.0, 255.0) as u8;
    }

    sample
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_raster(width: u32, height: u32) -> Raster {
        let image = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x * 16) as u8, (y * 32) as u8, 128, 255])
        });
        Raster::from_rgba_image(image).unwrap()
    }

    #[test]
    fn integer_coordinates_return_the_exact_pixel() {
        let raster = gradient_raster(16, 8);
        assert_eq!(sample(&raster, 5.0, 3.0), raster.pixel(5, 3));
        assert_eq!(sample(&raster, 0.0, 0.0), raster.pixel(0, 0));
        assert_eq!(sample(&raster, 15.0, 7.0), raster.pixel(15, 7));
    }

    #[test]
    fn interpolates_between_horizontal_neighbors() {
        let raster = gradient_raster(16, 8);
        let sampled = sample(&raster, 4.5, 0.0);

        // Red ramps 16 per column, so halfway between columns 4 and 5 sits
        // halfway between their values.
        assert_eq!(sampled[0], 72);
    }

    #[test]
    fn wraps_across_the_seam() {
        let raster = gradient_raster(16, 8);

        // Just inside and just past the right edge sample the same
        // neighborhood around the seam.
        let inside = sample(&raster, 15.999, 3.0);
        let outside = sample(&raster, 16.001, 3.0);

        for channel in 0..4 {
            let difference = (inside[channel] as i16 - outside[channel] as i16).abs();
            assert!(difference <= 1, "channel {channel} differs by {difference}");
        }
    }

    #[test]
    fn wrapped_coordinates_match_on_a_uniform_image() {
        let image = image::RgbaImage::from_pixel(16, 8, image::Rgba([90, 45, 200, 255]));
        let raster = Raster::from_rgba_image(image).unwrap();

        assert_eq!(sample(&raster, 15.5, 3.0), sample(&raster, 16.5, 3.0));
        assert_eq!(sample(&raster, -0.5, 3.0), sample(&raster, 15.5, 3.0));
    }

    #[test]
    fn clamps_above_and_below_the_poles() {
        let raster = gradient_raster(16, 8);

        assert_eq!(sample(&raster, 2.0, -0.5), raster.pixel(2, 0));
        assert_eq!(sample(&raster, 2.0, 8.5), raster.pixel(2, 7));
    }
}
