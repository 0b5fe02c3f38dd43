use anyhow::Result;

use crate::error::Error;

/// An immutable grid of RGBA samples with explicit dimensions. Every pipeline
/// step reads one raster and produces a new one; none is mutated after
/// creation.
pub struct Raster {
    data: image::RgbaImage,
}

impl Raster {
    pub fn from_rgba_image(rgba_image: image::RgbaImage) -> Result<Self> {
        let (width, height) = rgba_image.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::DegenerateInput(format!(
                "The given raster has empty dimensions: {width}x{height}"
            ))
            .into());
        }

        Ok(Self { data: rgba_image })
    }

    pub fn data(&self) -> &image::RgbaImage {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.data.get_pixel(x, y).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_rasters() {
        let result = Raster::from_rgba_image(image::RgbaImage::new(0, 4));
        assert!(result.is_err());

        let result = Raster::from_rgba_image(image::RgbaImage::new(4, 0));
        assert!(result.is_err());
    }

    #[test]
    fn exposes_dimensions_and_pixels() {
        let mut source = image::RgbaImage::new(3, 2);
        source.put_pixel(2, 1, image::Rgba([10, 20, 30, 255]));

        let raster = Raster::from_rgba_image(source).unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.pixel(2, 1), [10, 20, 30, 255]);
    }
}
