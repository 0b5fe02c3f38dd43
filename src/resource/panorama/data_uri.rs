use anyhow::Result;

use crate::data::raster::Raster;
use crate::error::Error;
use crate::resource::data_uri;
use crate::resource::panorama::PanoramaLoader;

/// Loads a panorama embedded in a `data:image/...;base64,` URI, the form the
/// editor hands around after generation and stitching.
pub struct DataUriPanoramaLoader {
    pub uri: String,
}

impl PanoramaLoader for DataUriPanoramaLoader {
    fn load_panorama(&self) -> Result<Raster> {
        let (mime_type, bytes) = data_uri::parse(&self.uri)?;

        // Trust the declared MIME type when the image crate knows it,
        // otherwise fall back to content sniffing.
        let decoded = match image::ImageFormat::from_mime_type(&mime_type) {
            Some(image_format) => image::load_from_memory_with_format(&bytes, image_format),
            None => image::load_from_memory(&bytes),
        }
        .map_err(|image_error| {
            Error::Decode(format!("data URI ({mime_type}): {image_error}"))
        })?;

        Raster::from_rgba_image(decoded.to_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_png_data_uri() {
        let image = image::RgbaImage::from_pixel(4, 2, image::Rgba([9, 8, 7, 255]));
        let mut bytes = Vec::new();
        image
            .write_with_encoder(image::codecs::png::PngEncoder::new(std::io::Cursor::new(
                &mut bytes,
            )))
            .unwrap();

        let loader = DataUriPanoramaLoader {
            uri: data_uri::encode("image/png", &bytes),
        };

        let raster = loader.load_panorama().unwrap();
        assert_eq!((raster.width(), raster.height()), (4, 2));
        assert_eq!(raster.pixel(0, 0), [9, 8, 7, 255]);
    }

    #[test]
    fn rejects_a_uri_with_an_undecodable_payload() {
        let loader = DataUriPanoramaLoader {
            uri: data_uri::encode("image/png", &[1, 2, 3]),
        };
        assert!(loader.load_panorama().is_err());
    }
}
