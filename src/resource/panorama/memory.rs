use anyhow::Result;

use crate::data::raster::Raster;
use crate::error::Error;
use crate::resource::panorama::PanoramaLoader;

/// Loads a panorama from encoded image bytes already resident in memory, for
/// callers that fetched or synthesized the image themselves.
pub struct InMemoryPanoramaLoader {
    pub bytes: Vec<u8>,
}

impl PanoramaLoader for InMemoryPanoramaLoader {
    fn load_panorama(&self) -> Result<Raster> {
        let decoded = image::load_from_memory(&self.bytes).map_err(|image_error| {
            Error::Decode(format!("in-memory panorama: {image_error}"))
        })?;

        Raster::from_rgba_image(decoded.to_rgba8())
    }
}
