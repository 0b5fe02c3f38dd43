use std::path::PathBuf;

use anyhow::Result;

use crate::data::raster::Raster;
use crate::error::Error;
use crate::resource::panorama::PanoramaLoader;

pub struct FileSystemPanoramaLoader {
    pub path: PathBuf,
}

impl PanoramaLoader for FileSystemPanoramaLoader {
    fn load_panorama(&self) -> Result<Raster> {
        let decoded = image::open(&self.path).map_err(|image_error| {
            Error::Decode(format!("{}: {image_error}", self.path.display()))
        })?;

        Raster::from_rgba_image(decoded.to_rgba8())
    }
}
