use anyhow::Result;

use crate::data::raster::Raster;

pub mod data_uri;
pub mod file;
pub mod memory;

/// Source of the equirectangular panorama. Loading is the only step in the
/// conversion pipeline that performs I/O; a decode failure here is terminal
/// for the whole conversion.
pub trait PanoramaLoader {
    fn load_panorama(&self) -> Result<Raster>;
}
