use anyhow::Result;
use rayon::prelude::*;

use crate::data::face::CubeFace;
use crate::data::projection::direction_to_equirectangular;
use crate::data::raster::Raster;
use crate::error::Error;
use crate::resample::SampleFilter;

/// Renders one square cube face by inverse-mapping every output pixel onto
/// the equirectangular source raster.
pub struct FaceRenderer {
    filter: SampleFilter,
}

impl FaceRenderer {
    pub fn new(filter: SampleFilter) -> Self {
        Self { filter }
    }

    /// Produce the face_size x face_size raster for the given face. Output
    /// rows carry no cross-row dependencies, so they are rendered in
    /// parallel.
    pub fn render(&self, source: &Raster, face: CubeFace, face_size: u32) -> Result<Raster> {
        if face_size == 0 {
            return Err(Error::DegenerateInput(String::from(
                "The requested face size must be a positive number of pixels.",
            ))
            .into());
        }

        let source_width = source.width() as f64;
        let source_height = source.height() as f64;
        let edge = face_size as usize;

        let mut buffer = vec![0u8; edge * edge * 4];
        buffer
            .par_chunks_exact_mut(edge * 4)
            .enumerate()
            .try_for_each(|(y, row)| -> Result<()> {
                let ny = 2.0 * (y as f64 + 0.5) / face_size as f64 - 1.0;

                for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                    let nx = 2.0 * (x as f64 + 0.5) / face_size as f64 - 1.0;

                    let direction = face.direction(nx, ny);
                    let (u, v) = direction_to_equirectangular(direction)?;

                    // Row 0 of the source is the north pole, so v flips.
                    let source_x = u * source_width;
                    let source_y = (1.0 - v) * source_height;

                    pixel.copy_from_slice(&self.filter.sample(source, source_x, source_y));
                }

                Ok(())
            })?;

        let image = match image::RgbaImage::from_raw(face_size, face_size, buffer) {
            Some(image) => image,
            None => {
                return Err(Error::DegenerateInput(String::from(
                    "The rendered face buffer does not match the requested dimensions.",
                ))
                .into())
            }
        };

        Raster::from_rgba_image(image)
    }
}
