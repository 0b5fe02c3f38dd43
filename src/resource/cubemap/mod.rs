use anyhow::Result;

use crate::data::face::CubeFace;
use crate::data::raster::Raster;
use crate::error::Error;
use crate::resource::data_uri;

pub mod file;

pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Encoding applied to each rendered face before it enters the image set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg { quality: u8 },
    Png,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl OutputFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg { .. } => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg { .. } => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

/// Encode a rendered face raster and wrap it into a data URI.
pub fn encode_face(raster: &Raster, format: OutputFormat) -> Result<String> {
    let mut bytes = Vec::new();

    match format {
        OutputFormat::Jpeg { quality } => {
            // The JPEG encoder has no alpha channel to write into.
            let rgb = image::DynamicImage::ImageRgba8(raster.data().clone()).to_rgb8();
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
                std::io::Cursor::new(&mut bytes),
                quality,
            );
            rgb.write_with_encoder(encoder)?;
        }
        OutputFormat::Png => {
            let encoder = image::codecs::png::PngEncoder::new(std::io::Cursor::new(&mut bytes));
            raster.data().write_with_encoder(encoder)?;
        }
    }

    Ok(data_uri::encode(format.mime_type(), &bytes))
}

/// The complete six-entry cube image set, one encoded image per face.
/// Immutable once built; serializes to the manifest record the editor
/// stores alongside each scene.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CubeImages {
    pub front: String,
    pub back: String,
    pub left: String,
    pub right: String,
    pub top: String,
    pub bottom: String,
}

impl CubeImages {
    pub fn get(&self, face: CubeFace) -> &str {
        match face {
            CubeFace::Front => &self.front,
            CubeFace::Back => &self.back,
            CubeFace::Left => &self.left,
            CubeFace::Right => &self.right,
            CubeFace::Top => &self.top,
            CubeFace::Bottom => &self.bottom,
        }
    }
}

/// Face images accumulated while a conversion is in flight. The orchestrator
/// fills one entry per face and seals the set through `into_complete`.
#[derive(Debug, Clone, Default)]
pub struct PartialCubeImages {
    pub front: Option<String>,
    pub back: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
    pub top: Option<String>,
    pub bottom: Option<String>,
}

impl PartialCubeImages {
    pub fn insert(&mut self, face: CubeFace, image: String) {
        match face {
            CubeFace::Front => self.front = Some(image),
            CubeFace::Back => self.back = Some(image),
            CubeFace::Left => self.left = Some(image),
            CubeFace::Right => self.right = Some(image),
            CubeFace::Top => self.top = Some(image),
            CubeFace::Bottom => self.bottom = Some(image),
        }
    }

    pub fn get(&self, face: CubeFace) -> Option<&String> {
        match face {
            CubeFace::Front => self.front.as_ref(),
            CubeFace::Back => self.back.as_ref(),
            CubeFace::Left => self.left.as_ref(),
            CubeFace::Right => self.right.as_ref(),
            CubeFace::Top => self.top.as_ref(),
            CubeFace::Bottom => self.bottom.as_ref(),
        }
    }

    /// True iff all six faces are present and non-empty.
    pub fn is_complete(&self) -> bool {
        CubeFace::RENDER_ORDER
            .iter()
            .all(|face| self.get(*face).is_some_and(|image| !image.is_empty()))
    }

    /// Seal the set. A missing or empty face signals an orchestrator bug,
    /// not a normal runtime condition.
    pub fn into_complete(self) -> Result<CubeImages> {
        fn take(face: CubeFace, image: Option<String>) -> Result<String> {
            match image {
                Some(image) if !image.is_empty() => Ok(image),
                _ => Err(Error::IncompleteResult(face).into()),
            }
        }

        Ok(CubeImages {
            front: take(CubeFace::Front, self.front)?,
            back: take(CubeFace::Back, self.back)?,
            left: take(CubeFace::Left, self.left)?,
            right: take(CubeFace::Right, self.right)?,
            top: take(CubeFace::Top, self.top)?,
            bottom: take(CubeFace::Bottom, self.bottom)?,
        })
    }
}
