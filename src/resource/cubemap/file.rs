use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::data::face::CubeFace;
use crate::resource::cubemap::CubeImages;
use crate::resource::data_uri;

/// Writes a completed cube image set to disk: one image file per face, plus
/// an optional JSON manifest carrying the same images as data URIs.
pub struct FileSystemCubeMapWriter {
    pub output_dir: PathBuf,
    pub stem: String,
}

impl FileSystemCubeMapWriter {
    pub fn new(output_dir: &Path, stem: &str) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            stem: String::from(stem),
        }
    }

    /// Write the six face images as `<stem>_<face>.<ext>`; returns the paths
    /// in render order.
    pub fn write_faces(&self, images: &CubeImages) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.output_dir)?;

        let mut paths = Vec::with_capacity(6);
        for face in CubeFace::RENDER_ORDER {
            let (mime_type, bytes) = data_uri::parse(images.get(face))?;
            let extension = extension_for_mime_type(&mime_type);

            let path = self
                .output_dir
                .join(format!("{}_{}.{}", self.stem, face, extension));
            std::fs::write(&path, &bytes)?;
            paths.push(path);
        }

        Ok(paths)
    }

    /// Write the JSON manifest mapping face names to data URIs.
    pub fn write_manifest(&self, images: &CubeImages) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(format!("{}_cubemap.json", self.stem));
        std::fs::write(&path, serde_json::to_string_pretty(images)?)?;

        Ok(path)
    }
}

fn extension_for_mime_type(mime_type: &str) -> &'static str {
    match mime_type {
        "image/png" => "png",
        _ => "jpg",
    }
}
