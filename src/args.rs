use std::path::PathBuf;

use crate::resource::cubemap::OutputFormat;

pub struct Args {
    /// Panorama source: a file path or an inline base64 data URI.
    pub input: String,
    pub output_dir: PathBuf,
    /// Base name for output files; derived from the input when absent.
    pub stem: Option<String>,
    pub face_size: u32,
    pub high_quality: bool,
    pub output_format: OutputFormat,
    /// Also write the JSON manifest of data URIs.
    pub manifest: bool,
}
