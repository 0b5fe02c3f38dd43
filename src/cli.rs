use std::path::PathBuf;

use clap::Parser;

use panorama_converter::OutputFormat;

/// Convert an equirectangular panorama into the six faces of a cubemap
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the panorama image, or an inline base64 data URI
    pub input: String,

    /// Directory that receives the six face images
    #[arg(short, long, default_value = "cubemap")]
    pub output_dir: PathBuf,

    /// Base name for the output files; defaults to the input file stem
    #[arg(long)]
    pub stem: Option<String>,

    /// Edge length of each cube face in pixels
    #[arg(short, long, default_value_t = 1024)]
    pub face_size: u32,

    /// Use the faster bilinear filter instead of Lanczos
    #[arg(long)]
    pub bilinear: bool,

    /// Encode the faces as PNG instead of JPEG
    #[arg(long)]
    pub png: bool,

    /// JPEG quality factor (0-100); ignored with --png
    #[arg(short = 'q', long, default_value_t = 90)]
    pub jpeg_quality: u8,

    /// Also write a JSON manifest mapping face names to data URIs
    #[arg(short, long)]
    pub manifest: bool,
}

impl From<Cli> for panorama_converter::args::Args {
    fn from(value: Cli) -> Self {
        panorama_converter::args::Args {
            input: value.input,
            output_dir: value.output_dir,
            stem: value.stem,
            face_size: value.face_size,
            high_quality: !value.bilinear,
            output_format: if value.png {
                OutputFormat::Png
            } else {
                OutputFormat::Jpeg {
                    quality: value.jpeg_quality,
                }
            },
            manifest: value.manifest,
        }
    }
}
