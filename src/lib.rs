use std::path::PathBuf;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::args::Args;
use crate::resource::cubemap::file::FileSystemCubeMapWriter;

pub mod args;
pub mod convert;
pub mod data;
pub mod error;
pub mod render;
pub mod resample;
pub mod resource;

pub use crate::convert::{convert, convert_source, CancellationToken, ConversionOptions};
pub use crate::data::face::CubeFace;
pub use crate::error::Error;
pub use crate::resource::cubemap::{CubeImages, OutputFormat, PartialCubeImages};
pub use crate::resource::panorama::PanoramaLoader;

pub fn run(args: Args) -> Result<()> {
    env_logger::init();

    let progress = ProgressBar::new(100);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.green/blue}] {percent}% {msg}")?
            .progress_chars("█▉▊▋▌▍▎▏ "),
    );

    let bar = progress.clone();
    let options = ConversionOptions {
        face_size: args.face_size,
        high_quality: args.high_quality,
        output_format: args.output_format,
        on_progress: Some(Box::new(move |percent, face| {
            bar.set_position(percent.round() as u64);
            bar.set_message(face.label());
        })),
        cancellation: CancellationToken::new(),
    };

    let images = convert_source(&args.input, &options)?;
    progress.finish_with_message("done");

    let stem = match &args.stem {
        Some(stem) => stem.clone(),
        None => derive_stem(&args.input),
    };

    let writer = FileSystemCubeMapWriter::new(&args.output_dir, &stem);
    for path in writer.write_faces(&images)? {
        log::info!("wrote {}", path.display());
    }

    if args.manifest {
        let path = writer.write_manifest(&images)?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}

fn derive_stem(input: &str) -> String {
    if input.starts_with("data:") {
        return String::from("panorama");
    }

    match PathBuf::from(input).file_stem() {
        Some(file_stem) => file_stem.to_string_lossy().to_string(),
        None => String::from("panorama"),
    }
}
