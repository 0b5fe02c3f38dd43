use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

use crate::data::face::CubeFace;
use crate::error::Error;
use crate::render::face::FaceRenderer;
use crate::resample::SampleFilter;
use crate::resource::cubemap::{encode_face, CubeImages, OutputFormat, PartialCubeImages};
use crate::resource::panorama::data_uri::DataUriPanoramaLoader;
use crate::resource::panorama::file::FileSystemPanoramaLoader;
use crate::resource::panorama::PanoramaLoader;

pub const DEFAULT_FACE_SIZE: u32 = 1024;

pub type ProgressCallback = dyn Fn(f64, CubeFace) + Send + Sync;

/// Cooperative cancellation flag, checked between faces. Rendering never
/// suspends inside a face, so cancellation is coarse-grained.
#[derive(Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Options scoped to a single conversion call.
pub struct ConversionOptions {
    /// Edge length of each output face in pixels.
    pub face_size: u32,
    /// Lanczos reconstruction when true, bilinear when false.
    pub high_quality: bool,
    /// Encoding applied to each rendered face.
    pub output_format: OutputFormat,
    /// Invoked once per face with the running percentage, and a final time
    /// at 100 after the last face.
    pub on_progress: Option<Box<ProgressCallback>>,
    pub cancellation: CancellationToken,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            face_size: DEFAULT_FACE_SIZE,
            high_quality: true,
            output_format: OutputFormat::default(),
            on_progress: None,
            cancellation: CancellationToken::new(),
        }
    }
}

#[derive(Debug)]
enum ConversionState {
    NotStarted,
    Loading,
    Rendering(usize),
    Complete,
    Failed,
}

fn transition(state: &mut ConversionState, next: ConversionState) {
    log::debug!("conversion state: {state:?} -> {next:?}");
    *state = next;
}

/// Convert an equirectangular panorama into the six cube face images.
///
/// Faces render sequentially in the fixed order; a failure at any step
/// aborts the whole conversion with no partial result. The operation is
/// cheap to re-invoke wholesale, so there is no per-face retry.
pub fn convert(
    loader: &impl PanoramaLoader,
    options: &ConversionOptions,
) -> Result<CubeImages> {
    let mut state = ConversionState::NotStarted;

    let result = run_conversion(loader, options, &mut state);
    if let Err(conversion_error) = &result {
        transition(&mut state, ConversionState::Failed);
        log::warn!("conversion failed: {conversion_error:#}");
    }

    result
}

fn run_conversion(
    loader: &impl PanoramaLoader,
    options: &ConversionOptions,
    state: &mut ConversionState,
) -> Result<CubeImages> {
    if options.face_size == 0 {
        return Err(Error::DegenerateInput(String::from(
            "The requested face size must be a positive number of pixels.",
        ))
        .into());
    }

    transition(state, ConversionState::Loading);
    let source = loader.load_panorama()?;
    log::info!(
        "loaded panorama source ({}x{})",
        source.width(),
        source.height()
    );

    let renderer = FaceRenderer::new(SampleFilter::from_quality(options.high_quality));
    let mut partial = PartialCubeImages::default();

    for (index, face) in CubeFace::RENDER_ORDER.iter().copied().enumerate() {
        if options.cancellation.is_cancelled() {
            return Err(Error::Cancelled.into());
        }

        transition(state, ConversionState::Rendering(index));
        report_progress(options, index as f64 / 6.0 * 100.0, face);

        let started = Instant::now();
        let raster = renderer.render(&source, face, options.face_size)?;
        let encoded = encode_face(&raster, options.output_format)?;
        log::debug!("rendered {face} face in {:.1?}", started.elapsed());

        partial.insert(face, encoded);
    }

    let images = partial.into_complete()?;
    transition(state, ConversionState::Complete);
    report_progress(options, 100.0, CubeFace::Front);

    Ok(images)
}

/// String-source entry point matching the editor's calling convention: a
/// data URI converts in place, anything else is treated as a file path.
pub fn convert_source(source: &str, options: &ConversionOptions) -> Result<CubeImages> {
    if source.starts_with("data:") {
        convert(
            &DataUriPanoramaLoader {
                uri: String::from(source),
            },
            options,
        )
    } else {
        convert(
            &FileSystemPanoramaLoader {
                path: std::path::PathBuf::from(source),
            },
            options,
        )
    }
}

fn report_progress(options: &ConversionOptions, percent: f64, face: CubeFace) {
    if let Some(on_progress) = &options.on_progress {
        on_progress(percent, face);
    }
}
