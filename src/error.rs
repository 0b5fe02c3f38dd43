use crate::data::face::CubeFace;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to decode the panorama source: {0}")]
    Decode(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("The cube image set is missing a valid {0} face.")]
    IncompleteResult(CubeFace),

    #[error("The conversion was cancelled.")]
    Cancelled,
}
