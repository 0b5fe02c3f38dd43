use anyhow::Result;
use base64::Engine;

use crate::error::Error;

const BASE64: base64::engine::GeneralPurpose = base64::engine::general_purpose::STANDARD;

/// Split a `data:<mime>;base64,<payload>` URI into its MIME type and decoded
/// payload bytes.
pub fn parse(uri: &str) -> Result<(String, Vec<u8>)> {
    let stripped = match uri.strip_prefix("data:") {
        Some(stripped) => stripped,
        None => {
            return Err(Error::Decode(String::from(
                "The given source is not a data URI.",
            ))
            .into())
        }
    };

    let (header, payload) = match stripped.split_once(',') {
        Some(parts) => parts,
        None => {
            return Err(Error::Decode(String::from(
                "The given data URI has no payload separator.",
            ))
            .into())
        }
    };

    let mime_type = match header.strip_suffix(";base64") {
        Some(mime_type) => mime_type,
        None => {
            return Err(Error::Decode(String::from(
                "Only base64-encoded data URIs are supported.",
            ))
            .into())
        }
    };

    let bytes = BASE64
        .decode(payload)
        .map_err(|decode_error| {
            Error::Decode(format!(
                "The data URI payload is not valid base64: {decode_error}"
            ))
        })?;

    Ok((String::from(mime_type), bytes))
}

/// Wrap encoded image bytes into a base64 data URI.
pub fn encode(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", BASE64.encode(bytes))
}
