use anyhow::Result;
use cgmath::InnerSpace;

use crate::error::Error;

/// Project a scene-space direction onto the equirectangular UV square.
///
/// The direction is normalized first, then converted to spherical
/// coordinates: longitude = atan2(z, x) in [-pi, pi] and latitude = asin(y)
/// in [-pi/2, pi/2]. The sign conventions must match the per-face
/// orientation table exactly or faces come out mirrored against each other.
pub fn direction_to_equirectangular(direction: cgmath::Vector3<f64>) -> Result<(f64, f64)> {
    let magnitude = direction.magnitude();
    if magnitude == 0.0 {
        return Err(Error::DegenerateInput(String::from(
            "The given direction vector has zero length.",
        ))
        .into());
    }

    let normalized = direction / magnitude;

    let longitude = normalized.z.atan2(normalized.x);
    let latitude = normalized.y.clamp(-1.0, 1.0).asin();

    let u = (longitude + std::f64::consts::PI) / (2.0 * std::f64::consts::PI);
    let v = (latitude + std::f64::consts::FRAC_PI_2) / std::f64::consts::PI;

    Ok((u, v))
}
