use crate::data::raster::Raster;

use super::{clamp_y, wrap_x};

/// The Lanczos window: 1 at t = 0, 0 at |t| >= a, a windowed sinc between.
fn kernel(t: f64, a: i64) -> f64 {
    if t == 0.0 {
        return 1.0;
    }

    let a = a as f64;
    if t.abs() >= a {
        return 0.0;
    }

    let pi_t = std::f64::consts::PI * t;
    a * pi_t.sin() * (pi_t / a).sin() / (pi_t * pi_t)
}

/// Reconstruct a color at fractional source coordinates with a separable
/// windowed-sinc filter. Columns wrap, rows clamp, exactly as in the
/// bilinear path.
///
/// The tap loop runs from -(a - 1) to a inclusive and is deliberately not
/// re-centered around the sample point; changing the range changes output
/// pixel values.
pub fn sample(source: &Raster, x: f64, y: f64, kernel_size: i64) -> [u8; 4] {
    let width = source.width();
    let height = source.height();

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    let mut accumulated = [0.0f64; 4];
    let mut weight_sum = 0.0f64;

    for j in (-kernel_size + 1)..=kernel_size {
        let weight_y = kernel(y - (y0 + j) as f64, kernel_size);
        let sy = clamp_y(y0 + j, height);

        for i in (-kernel_size + 1)..=kernel_size {
            let weight = kernel(x - (x0 + i) as f64, kernel_size) * weight_y;
            let pixel = source.pixel(wrap_x(x0 + i, width), sy);

            for channel in 0..4 {
                accumulated[channel] += pixel[channel] as f64 * weight;
            }
            weight_sum += weight;
        }
    }

    if weight_sum <= 0.0 {
        // A collapsed window cannot be normalized; fall back to the nearest
        // sample.
        return source.pixel(wrap_x(x0, width), clamp_y(y0, height));
    }

    let mut sample = [0u8; 4];
    for channel in 0..4 {
        sample[channel] = (accumulated[channel] / weight_sum)
            .round()
            .clamp(0.0, 255.0) as u8;
    }

    sample
}
