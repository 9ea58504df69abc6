//! Gaussian smoothing applied before edge detection.
//!
//! Fixed 5×5 kernel with σ = 1.4, applied as two separable 1D passes: a
//! horizontal pass into a float scratch plane, then a vertical pass writing
//! rounded bytes back into the source plane. Borders replicate the nearest
//! pixel.
use crate::image::{GrayPlane, ImageView, ImageViewMut, PlaneF32};

/// Normalised 5-tap Gaussian for σ = 1.4.
pub const GAUSSIAN_TAPS_SIGMA_1_4: [f32; 5] = [0.110210, 0.236912, 0.305757, 0.236912, 0.110210];

const RADIUS: usize = 2;

/// Blur `gray` in place; `scratch` is resized as needed and reused across
/// calls by the workspace.
pub fn gaussian_blur_in_place(gray: &mut GrayPlane, scratch: &mut PlaneF32) {
    let (w, h) = (gray.w, gray.h);
    if w == 0 || h == 0 {
        return;
    }
    scratch.resize(w, h);

    let taps = &GAUSSIAN_TAPS_SIGMA_1_4;
    for y in 0..h {
        let src = gray.row(y);
        let dst = scratch.row_mut(y);
        for (x, out) in dst.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let idx = clamp_index(x as isize + k as isize - RADIUS as isize, w);
                acc += tap * src[idx] as f32;
            }
            *out = acc;
        }
    }

    for y in 0..h {
        let rows: [&[f32]; 5] = [
            scratch.row(clamp_index(y as isize - 2, h)),
            scratch.row(clamp_index(y as isize - 1, h)),
            scratch.row(y),
            scratch.row(clamp_index(y as isize + 1, h)),
            scratch.row(clamp_index(y as isize + 2, h)),
        ];
        let dst = gray.row_mut(y);
        for (x, out) in dst.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                acc += tap * rows[k][x];
            }
            *out = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taps_sum_to_one() {
        let sum: f32 = GAUSSIAN_TAPS_SIGMA_1_4.iter().sum();
        assert!((sum - 1.0).abs() < 1e-4, "tap sum {sum}");
    }

    #[test]
    fn uniform_plane_is_unchanged() {
        let mut gray = GrayPlane::new(16, 16);
        gray.fill(93);
        let mut scratch = PlaneF32::empty();
        gaussian_blur_in_place(&mut gray, &mut scratch);
        assert!(gray.data.iter().all(|&v| v == 93));
    }

    #[test]
    fn step_edge_is_softened() {
        let w = 16;
        let mut gray = GrayPlane::new(w, 8);
        for y in 0..8 {
            for x in 0..w {
                gray.set(x, y, if x < w / 2 { 0 } else { 255 });
            }
        }
        let mut scratch = PlaneF32::empty();
        gaussian_blur_in_place(&mut gray, &mut scratch);
        // Pixels adjacent to the step take intermediate values.
        let near_step = gray.get(w / 2, 4);
        assert!(near_step > 0 && near_step < 255, "got {near_step}");
        // Far from the step the plane stays saturated.
        assert_eq!(gray.get(0, 4), 0);
        assert_eq!(gray.get(w - 1, 4), 255);
    }
}
