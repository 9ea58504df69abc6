//! Sobel image gradients over an 8-bit plane.
//!
//! Convolves the 3×3 Sobel kernel pair with border clamping and writes
//! per-pixel `gx`, `gy`, and the L1 magnitude `|gx| + |gy|` into
//! caller-provided float planes. The L1 magnitude is what the Canny
//! thresholds are calibrated against.
//!
//! Complexity: O(W·H) per pass; outputs are reused across frames by the
//! workspace instead of being reallocated.
use crate::image::{GrayPlane, ImageView, ImageViewMut, PlaneF32};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Compute Sobel gradients of `gray` into `gx`, `gy`, and `mag`.
///
/// The output planes are resized to match `gray`; existing allocations are
/// reused when dimensions allow.
pub fn sobel_gradients_into(
    gray: &GrayPlane,
    gx: &mut PlaneF32,
    gy: &mut PlaneF32,
    mag: &mut PlaneF32,
) {
    let w = gray.w;
    let h = gray.h;
    gx.resize(w, h);
    gy.resize(w, h);
    mag.resize(w, h);

    if w == 0 || h == 0 {
        return;
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [gray.row(y_idx[0]), gray.row(y_idx[1]), gray.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, src_row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                sum_x += src_row[x_idx[0]] as f32 * kx_row[0]
                    + src_row[x_idx[1]] as f32 * kx_row[1]
                    + src_row[x_idx[2]] as f32 * kx_row[2];
                sum_y += src_row[x_idx[0]] as f32 * ky_row[0]
                    + src_row[x_idx[1]] as f32 * ky_row[1]
                    + src_row[x_idx[2]] as f32 * ky_row[2];
            }

            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = sum_x.abs() + sum_y.abs();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_plane_has_zero_gradients() {
        let mut gray = GrayPlane::new(8, 8);
        gray.fill(100);
        let (mut gx, mut gy, mut mag) = (PlaneF32::empty(), PlaneF32::empty(), PlaneF32::empty());
        sobel_gradients_into(&gray, &mut gx, &mut gy, &mut mag);
        assert!(mag.data.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn vertical_step_yields_horizontal_gradient() {
        let mut gray = GrayPlane::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                gray.set(x, y, if x < 4 { 0 } else { 200 });
            }
        }
        let (mut gx, mut gy, mut mag) = (PlaneF32::empty(), PlaneF32::empty(), PlaneF32::empty());
        sobel_gradients_into(&gray, &mut gx, &mut gy, &mut mag);
        // Strongest response sits on the step columns and points along x.
        assert!(gx.get(4, 4).abs() > 0.0);
        assert_eq!(gy.get(4, 4), 0.0);
        assert!(mag.get(4, 4) > mag.get(1, 4));
    }
}
