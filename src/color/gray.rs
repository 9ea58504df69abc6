//! RGBA → single-channel grayscale (BT.601 luma weights).
use crate::image::{GrayPlane, ImageViewMut, RgbaImage};

/// BT.601 luma weights in 8.8 fixed point; the three sum to 256.
const R_WEIGHT: u32 = 77;
const G_WEIGHT: u32 = 150;
const B_WEIGHT: u32 = 29;

/// Convert an RGBA buffer to grayscale; `dst` must match `src` dimensions.
pub fn rgba_to_gray(src: &RgbaImage, dst: &mut GrayPlane) {
    debug_assert_eq!((src.w, src.h), (dst.w, dst.h));
    for (y, gray_row) in dst.rows_mut().enumerate() {
        let rgba_row = src.row(y);
        for (px, gray) in rgba_row.chunks_exact(4).zip(gray_row.iter_mut()) {
            let weighted = R_WEIGHT * px[0] as u32 + G_WEIGHT * px[1] as u32 + B_WEIGHT * px[2] as u32;
            *gray = ((weighted + 128) >> 8) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_input_is_identity() {
        let mut src = RgbaImage::new(4, 2);
        src.fill([200, 200, 200, 255]);
        let mut dst = GrayPlane::new(4, 2);
        rgba_to_gray(&src, &mut dst);
        assert!(dst.data.iter().all(|&v| v == 200));
    }

    #[test]
    fn weights_favor_green() {
        let mut red = RgbaImage::new(2, 2);
        red.fill([255, 0, 0, 255]);
        let mut green = RgbaImage::new(2, 2);
        green.fill([0, 255, 0, 255]);
        let mut out_r = GrayPlane::new(2, 2);
        let mut out_g = GrayPlane::new(2, 2);
        rgba_to_gray(&red, &mut out_r);
        rgba_to_gray(&green, &mut out_g);
        assert!(out_g.data[0] > out_r.data[0]);
    }
}
