//! NV21 frames and NV21 → RGBA8888 conversion.
//!
//! NV21 is YUV 4:2:0 semi-planar: a full-resolution luma plane followed by a
//! half-height interleaved chroma plane ordered V,U. A `width × height` frame
//! occupies `width * height * 3 / 2` bytes.
//!
//! The conversion uses the ITU-R BT.601 video-range coefficients in 8.8
//! fixed point, matching the common integer reference implementations, with
//! alpha forced to opaque.
use crate::image::RgbaImage;

/// BT.601 video-range coefficients, 8.8 fixed point.
const Y_SCALE: i32 = 298;
const V_TO_R: i32 = 409;
const U_TO_G: i32 = 100;
const V_TO_G: i32 = 208;
const U_TO_B: i32 = 516;
/// Rounding term applied before the `>> 8`.
const FIX_HALF: i32 = 128;

/// Alpha channel value in every produced pixel.
pub const ALPHA_OPAQUE: u8 = 255;

/// Borrowed, validated NV21 frame.
///
/// Construction checks the byte length against the declared dimensions, so
/// the conversion routines can run without per-pixel bounds concerns.
#[derive(Clone, Debug)]
pub struct Nv21Frame<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> Nv21Frame<'a> {
    /// Number of bytes in an NV21 frame of the given dimensions.
    pub const fn frame_len(width: usize, height: usize) -> usize {
        width * (height + height / 2)
    }

    /// Wrap caller bytes as an NV21 frame.
    ///
    /// Dimensions must be positive and even (4:2:0 chroma subsampling pairs
    /// two rows and two columns per chroma sample), and `data` must hold
    /// exactly `width * height * 3 / 2` bytes.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("Invalid frame dimensions {width}x{height}"));
        }
        if width % 2 != 0 || height % 2 != 0 {
            return Err(format!(
                "NV21 requires even dimensions, got {width}x{height}"
            ));
        }
        let expected = Self::frame_len(width, height);
        if data.len() != expected {
            return Err(format!(
                "NV21 buffer for {width}x{height} must be {expected} bytes, got {}",
                data.len()
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The whole frame, luma followed by interleaved chroma.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        self.data
    }

    /// Full-resolution luma plane (`width * height` bytes).
    #[inline]
    pub fn luma(&self) -> &[u8] {
        &self.data[..self.width * self.height]
    }

    /// Interleaved V,U chroma plane (`width * height / 2` bytes).
    #[inline]
    pub fn chroma(&self) -> &[u8] {
        &self.data[self.width * self.height..]
    }
}

#[inline]
fn clamp_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[inline]
fn bt601_rgb(y: i32, u: i32, v: i32) -> (u8, u8, u8) {
    let c = y - 16;
    let d = u - 128;
    let e = v - 128;
    let r = (Y_SCALE * c + V_TO_R * e + FIX_HALF) >> 8;
    let g = (Y_SCALE * c - U_TO_G * d - V_TO_G * e + FIX_HALF) >> 8;
    let b = (Y_SCALE * c + U_TO_B * d + FIX_HALF) >> 8;
    (clamp_u8(r), clamp_u8(g), clamp_u8(b))
}

#[inline]
fn convert_row(luma_row: &[u8], chroma_row: &[u8], out_row: &mut [u8], width: usize) {
    for x in 0..width {
        let pair = x & !1;
        let v = chroma_row[pair] as i32;
        let u = chroma_row[pair + 1] as i32;
        let (r, g, b) = bt601_rgb(luma_row[x] as i32, u, v);
        let o = x * 4;
        out_row[o] = r;
        out_row[o + 1] = g;
        out_row[o + 2] = b;
        out_row[o + 3] = ALPHA_OPAQUE;
    }
}

/// Convert NV21 planes into an RGBA buffer of matching dimensions.
///
/// `luma` and `chroma` are the two planes of a `width × height` frame and
/// `dst` must already be sized to `width × height`; the pipeline guarantees
/// both through its workspace.
#[cfg(not(feature = "parallel"))]
pub fn nv21_to_rgba(luma: &[u8], chroma: &[u8], width: usize, height: usize, dst: &mut RgbaImage) {
    debug_assert_eq!(dst.w, width);
    debug_assert_eq!(dst.h, height);
    for y in 0..height {
        let luma_row = &luma[y * width..(y + 1) * width];
        let chroma_row = &chroma[(y / 2) * width..(y / 2) * width + width];
        convert_row(luma_row, chroma_row, dst.row_mut(y), width);
    }
}

/// Convert NV21 planes into an RGBA buffer, one rayon task per output row.
#[cfg(feature = "parallel")]
pub fn nv21_to_rgba(luma: &[u8], chroma: &[u8], width: usize, height: usize, dst: &mut RgbaImage) {
    use rayon::prelude::*;

    debug_assert_eq!(dst.w, width);
    debug_assert_eq!(dst.h, height);
    dst.data[..width * height * 4]
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(y, out_row)| {
            let luma_row = &luma[y * width..(y + 1) * width];
            let chroma_row = &chroma[(y / 2) * width..(y / 2) * width + width];
            convert_row(luma_row, chroma_row, out_row, width);
        });
}

/// Encode an RGBA image as an NV21 byte buffer.
///
/// The inverse of [`nv21_to_rgba`] up to chroma subsampling: each chroma
/// sample is the average of its 2×2 pixel block. Used by the offline tools
/// and tests to synthesize camera-format input; dimensions must be even.
pub fn encode_nv21(image: &RgbaImage) -> Result<Vec<u8>, String> {
    let (w, h) = (image.w, image.h);
    if w == 0 || h == 0 || w % 2 != 0 || h % 2 != 0 {
        return Err(format!("NV21 requires positive even dimensions, got {w}x{h}"));
    }
    let mut out = vec![0u8; Nv21Frame::frame_len(w, h)];
    let (luma, chroma) = out.split_at_mut(w * h);

    for y in 0..h {
        let row = image.row(y);
        let luma_row = &mut luma[y * w..(y + 1) * w];
        for x in 0..w {
            let o = x * 4;
            let (r, g, b) = (row[o] as i32, row[o + 1] as i32, row[o + 2] as i32);
            luma_row[x] = clamp_u8(((66 * r + 129 * g + 25 * b + FIX_HALF) >> 8) + 16);
        }
    }

    for by in 0..h / 2 {
        let top = image.row(by * 2);
        let bot = image.row(by * 2 + 1);
        let chroma_row = &mut chroma[by * w..(by + 1) * w];
        for bx in 0..w / 2 {
            let mut r = 0i32;
            let mut g = 0i32;
            let mut b = 0i32;
            for row in [top, bot] {
                for px in [bx * 2, bx * 2 + 1] {
                    let o = px * 4;
                    r += row[o] as i32;
                    g += row[o + 1] as i32;
                    b += row[o + 2] as i32;
                }
            }
            let (r, g, b) = ((r + 2) / 4, (g + 2) / 4, (b + 2) / 4);
            let v = ((112 * r - 94 * g - 18 * b + FIX_HALF) >> 8) + 128;
            let u = ((-38 * r - 74 * g + 112 * b + FIX_HALF) >> 8) + 128;
            chroma_row[bx * 2] = clamp_u8(v);
            chroma_row[bx * 2 + 1] = clamp_u8(u);
        }
    }

    Ok(out)
}
