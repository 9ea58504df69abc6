//! Frame pipeline driving conversion and edge visualization end-to-end.
//!
//! The [`FrameProcessor`] exposes a simple per-frame API: feed a validated
//! NV21 frame and get back a freshly allocated RGBA buffer. Internally it
//! coordinates buffer provisioning, the BT.601 color conversion, and, in
//! edge mode, grayscale reduction, Gaussian blur, Canny masking, and the
//! white-on-black composite.
//!
//! Typical usage:
//! ```no_run
//! use edgeview::{FrameProcessor, Nv21Frame};
//!
//! # fn example(bytes: &[u8]) -> Result<(), String> {
//! let mut processor = FrameProcessor::new();
//! let frame = Nv21Frame::new(640, 480, bytes)?;
//! let rgba = processor.process(&frame, true);
//! assert_eq!(rgba.len(), 640 * 480 * 4);
//! # Ok(())
//! # }
//! ```
//!
//! Calls are serialized by construction: `process` takes `&mut self`, so the
//! shared working buffers can never be touched by overlapping invocations.
use super::workspace::FrameWorkspace;
use crate::color::{nv21_to_rgba, rgba_to_gray, Nv21Frame};
use crate::edges::{canny_mask, gaussian_blur_in_place, sobel_gradients_into};
use crate::image::{ImageView, BLACK_OPAQUE, WHITE_OPAQUE};
use crate::types::{FrameReport, FrameTiming};
use log::debug;
use std::time::Instant;

/// Per-frame processor owning the reusable working buffers.
pub struct FrameProcessor {
    workspace: FrameWorkspace,
}

impl FrameProcessor {
    pub fn new() -> Self {
        Self {
            workspace: FrameWorkspace::new(),
        }
    }

    /// Process one frame, returning the RGBA bytes.
    ///
    /// With `edges_enabled` false this is a passthrough color conversion;
    /// with it true the output is the white-on-black edge composite. The
    /// returned buffer is an independent copy, always `w * h * 4` bytes.
    pub fn process(&mut self, frame: &Nv21Frame<'_>, edges_enabled: bool) -> Vec<u8> {
        self.process_with_diagnostics(frame, edges_enabled).rgba
    }

    /// Process one frame and return the output plus per-stage timings.
    pub fn process_with_diagnostics(
        &mut self,
        frame: &Nv21Frame<'_>,
        edges_enabled: bool,
    ) -> FrameReport {
        let (width, height) = (frame.width(), frame.height());
        debug!(
            "FrameProcessor::process start w={} h={} edges={}",
            width, height, edges_enabled
        );
        let total_start = Instant::now();
        let mut timing = FrameTiming::default();

        let ws = &mut self.workspace;
        ws.ensure(width, height);
        ws.yuv.copy_from_slice(frame.bytes());

        let convert_start = Instant::now();
        let (luma, chroma) = ws.yuv.split_at(width * height);
        nv21_to_rgba(luma, chroma, width, height, &mut ws.rgba);
        timing.convert_ms = convert_start.elapsed().as_secs_f64() * 1000.0;

        let mut edge_pixels = 0usize;
        if edges_enabled {
            let gray_start = Instant::now();
            rgba_to_gray(&ws.rgba, &mut ws.gray);
            timing.grayscale_ms = gray_start.elapsed().as_secs_f64() * 1000.0;

            let blur_start = Instant::now();
            gaussian_blur_in_place(&mut ws.gray, &mut ws.blur_scratch);
            timing.blur_ms = blur_start.elapsed().as_secs_f64() * 1000.0;

            let grad_start = Instant::now();
            sobel_gradients_into(&ws.gray, &mut ws.gx, &mut ws.gy, &mut ws.mag);
            timing.gradient_ms = grad_start.elapsed().as_secs_f64() * 1000.0;

            let nms_start = Instant::now();
            canny_mask(&ws.gx, &ws.gy, &ws.mag, &mut ws.mask, &mut ws.stack);
            timing.nms_ms = nms_start.elapsed().as_secs_f64() * 1000.0;

            let composite_start = Instant::now();
            ws.rgba.fill(BLACK_OPAQUE);
            for y in 0..height {
                let mask_row = ws.mask.row(y);
                let rgba_row = ws.rgba.row_mut(y);
                for (x, &m) in mask_row.iter().enumerate() {
                    if m != 0 {
                        rgba_row[x * 4..x * 4 + 4].copy_from_slice(&WHITE_OPAQUE);
                        edge_pixels += 1;
                    }
                }
            }
            timing.composite_ms = composite_start.elapsed().as_secs_f64() * 1000.0;
            debug!("edge composite: {} edge pixels", edge_pixels);
        }

        let rgba = ws.rgba.data[..ws.rgba.byte_len()].to_vec();
        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        FrameReport {
            rgba,
            width,
            height,
            edges_enabled,
            edge_pixels,
            timing,
        }
    }
}

impl Default for FrameProcessor {
    fn default() -> Self {
        Self::new()
    }
}
