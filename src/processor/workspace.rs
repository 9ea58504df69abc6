//! Reusable working buffers amortising allocations across frames.
//!
//! The pipeline keeps one frame's worth of every intermediate buffer and
//! reallocates only when the caller-supplied dimensions change, so repeated
//! calls at a stable resolution are allocation-free.
use crate::color::Nv21Frame;
use crate::image::{GrayPlane, PlaneF32, RgbaImage};
use log::debug;

/// Working buffers owned by a [`FrameProcessor`](super::FrameProcessor).
///
/// The four frame-sized buffers (`yuv`, `rgba`, `gray`, `mask`) are
/// provisioned on every call; the gradient and blur scratch planes are
/// sized on demand by the edge stages and likewise reused.
pub struct FrameWorkspace {
    dims: Option<(usize, usize)>,
    /// NV21 ingest copy, `w * (h + h/2)` bytes.
    pub(crate) yuv: Vec<u8>,
    /// Color working buffer, also the edge composite canvas.
    pub(crate) rgba: RgbaImage,
    /// Grayscale working buffer (blurred in place in edge mode).
    pub(crate) gray: GrayPlane,
    /// Binary edge mask.
    pub(crate) mask: GrayPlane,
    /// Horizontal-pass scratch for the separable blur.
    pub(crate) blur_scratch: PlaneF32,
    pub(crate) gx: PlaneF32,
    pub(crate) gy: PlaneF32,
    pub(crate) mag: PlaneF32,
    /// Hysteresis worklist.
    pub(crate) stack: Vec<usize>,
}

impl FrameWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check-and-resize the working buffers for a `width × height` frame.
    ///
    /// Runs on every call; touches the allocator only when the dimensions
    /// differ from the previous frame's.
    pub fn ensure(&mut self, width: usize, height: usize) {
        if self.dims == Some((width, height)) {
            return;
        }
        debug!(
            "FrameWorkspace resize {:?} -> {}x{}",
            self.dims, width, height
        );
        self.yuv.resize(Nv21Frame::frame_len(width, height), 0);
        self.rgba.resize(width, height);
        self.gray.resize(width, height);
        self.mask.resize(width, height);
        self.dims = Some((width, height));
    }

    /// Dimensions the buffers are currently sized for.
    pub fn dims(&self) -> Option<(usize, usize)> {
        self.dims
    }
}

impl Default for FrameWorkspace {
    fn default() -> Self {
        Self {
            dims: None,
            yuv: Vec::new(),
            rgba: RgbaImage::empty(),
            gray: GrayPlane::empty(),
            mask: GrayPlane::empty(),
            blur_scratch: PlaneF32::empty(),
            gx: PlaneF32::empty(),
            gy: PlaneF32::empty(),
            mag: PlaneF32::empty(),
            stack: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_is_idempotent_at_fixed_dims() {
        let mut ws = FrameWorkspace::new();
        ws.ensure(64, 32);
        let ptr = ws.yuv.as_ptr();
        ws.ensure(64, 32);
        assert_eq!(ws.yuv.as_ptr(), ptr, "stable dims must not reallocate");
        assert_eq!(ws.dims(), Some((64, 32)));
    }

    #[test]
    fn ensure_resizes_all_frame_buffers() {
        let mut ws = FrameWorkspace::new();
        ws.ensure(64, 32);
        ws.ensure(32, 16);
        assert_eq!(ws.yuv.len(), Nv21Frame::frame_len(32, 16));
        assert_eq!(ws.rgba.byte_len(), 32 * 16 * 4);
        assert_eq!((ws.gray.w, ws.gray.h), (32, 16));
        assert_eq!((ws.mask.w, ws.mask.h), (32, 16));
    }
}
