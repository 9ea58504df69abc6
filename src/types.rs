use serde::Serialize;

/// Per-stage wall-clock timings for one processed frame, in milliseconds.
///
/// Stages that did not run (edge stages in passthrough mode) report 0.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FrameTiming {
    pub convert_ms: f64,
    pub grayscale_ms: f64,
    pub blur_ms: f64,
    pub gradient_ms: f64,
    pub nms_ms: f64,
    pub composite_ms: f64,
    pub total_ms: f64,
}

/// Result of one processed frame: the RGBA bytes plus diagnostics.
#[derive(Clone, Debug, Serialize)]
pub struct FrameReport {
    /// RGBA8888 output, `width * height * 4` bytes, freshly allocated.
    #[serde(skip)]
    pub rgba: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub edges_enabled: bool,
    /// Number of white pixels in the edge composite (0 in passthrough mode).
    pub edge_pixels: usize,
    pub timing: FrameTiming,
}
