#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod color;
pub mod image;
pub mod processor;
pub mod types;

// “Expert” modules – still public, but considered unstable internals.
pub mod edges;

// --- High-level re-exports -------------------------------------------------

// Main entry points: processor + frame input + results.
pub use crate::color::Nv21Frame;
pub use crate::processor::FrameProcessor;
pub use crate::types::{FrameReport, FrameTiming};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edgeview::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let (w, h) = (640usize, 480usize);
/// let nv21 = vec![0u8; w * h * 3 / 2];
/// let frame = Nv21Frame::new(w, h, &nv21)?;
///
/// let mut processor = FrameProcessor::new();
/// let report = processor.process_with_diagnostics(&frame, true);
/// println!(
///     "edges={} total_ms={:.3}",
///     report.edge_pixels, report.timing.total_ms
/// );
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::color::Nv21Frame;
    pub use crate::{FrameProcessor, FrameReport, FrameTiming};
}
