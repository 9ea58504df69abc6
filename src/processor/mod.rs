//! Per-frame processor turning NV21 camera buffers into RGBA output.
//!
//! Overview
//! - Provisions a workspace of frame-sized buffers, reallocated only when
//!   the frame dimensions change.
//! - Copies the caller's NV21 bytes in and converts them to RGBA8888 using
//!   the BT.601 video-range formula.
//! - In edge mode, reduces the frame to grayscale, blurs it, runs Canny,
//!   and rewrites the RGBA buffer as white edges on an opaque black canvas.
//! - Returns a fresh copy of the RGBA buffer so callers may hold or mutate
//!   it without affecting later frames.
//!
//! Modules
//! - `pipeline` – the [`FrameProcessor`] implementation.
//! - `workspace` – reusable buffers that amortise allocations across frames.

mod pipeline;
mod workspace;

pub use pipeline::FrameProcessor;
pub use workspace::FrameWorkspace;
