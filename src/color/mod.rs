//! Colorspace conversions used by the frame pipeline.
//!
//! - NV21 (YUV 4:2:0 semi-planar, V before U) → RGBA8888, BT.601 video range.
//! - RGBA8888 → 8-bit grayscale, BT.601 luma weights.
//! - RGBA8888 → NV21 encoder for tools and tests.

pub mod gray;
pub mod nv21;

pub use gray::rgba_to_gray;
pub use nv21::{encode_nv21, nv21_to_rgba, Nv21Frame, ALPHA_OPAQUE};
