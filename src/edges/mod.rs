//! Edge-detection building blocks for the frame pipeline.
//!
//! The edge visualization runs three fixed stages over the grayscale working
//! buffer:
//!
//! - Gaussian blur (5×5, σ = 1.4) to suppress sensor noise before
//!   differentiation.
//! - Sobel gradients returning `gx`, `gy`, and the L1 magnitude.
//! - Canny non-maximum suppression with double-threshold hysteresis
//!   (50 / 150), producing a 0/255 mask.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate).
//! - Write into workspace-owned buffers so repeated frames allocate nothing.

pub mod blur;
pub mod canny;
pub mod grad;

pub use blur::{gaussian_blur_in_place, GAUSSIAN_TAPS_SIGMA_1_4};
pub use canny::{canny_mask, EDGE, HIGH_THRESHOLD, LOW_THRESHOLD};
pub use grad::sobel_gradients_into;
