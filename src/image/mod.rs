pub mod io;
pub mod plane;
pub mod rgba;
pub mod traits;
pub mod view;

pub use self::plane::{GrayPlane, Plane, PlaneF32};
pub use self::rgba::{RgbaImage, BLACK_OPAQUE, WHITE_OPAQUE};
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};
pub use self::view::GrayView;
