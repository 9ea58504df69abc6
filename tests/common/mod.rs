pub mod synthetic_frame;
