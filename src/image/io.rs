//! I/O helpers for pixel buffers and JSON.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA buffer.
//! - `save_rgba_png`: write an `RgbaImage` to a PNG.
//! - `save_gray_png`: write a single-channel view to a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::rgba::RgbaImage;
use super::traits::ImageView;
use image::{GrayImage, ImageBuffer, Luma, Rgba};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to RGBA8888.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    Ok(RgbaImage {
        w,
        h,
        data: img.into_raw(),
    })
}

/// Save an RGBA buffer to a PNG.
pub fn save_rgba_png(image: &RgbaImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data = image.data.clone();
    let out: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(image.w as u32, image.h as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a single-channel 8-bit view to a grayscale PNG.
pub fn save_gray_png<I>(view: &I, path: &Path) -> Result<(), String>
where
    I: ImageView<Pixel = u8>,
{
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(view.width() as u32, view.height() as u32);
    for (y, row) in view.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([px]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
