use edgeview::color::{encode_nv21, Nv21Frame};
use edgeview::image::io::{load_rgba_image, save_gray_png, save_rgba_png, write_json_file};
use edgeview::image::RgbaImage;
use edgeview::{FrameProcessor, FrameTiming};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub modes: ModesConfig,
    pub output: DemoOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ModesConfig {
    pub passthrough: bool,
    pub edges: bool,
}

impl Default for ModesConfig {
    fn default() -> Self {
        Self {
            passthrough: true,
            edges: true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DemoOutputConfig {
    #[serde(rename = "passthrough_image")]
    pub passthrough_image: Option<PathBuf>,
    #[serde(rename = "edges_image")]
    pub edges_image: Option<PathBuf>,
    #[serde(rename = "edge_mask_image")]
    pub edge_mask_image: Option<PathBuf>,
    #[serde(rename = "report_json")]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let source = load_rgba_image(&config.input)?;
    let (w, h) = even_dims(&source);
    let cropped = crop_to(&source, w, h);
    let nv21 = encode_nv21(&cropped)?;
    let frame = Nv21Frame::new(w, h, &nv21)?;

    let mut processor = FrameProcessor::new();
    let mut summary = DemoSummary {
        width: w,
        height: h,
        passthrough: None,
        edges: None,
        edge_pixels: 0,
    };

    if config.modes.passthrough {
        let report = processor.process_with_diagnostics(&frame, false);
        if let Some(path) = &config.output.passthrough_image {
            let out = RgbaImage {
                w,
                h,
                data: report.rgba.clone(),
            };
            save_rgba_png(&out, path)?;
            println!("Saved passthrough conversion to {}", path.display());
        }
        summary.passthrough = Some(report.timing);
    }

    if config.modes.edges {
        let report = processor.process_with_diagnostics(&frame, true);
        if let Some(path) = &config.output.edges_image {
            let out = RgbaImage {
                w,
                h,
                data: report.rgba.clone(),
            };
            save_rgba_png(&out, path)?;
            println!(
                "Saved edge composite ({} edge pixels) to {}",
                report.edge_pixels,
                path.display()
            );
        }
        if let Some(path) = &config.output.edge_mask_image {
            // The composite is binary, so its red channel doubles as the mask.
            let mask: Vec<u8> = report.rgba.chunks_exact(4).map(|px| px[0]).collect();
            let view = edgeview::image::GrayView {
                w,
                h,
                stride: w,
                data: &mask,
            };
            save_gray_png(&view, path)?;
            println!("Saved edge mask to {}", path.display());
        }
        summary.edge_pixels = report.edge_pixels;
        summary.edges = Some(report.timing);
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &summary)?;
        println!("Saved timing report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: edge_demo <config.json>".to_string()
}

/// Largest even dimensions not exceeding the source image's.
fn even_dims(image: &RgbaImage) -> (usize, usize) {
    (image.w & !1, image.h & !1)
}

fn crop_to(image: &RgbaImage, w: usize, h: usize) -> RgbaImage {
    if (image.w, image.h) == (w, h) {
        return image.clone();
    }
    let mut out = RgbaImage::new(w, h);
    for y in 0..h {
        out.row_mut(y).copy_from_slice(&image.row(y)[..w * 4]);
    }
    out
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoSummary {
    width: usize,
    height: usize,
    passthrough: Option<FrameTiming>,
    edges: Option<FrameTiming>,
    edge_pixels: usize,
}
