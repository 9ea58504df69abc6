use edgeview::{FrameProcessor, Nv21Frame};

fn main() {
    // Demo stub: builds a synthetic NV21 frame and runs both pipeline modes
    let w = 640usize;
    let h = 480usize;
    let mut nv21 = vec![128u8; w * h * 3 / 2];
    // Luma ramp left-to-right so edge mode has gradients to work with
    for y in 0..h {
        for x in 0..w {
            nv21[y * w + x] = ((x * 255) / w) as u8;
        }
    }

    let frame = match Nv21Frame::new(w, h, &nv21) {
        Ok(frame) => frame,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let mut processor = FrameProcessor::new();
    let passthrough = processor.process_with_diagnostics(&frame, false);
    let edges = processor.process_with_diagnostics(&frame, true);
    println!(
        "passthrough: {} bytes in {:.3} ms",
        passthrough.rgba.len(),
        passthrough.timing.total_ms
    );
    println!(
        "edges: {} edge pixels in {:.3} ms",
        edges.edge_pixels, edges.timing.total_ms
    );
}
