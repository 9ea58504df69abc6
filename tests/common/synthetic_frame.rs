/// Generates a uniform NV21 frame with the given luma and chroma values.
pub fn solid_nv21(width: usize, height: usize, luma: u8, v: u8, u: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");
    assert!(
        width % 2 == 0 && height % 2 == 0,
        "NV21 dimensions must be even"
    );

    let mut buf = vec![0u8; width * height * 3 / 2];
    let (luma_plane, chroma_plane) = buf.split_at_mut(width * height);
    luma_plane.fill(luma);
    for pair in chroma_plane.chunks_exact_mut(2) {
        pair[0] = v;
        pair[1] = u;
    }
    buf
}

/// Generates an NV21 frame with neutral chroma and a vertical luma step at
/// `split_x`: `left` luma before it, `right` after.
pub fn vertical_step_nv21(width: usize, height: usize, split_x: usize, left: u8, right: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");
    assert!(
        width % 2 == 0 && height % 2 == 0,
        "NV21 dimensions must be even"
    );
    assert!(split_x < width, "split column must lie inside the frame");

    let mut buf = solid_nv21(width, height, 0, 128, 128);
    for y in 0..height {
        for x in 0..width {
            buf[y * width + x] = if x < split_x { left } else { right };
        }
    }
    buf
}

/// Gray level the BT.601 video-range formula produces for a luma value under
/// neutral chroma.
pub fn expected_gray(luma: u8) -> u8 {
    ((298 * (luma as i32 - 16) + 128) >> 8).clamp(0, 255) as u8
}
