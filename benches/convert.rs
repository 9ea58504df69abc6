use criterion::{criterion_group, criterion_main, Criterion};
use edgeview::{FrameProcessor, Nv21Frame};

fn synthetic_frame(w: usize, h: usize) -> Vec<u8> {
    let mut buf = vec![128u8; w * h * 3 / 2];
    for y in 0..h {
        for x in 0..w {
            buf[y * w + x] = ((x * 255) / w) as u8;
        }
    }
    buf
}

pub fn benchmark_process(c: &mut Criterion) {
    let dims = [(320, 240), (640, 480), (1280, 720), (1920, 1080)];

    for (mode, edges) in [("convert", false), ("edges", true)] {
        let mut group = c.benchmark_group(format!("process/{mode}"));
        for (w, h) in dims {
            let buf = synthetic_frame(w, h);
            let mut processor = FrameProcessor::new();
            group.bench_with_input(format!("{w}x{h}"), &buf, |b, buf| {
                b.iter(|| {
                    let frame = Nv21Frame::new(w, h, buf).unwrap();
                    processor.process(&frame, edges)
                })
            });
        }
        group.finish();
    }
}

criterion_group!(benches, benchmark_process);
criterion_main!(benches);
