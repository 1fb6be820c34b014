#![no_main]
use libfuzzer_sys::fuzz_target;
use zenfilters::*;

fuzz_target!(|data: &[u8]| {
    // [w, h, blur sigma, edge threshold, filter bits, pixel bytes...]
    let [w, h, sigma, threshold, bits, rest @ ..] = data else {
        return;
    };
    let (w, h) = (usize::from(*w % 32) + 1, usize::from(*h % 32) + 1);

    let mut bytes = rest.iter().cycle();
    let mut next = || f32::from(bytes.next().copied().unwrap_or(0)) / 255.0;
    let Ok(image) = PixelBuffer::from_fn(w, h, |_, _| rgb(next(), next(), next())) else {
        return;
    };

    let mut pipeline = Pipeline::new();
    if bits & 1 != 0 {
        pipeline.push(Filter::Grayscale);
    }
    if bits & 2 != 0 {
        pipeline.push(Filter::Negative);
    }
    if bits & 4 != 0 {
        pipeline.push(Filter::Sepia);
    }
    if bits & 8 != 0 {
        pipeline.push(Filter::Sharpen);
    }
    if bits & 16 != 0 {
        pipeline.push(Filter::crop(usize::from(*sigma), usize::from(*threshold)));
    }
    if bits & 32 != 0 {
        pipeline.push(Filter::edge_detect(f32::from(*threshold) / 128.0).expect("finite threshold"));
    }
    if bits & 64 != 0 {
        pipeline.push(Filter::gaussian_blur(f32::from(*sigma % 16 + 1) / 4.0).expect("positive sigma"));
    }

    let out = pipeline.apply(image, enough::Unstoppable).expect("filters are infallible here");
    assert!(out.width() <= w && out.height() <= h);
    for p in out.pixels() {
        assert!((0.0..=1.0).contains(&p.r) && (0.0..=1.0).contains(&p.g) && (0.0..=1.0).contains(&p.b));
    }
});
