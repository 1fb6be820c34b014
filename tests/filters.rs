use enough::Unstoppable;
use zenfilters::filters::{Crop, GaussianBlur};
use zenfilters::*;

fn noise(w: usize, h: usize, seed: u32) -> PixelBuffer {
    let mut state: u32 = seed | 1;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state >> 8) as f32 / (1u32 << 24) as f32
    };
    PixelBuffer::from_fn(w, h, |_, _| rgb(next(), next(), next())).unwrap()
}

fn all_filters() -> Vec<Filter> {
    vec![
        Filter::Grayscale,
        Filter::Negative,
        Filter::Sepia,
        Filter::Sharpen,
        Filter::edge_detect(0.1).unwrap(),
        Filter::gaussian_blur(1.2).unwrap(),
        Filter::crop(1000, 1000),
    ]
}

fn in_unit_range(image: &PixelBuffer) -> bool {
    image
        .pixels()
        .iter()
        .all(|p| [p.r, p.g, p.b].iter().all(|c| (0.0..=1.0).contains(c)))
}

// ── Scenarios ───────────────────────────────────────────────────────

#[test]
fn grayscale_of_red() {
    let image = PixelBuffer::filled(1, 1, rgb(1.0, 0.0, 0.0)).unwrap();
    let out = Filter::Grayscale.apply(image, Unstoppable).unwrap();
    let p = out.get_pixel(0, 0).unwrap();
    for c in [p.r, p.g, p.b] {
        assert!((c - 0.299).abs() < 1e-6, "{p:?}");
    }
}

#[test]
fn negative_of_black_is_white() {
    let image = PixelBuffer::new(3, 2).unwrap();
    let out = Filter::Negative.apply(image, Unstoppable).unwrap();
    assert!(out.pixels().iter().all(|&p| p == gray(1.0)));
}

#[test]
fn crop_keeps_top_left() {
    let image = PixelBuffer::from_fn(4, 4, |x, y| gray((y * 4 + x) as f32 / 15.0)).unwrap();
    let out = Filter::crop(2, 2).apply(image.clone(), Unstoppable).unwrap();
    assert_eq!(out.dimensions(), (2, 2));
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(out.get_pixel(x, y).unwrap(), image.get_pixel(x, y).unwrap());
        }
    }
}

#[test]
fn crop_larger_than_image_is_identity() {
    let image = noise(5, 3, 11);
    let out = Filter::crop(10, 10).apply(image.clone(), Unstoppable).unwrap();
    assert_eq!(out, image);
}

#[test]
fn crop_zero_is_one_pixel() {
    assert_eq!(Crop::new(0, 0).output_dimensions(8, 8), (1, 1));
    let out = Filter::crop(0, 5).apply(noise(4, 4, 2), Unstoppable).unwrap();
    assert_eq!(out.dimensions(), (1, 4));
}

#[test]
fn sepia_of_white() {
    let image = PixelBuffer::filled(1, 1, gray(1.0)).unwrap();
    let p = Filter::Sepia.apply(image, Unstoppable).unwrap().get_pixel(0, 0).unwrap();
    assert_eq!(p.r, 1.0);
    assert_eq!(p.g, 1.0);
    assert!((p.b - 0.937).abs() < 1e-5, "{p:?}");
}

#[test]
fn sharpen_and_blur_leave_flat_images_alone() {
    let image = PixelBuffer::filled(6, 5, rgb(0.2, 0.5, 0.8)).unwrap();
    for filter in [Filter::Sharpen, Filter::gaussian_blur(2.0).unwrap()] {
        let out = filter.apply(image.clone(), Unstoppable).unwrap();
        for (p, q) in out.pixels().iter().zip(image.pixels()) {
            assert!((p.r - q.r).abs() < 1e-5, "{}: {p:?}", filter.name());
            assert!((p.g - q.g).abs() < 1e-5, "{}: {p:?}", filter.name());
            assert!((p.b - q.b).abs() < 1e-5, "{}: {p:?}", filter.name());
        }
    }
}

#[test]
fn blur_spreads_a_point() {
    let image = PixelBuffer::from_fn(9, 9, |x, y| {
        if (x, y) == (4, 4) { gray(1.0) } else { gray(0.0) }
    })
    .unwrap();
    let out = Filter::gaussian_blur(1.0).unwrap().apply(image, Unstoppable).unwrap();
    let center = out.get_pixel(4, 4).unwrap().r;
    let near = out.get_pixel(5, 4).unwrap().r;
    let far = out.get_pixel(7, 4).unwrap().r;
    assert!(center < 1.0);
    assert!(center > near && near > far && far > 0.0);
    // symmetric
    assert!((out.get_pixel(3, 4).unwrap().r - near).abs() < 1e-6);
    assert!((out.get_pixel(4, 5).unwrap().r - near).abs() < 1e-6);
}

#[test]
fn blur_kernel_shape() {
    let blur = GaussianBlur::new(1.5).unwrap();
    assert_eq!(blur.radius(), 5);
    assert_eq!(blur.kernel().len(), 11);
    let sum: f32 = blur.kernel().iter().sum();
    assert!((sum - 1.0).abs() < 1e-5);
}

#[test]
fn edge_detect_binarizes() {
    let image = PixelBuffer::from_fn(6, 6, |x, _| if x < 3 { gray(0.0) } else { gray(1.0) }).unwrap();
    let out = Filter::edge_detect(0.5).unwrap().apply(image, Unstoppable).unwrap();
    assert!(out.pixels().iter().all(|&p| p == gray(0.0) || p == gray(1.0)));
    // the bright side of the step responds, the dark side is clamped away
    assert_eq!(out.get_pixel(3, 2).unwrap(), gray(1.0));
    assert_eq!(out.get_pixel(2, 2).unwrap(), gray(0.0));
    assert_eq!(out.get_pixel(5, 2).unwrap(), gray(0.0));
}

#[test]
fn invalid_parameters() {
    for sigma in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let err = Filter::gaussian_blur(sigma).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter, "sigma {sigma}");
    }
    assert_eq!(
        Filter::edge_detect(f32::NAN).unwrap_err().kind(),
        ErrorKind::InvalidParameter
    );
}

// ── Properties ──────────────────────────────────────────────────────

#[test]
fn dimensions_preserved_except_crop() {
    for (w, h) in [(1, 1), (2, 7), (9, 4)] {
        for filter in all_filters() {
            let out = filter.apply(noise(w, h, 5), Unstoppable).unwrap();
            assert_eq!(out.dimensions(), (w, h), "{}", filter.name());
        }
    }
}

#[test]
fn outputs_stay_in_unit_range() {
    let image = noise(12, 10, 0x1234_5678);
    for filter in all_filters() {
        let out = filter.apply(image.clone(), Unstoppable).unwrap();
        assert!(in_unit_range(&out), "{}", filter.name());
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    let image = PixelBuffer::from_fn(4, 4, |x, y| rgb(x as f32 - 1.0, 2.0, y as f32 * 0.5)).unwrap();
    for filter in all_filters().into_iter().chain([Filter::crop(2, 3)]) {
        let out = filter.apply(image.clone(), Unstoppable).unwrap();
        assert!(in_unit_range(&out), "{}", filter.name());
    }
}

#[test]
fn double_negative_is_identity() {
    let image = noise(8, 8, 99);
    let twice = Pipeline::new()
        .with(Filter::Negative)
        .with(Filter::Negative)
        .apply(image.clone(), Unstoppable)
        .unwrap();
    for (p, q) in twice.pixels().iter().zip(image.pixels()) {
        assert!((p.r - q.r).abs() <= 1.0 / 255.0);
        assert!((p.g - q.g).abs() <= 1.0 / 255.0);
        assert!((p.b - q.b).abs() <= 1.0 / 255.0);
    }
}

#[test]
fn crop_dimensions_are_min() {
    for (w, h, cw, ch) in [(4, 4, 2, 3), (3, 8, 5, 2), (6, 6, 6, 6)] {
        let out = Filter::crop(cw, ch).apply(noise(w, h, 1), Unstoppable).unwrap();
        assert_eq!(out.dimensions(), (cw.min(w), ch.min(h)));
    }
}

#[test]
fn grayscale_is_achromatic() {
    let out = Filter::Grayscale.apply(noise(7, 3, 8), Unstoppable).unwrap();
    assert!(out.pixels().iter().all(|p| p.r == p.g && p.g == p.b));
}
