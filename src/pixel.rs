/// One RGB sample, each channel a normalized float conventionally in `[0, 1]`.
pub type Pixel = ::rgb::Rgb<f32>;

/// ITU-R BT.601 luma weights.
pub(crate) const LUMA_R: f32 = 0.299;
pub(crate) const LUMA_G: f32 = 0.587;
pub(crate) const LUMA_B: f32 = 0.114;

/// Build a pixel from its three channels.
#[inline]
pub const fn rgb(r: f32, g: f32, b: f32) -> Pixel {
    Pixel { r, g, b }
}

/// Achromatic pixel with all channels set to `v`.
#[inline]
pub const fn gray(v: f32) -> Pixel {
    Pixel { r: v, g: v, b: v }
}

/// Weighted luminance of `p`, not clamped.
#[inline]
pub fn luminance(p: Pixel) -> f32 {
    LUMA_R * p.r + LUMA_G * p.g + LUMA_B * p.b
}

/// Clamp to `[0, 1]`. NaN maps to 0.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Clamp every channel to `[0, 1]`.
#[inline]
pub fn clamp_pixel(p: Pixel) -> Pixel {
    rgb(clamp_unit(p.r), clamp_unit(p.g), clamp_unit(p.b))
}

/// Normalized channel to an 8-bit sample: `clamp(round(v * 255), 0, 255)`.
#[inline]
pub(crate) fn to_u8(v: f32) -> u8 {
    // `as` saturates and maps NaN to 0
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// 8-bit sample to a normalized channel.
#[inline]
pub(crate) fn from_u8(v: u8) -> f32 {
    f32::from(v) / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_of_primaries() {
        assert!((luminance(rgb(1.0, 0.0, 0.0)) - 0.299).abs() < 1e-6);
        assert!((luminance(rgb(0.0, 1.0, 0.0)) - 0.587).abs() < 1e-6);
        assert!((luminance(rgb(0.0, 0.0, 1.0)) - 0.114).abs() < 1e-6);
        assert!((luminance(gray(1.0)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn u8_conversion_clamps_and_rounds() {
        assert_eq!(to_u8(-0.5), 0);
        assert_eq!(to_u8(1.5), 255);
        assert_eq!(to_u8(f32::NAN), 0);
        assert_eq!(to_u8(0.5), 128);
        for v in 0..=255u8 {
            assert_eq!(to_u8(from_u8(v)), v);
        }
    }

    #[test]
    fn clamp_unit_handles_nan() {
        assert_eq!(clamp_unit(f32::NAN), 0.0);
        assert_eq!(clamp_unit(2.0), 1.0);
        assert_eq!(clamp_unit(-1.0), 0.0);
    }
}
