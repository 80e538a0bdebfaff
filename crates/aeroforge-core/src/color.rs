//! Numeric OKLCH to sRGB conversion for the terminal preview.
//!
//! The generated stylesheet keeps OKLCH as a string format; this module
//! exists only so the preview can paint the same colors a browser would.
//! Matrices from <https://bottosson.github.io/posts/oklab/> (D65, IEC
//! 61966-2-1 transfer function). Out-of-gamut results are clamped
//! per channel.

/// Convert an OKLCH color to 8-bit sRGB.
///
/// `lightness` in 0.0..=1.0, `chroma` >= 0.0, `hue_degrees` any angle.
pub fn oklch_to_rgb(lightness: f64, chroma: f64, hue_degrees: f64) -> (u8, u8, u8) {
    let hue_rad = hue_degrees.to_radians();
    let a = chroma * hue_rad.cos();
    let b = chroma * hue_rad.sin();
    oklab_to_rgb(lightness, a, b)
}

/// Convert an Oklab color to 8-bit sRGB.
pub fn oklab_to_rgb(l: f64, a: f64, b: f64) -> (u8, u8, u8) {
    let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = l - 0.0894841775 * a - 1.2914855480 * b;

    let l3 = l_ * l_ * l_;
    let m3 = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    let lin_r = 4.0767416621 * l3 - 3.3077115913 * m3 + 0.2309699292 * s3;
    let lin_g = -1.2684380046 * l3 + 2.6097574011 * m3 - 0.3413193965 * s3;
    let lin_b = -0.0041960863 * l3 - 0.7034186147 * m3 + 1.7076147010 * s3;

    (
        encode_srgb(lin_r),
        encode_srgb(lin_g),
        encode_srgb(lin_b),
    )
}

/// Linear interpolation between two sRGB colors, componentwise.
///
/// Good enough for the preview's vertical gradient; no perceptual
/// correction is attempted.
pub fn mix_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let lerp = |x: u8, y: u8| -> u8 { (x as f64 + (y as f64 - x as f64) * t).round() as u8 };
    (lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Encode linear light as gamma-compressed sRGB, clamped to gamut.
fn encode_srgb(linear: f64) -> u8 {
    let clamped = linear.clamp(0.0, 1.0);
    let encoded = if clamped <= 0.0031308 {
        12.92 * clamped
    } else {
        1.055 * clamped.powf(1.0 / 2.4) - 0.055
    };
    (encoded * 255.0).round() as u8
}
