/// Scale 8-bit RGB channels into [0, 1]
pub fn normalize_rgb(rgb: [u8; 3]) -> [f64; 3] {
    rgb.map(|channel| f64::from(channel) / 255.0)
}

/// Lightness component of the HLS color model
///
/// Midpoint of the largest and smallest normalized channel.
pub fn lightness(rgb: [f64; 3]) -> f64 {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    f64::midpoint(max, min)
}

/// Convert normalized RGB to `[hue, lightness, saturation]`
///
/// All components are in [0, 1]. Achromatic colors get zero hue and saturation.
pub fn rgb_to_hls(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let range = max - min;
    let l = lightness(rgb);

    if range == 0.0 {
        return [0.0, l, 0.0];
    }

    let s = if l <= 0.5 {
        range / sum
    } else {
        range / (2.0 - sum)
    };

    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    #[allow(clippy::float_cmp)]
    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    [(h / 6.0).rem_euclid(1.0), l, s]
}
