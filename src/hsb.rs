//! RGB↔HSB conversion math.
//!
//! Hue is a circular angle in [0, 360), saturation and brightness are
//! percentages in [0, 100], rgb channels are in [0, 255]. These functions
//! are the single source of truth for the conversion; everything else in
//! the crate goes through them.

/// Converts rgb channels in [0, 255] to (hue, saturation, brightness).
///
/// A grey color (delta of zero) reports a hue of zero, and black reports
/// a saturation of zero, since both are undefined there.
pub(crate) fn from_rgb(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
    let r = red / 255.;
    let g = green / 255.;
    let b = blue / 255.;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let brightness = max;
    let saturation = if max == 0. { 0. } else { delta / max };
    let hue = if delta == 0. {
        0.
    } else {
        let hue = if max == r {
            (g - b) / delta * 60.
        } else if max == g {
            ((b - r) / delta + 2.) * 60.
        } else {
            ((r - g) / delta + 4.) * 60.
        };
        if hue < 0. { hue + 360. } else { hue }
    };
    (hue, saturation * 100., brightness * 100.)
}

/// Converts (hue, saturation, brightness) to rgb channels in [0, 255].
///
/// Hue is wrapped into [0, 360) first, so 360 means the same thing as 0
/// and negative angles mean what you'd expect.
pub(crate) fn to_rgb(hue: f64, saturation: f64, brightness: f64) -> (f64, f64, f64) {
    let h = hue.rem_euclid(360.) / 60.;
    let s = saturation / 100.;
    let v = brightness / 100.;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1. - s);
    let q = v * (1. - s * f);
    let t = v * (1. - s * (1. - f));
    let (r, g, b) = match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    (r * 255., g * 255., b * 255.)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: (f64, f64, f64), actual: (f64, f64, f64)) {
        assert!(
            (expected.0 - actual.0).abs() < 1e-4
                && (expected.1 - actual.1).abs() < 1e-4
                && (expected.2 - actual.2).abs() < 1e-4,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn primaries() {
        assert_close((0., 100., 100.), from_rgb(255., 0., 0.));
        assert_close((120., 100., 100.), from_rgb(0., 255., 0.));
        assert_close((240., 100., 100.), from_rgb(0., 0., 255.));
        assert_close((255., 0., 0.), to_rgb(0., 100., 100.));
        assert_close((0., 255., 0.), to_rgb(120., 100., 100.));
        assert_close((0., 0., 255.), to_rgb(240., 100., 100.));
    }

    #[test]
    fn grey_has_zero_hue_and_saturation() {
        let (hue, saturation, brightness) = from_rgb(128., 128., 128.);
        assert_eq!(0., hue);
        assert_eq!(0., saturation);
        assert!((brightness - 128. / 255. * 100.).abs() < 1e-9);
    }

    #[test]
    fn black_regardless_of_hue_and_saturation() {
        assert_close((0., 0., 0.), to_rgb(200., 50., 0.));
        assert_eq!(0., from_rgb(0., 0., 0.).1);
    }

    #[test]
    fn negative_hue_wraps() {
        // The piecewise formula goes negative when blue dominates green.
        let (hue, _, _) = from_rgb(255., 0., 128.);
        assert!((0. ..360.).contains(&hue));
        assert!(hue > 300.);
    }

    #[test]
    fn hue_360_is_hue_0() {
        assert_eq!(to_rgb(0., 100., 100.), to_rgb(360., 100., 100.));
    }

    #[test]
    fn spun_hue_wraps_round() {
        assert_close(to_rgb(10., 80., 80.), to_rgb(370., 80., 80.));
        assert_close(to_rgb(350., 80., 80.), to_rgb(-10., 80., 80.));
    }

    #[test]
    fn round_trip() {
        for &(r, g, b) in &[
            (51., 85., 170.),
            (0., 0., 0.),
            (255., 255., 255.),
            (1., 2., 3.),
            (200., 100., 50.),
        ] {
            let (hue, saturation, brightness) = from_rgb(r, g, b);
            assert_close((r, g, b), to_rgb(hue, saturation, brightness));
        }
    }
}
