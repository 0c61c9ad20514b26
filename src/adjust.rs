//! Tonal adjustments, implemented as an HSB round trip.

use crate::{Color, hsb};

impl Color {
    /// Increases this color's saturation by a percentage amount.
    ///
    /// The result is clamped into [0, 100]. Alpha is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_hex_str("#3355AA").unwrap();
    /// assert_eq!(100., color.saturate(100.).saturation());
    /// ```
    pub fn saturate(&self, amount: f64) -> Color {
        self.with_hsb(|hue, saturation, brightness| {
            (hue, (saturation + amount).clamp(0., 100.), brightness)
        })
    }

    /// Decreases this color's saturation by a percentage amount.
    ///
    /// The result is clamped into [0, 100]. Alpha is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_hex_str("#3355AA").unwrap();
    /// assert!(color.desaturate(20.).saturation() < color.saturation());
    /// ```
    pub fn desaturate(&self, amount: f64) -> Color {
        self.saturate(-amount)
    }

    /// Increases this color's brightness by a percentage amount.
    ///
    /// The result is clamped into [0, 100]. Alpha is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_hex_str("#3355AA").unwrap();
    /// assert_eq!(100., color.lighten(100.).brightness());
    /// ```
    pub fn lighten(&self, amount: f64) -> Color {
        self.with_hsb(|hue, saturation, brightness| {
            (hue, saturation, (brightness + amount).clamp(0., 100.))
        })
    }

    /// Decreases this color's brightness by a percentage amount.
    ///
    /// The result is clamped into [0, 100]. Alpha is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_hex_str("#3355AA").unwrap();
    /// assert_eq!(0., color.darken(100.).brightness());
    /// ```
    pub fn darken(&self, amount: f64) -> Color {
        self.lighten(-amount)
    }

    /// Rotates this color's hue by an angle in degrees.
    ///
    /// The hue wraps modulo 360, so any angle is fine, negative ones
    /// included. Alpha is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_hsb(&[100., 80., 80.]).unwrap();
    /// assert_eq!(130., color.spin(30.).hue().round());
    /// assert_eq!(350., color.spin(250.).hue().round());
    /// assert_eq!(20., color.spin(-80.).hue().round());
    /// ```
    pub fn spin(&self, angle: f64) -> Color {
        self.with_hsb(|hue, saturation, brightness| {
            ((hue + angle).rem_euclid(360.), saturation, brightness)
        })
    }

    /// Removes all saturation from this color.
    ///
    /// Equivalent to `desaturate(100.)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let grey = Color::from_hex_str("#3355AA").unwrap().greyscale();
    /// assert_eq!(0., grey.saturation());
    /// assert_eq!(grey.red, grey.green);
    /// assert_eq!(grey.green, grey.blue);
    /// ```
    pub fn greyscale(&self) -> Color {
        self.desaturate(100.)
    }

    fn with_hsb(&self, f: impl FnOnce(f64, f64, f64) -> (f64, f64, f64)) -> Color {
        let (hue, saturation, brightness) = hsb::from_rgb(self.red, self.green, self.blue);
        let (hue, saturation, brightness) = f(hue, saturation, brightness);
        let (red, green, blue) = hsb::to_rgb(hue, saturation, brightness);
        Color::new(red, green, blue, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use crate::Color;

    #[test]
    fn saturate_clamps_at_100() {
        let color = Color::from_hex_str("#3355AA").unwrap();
        let once = color.saturate(100.);
        let twice = once.saturate(100.);
        assert_eq!(100., once.saturation());
        assert_eq!(100., twice.saturation());
    }

    #[test]
    fn desaturate_clamps_at_0() {
        let color = Color::from_hex_str("#3355AA").unwrap();
        assert_eq!(0., color.desaturate(150.).saturation());
    }

    #[test]
    fn lighten_and_darken_clamp() {
        let color = Color::from_hex_str("#3355AA").unwrap();
        assert_eq!(100., color.lighten(150.).brightness());
        assert_eq!(0., color.darken(150.).brightness());
    }

    #[test]
    fn spin_full_turn_is_identity() {
        let color = Color::from_hsb(&[123., 45., 67.]).unwrap();
        assert!((color.hue() - color.spin(360.).hue()).abs() < 1e-4);
    }

    #[test]
    fn spin_negative_angle_normalizes() {
        let color = Color::from_hsb(&[10., 80., 80.]).unwrap();
        let spun = color.spin(-30.);
        assert!((spun.hue() - 340.).abs() < 1e-4);
    }

    #[test]
    fn greyscale_equals_full_desaturate() {
        let color = Color::from_hex_str("#3355AA").unwrap();
        assert_eq!(color.desaturate(100.), color.greyscale());
    }

    #[test]
    fn adjustments_preserve_alpha() {
        let color = Color::from_hex_str_with_alpha("#3355AA", 0.42).unwrap();
        assert_eq!(0.42, color.saturate(10.).alpha);
        assert_eq!(0.42, color.lighten(10.).alpha);
        assert_eq!(0.42, color.spin(45.).alpha);
        assert_eq!(0.42, color.greyscale().alpha);
    }

    #[test]
    fn darken_to_black() {
        let color = Color::from_hex_str("#3355AA").unwrap().darken(100.);
        assert_eq!(Color::new(0., 0., 0., 1.), color);
    }
}
