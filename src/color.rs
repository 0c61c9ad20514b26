use crate::{Error, Result, hsb};

/// An sRGB color value with an alpha channel.
///
/// The red, green, and blue channels are nominally in [0, 255] and alpha is
/// in [0, 1], but constructors do not clamp: out-of-range channel values are
/// stored as-is, and only [Color::to_hex_string] saturates them. This keeps
/// round trips through the array forms exact.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel, [0, 255].
    pub red: f64,

    /// Green channel, [0, 255].
    pub green: f64,

    /// Blue channel, [0, 255].
    pub blue: f64,

    /// Alpha channel, [0, 1].
    pub alpha: f64,
}

impl Color {
    /// Creates a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::new(1., 2., 3., 1.);
    /// assert_eq!(1., color.red);
    /// assert_eq!(2., color.green);
    /// assert_eq!(3., color.blue);
    /// assert_eq!(1., color.alpha);
    /// ```
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Color {
        Color {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a fully opaque color from a hex string.
    ///
    /// The string must be exactly six hex digits after an optional leading
    /// `#`. Digits are case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_hex_str("#3355AA").unwrap();
    /// assert_eq!(51., color.red);
    /// assert_eq!(85., color.green);
    /// assert_eq!(170., color.blue);
    /// assert!(Color::from_hex_str("3355AAFF").is_err());
    /// ```
    pub fn from_hex_str(s: &str) -> Result<Color> {
        Color::from_hex_str_with_alpha(s, 1.)
    }

    /// Creates a color from a hex string and an alpha value.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_hex_str_with_alpha("3355aa", 0.5).unwrap();
    /// assert_eq!(0.5, color.alpha);
    /// ```
    pub fn from_hex_str_with_alpha(s: &str, alpha: f64) -> Result<Color> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidFormat(s.to_string()));
        }
        let channel = |range| {
            let digits: &str = &digits[range];
            // The digits are already checked, this can't fail.
            f64::from(u8::from_str_radix(digits, 16).unwrap_or_default())
        };
        Ok(Color::new(
            channel(0..2),
            channel(2..4),
            channel(4..6),
            alpha,
        ))
    }

    /// Creates a fully opaque color from a slice of exactly three rgb values.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_rgb(&[255., 120., 43.]).unwrap();
    /// assert_eq!(120., color.green);
    /// assert!(Color::from_rgb(&[255., 120.]).is_err());
    /// ```
    pub fn from_rgb(values: &[f64]) -> Result<Color> {
        let [red, green, blue] = channels(values)?;
        Ok(Color::new(red, green, blue, 1.))
    }

    /// Creates a color from a slice of exactly four rgba values.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_rgba(&[255., 120., 43., 0.5]).unwrap();
    /// assert_eq!(0.5, color.alpha);
    /// ```
    pub fn from_rgba(values: &[f64]) -> Result<Color> {
        let [red, green, blue, alpha] = channels(values)?;
        Ok(Color::new(red, green, blue, alpha))
    }

    /// Creates a fully opaque color from a slice of exactly three hsb values.
    ///
    /// Hue is in degrees and wraps modulo 360, saturation and brightness are
    /// percentages in [0, 100].
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_hsb(&[120., 100., 100.]).unwrap();
    /// assert_eq!(255., color.green);
    /// ```
    pub fn from_hsb(values: &[f64]) -> Result<Color> {
        let [hue, saturation, brightness] = channels(values)?;
        let (red, green, blue) = hsb::to_rgb(hue, saturation, brightness);
        Ok(Color::new(red, green, blue, 1.))
    }

    /// Creates a color from a slice of exactly four hsba values.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_hsba(&[120., 100., 100., 0.5]).unwrap();
    /// assert_eq!(0.5, color.alpha);
    /// ```
    pub fn from_hsba(values: &[f64]) -> Result<Color> {
        let [hue, saturation, brightness, alpha] = channels(values)?;
        let (red, green, blue) = hsb::to_rgb(hue, saturation, brightness);
        Ok(Color::new(red, green, blue, alpha))
    }

    /// Returns this color's hue in [0, 360).
    ///
    /// Greys (including black and white) report a hue of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_rgb(&[0., 0., 255.]).unwrap();
    /// assert_eq!(240., color.hue());
    /// ```
    pub fn hue(&self) -> f64 {
        hsb::from_rgb(self.red, self.green, self.blue).0
    }

    /// Returns this color's saturation in [0, 100].
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_rgb(&[0., 0., 255.]).unwrap();
    /// assert_eq!(100., color.saturation());
    /// ```
    pub fn saturation(&self) -> f64 {
        hsb::from_rgb(self.red, self.green, self.blue).1
    }

    /// Returns this color's brightness in [0, 100].
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_rgb(&[0., 0., 255.]).unwrap();
    /// assert_eq!(100., color.brightness());
    /// ```
    pub fn brightness(&self) -> f64 {
        hsb::from_rgb(self.red, self.green, self.blue).2
    }

    /// Returns this color as six lowercase hex digits, without a leading `#`.
    ///
    /// Channels are rounded to the nearest integer and saturated into
    /// [0, 255]. Alpha is not encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_hex_str("#3355AA").unwrap();
    /// assert_eq!("3355aa", color.to_hex_string());
    /// ```
    pub fn to_hex_string(&self) -> String {
        format!(
            "{:02x}{:02x}{:02x}",
            self.red.round() as u8,
            self.green.round() as u8,
            self.blue.round() as u8
        )
    }

    /// Returns this color as a `[red, green, blue, alpha]` array.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::new(255., 120., 43., 0.5);
    /// assert_eq!([255., 120., 43., 0.5], color.to_rgba());
    /// ```
    pub fn to_rgba(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Returns this color as a `[hue, saturation, brightness, alpha]` array.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::Color;
    /// let color = Color::from_rgb(&[0., 255., 0.]).unwrap();
    /// assert_eq!([120., 100., 100., 1.], color.to_hsba());
    /// ```
    pub fn to_hsba(&self) -> [f64; 4] {
        let (hue, saturation, brightness) = hsb::from_rgb(self.red, self.green, self.blue);
        [hue, saturation, brightness, self.alpha]
    }
}

fn channels<const N: usize>(values: &[f64]) -> Result<[f64; N]> {
    values.try_into().map_err(|_| Error::InvalidArity {
        expected: N,
        actual: values.len(),
    })
}
