//! Blend-mode compositing.

use crate::Color;

/// A per-channel compositing formula.
///
/// The seven modes are the closed set of standard separable blend formulas.
/// Each operates on a base channel `a` and a blend channel `b`, both
/// normalized to [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlendMode {
    /// `a * b`. White is the identity, black annihilates.
    Multiply,

    /// `1 - (1 - a)(1 - b)`. The inverse of multiply: black is the identity.
    Screen,

    /// Multiply in the shadows, screen in the highlights, split on the base
    /// channel.
    Overlay,

    /// A gentler hard-light, per the usual soft-light formula.
    SoftLight,

    /// Overlay with the operands swapped, so the split is on the blend
    /// channel.
    HardLight,

    /// `|a - b|`.
    Difference,

    /// `a + b - 2ab`. A lower-contrast difference.
    Exclusion,
}

impl BlendMode {
    /// Combines two normalized channel values under this mode.
    ///
    /// Both inputs are expected in [0, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::BlendMode;
    /// assert_eq!(0.25, BlendMode::Multiply.apply(0.5, 0.5));
    /// assert_eq!(0.75, BlendMode::Screen.apply(0.5, 0.5));
    /// assert_eq!(0.5, BlendMode::Difference.apply(0.75, 0.25));
    /// ```
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match *self {
            BlendMode::Multiply => a * b,
            BlendMode::Screen => 1. - (1. - a) * (1. - b),
            BlendMode::Overlay => {
                if a < 0.5 {
                    2. * a * b
                } else {
                    1. - 2. * (1. - a) * (1. - b)
                }
            }
            BlendMode::SoftLight => {
                if b < 0.5 {
                    2. * a * b + a * a * (1. - 2. * b)
                } else {
                    2. * a * (1. - b) + a.sqrt() * (2. * b - 1.)
                }
            }
            BlendMode::HardLight => BlendMode::Overlay.apply(b, a),
            BlendMode::Difference => (a - b).abs(),
            BlendMode::Exclusion => a + b - 2. * a * b,
        }
    }
}

impl Color {
    /// Composites another color onto this one under a blend mode.
    ///
    /// Each rgb channel is normalized to [0, 1], combined with the mode's
    /// formula, and scaled back to [0, 255]. The result takes this (base)
    /// color's alpha; the other color's alpha is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::{BlendMode, Color};
    /// let base = Color::from_rgb(&[0., 0., 0.]).unwrap();
    /// let blend = Color::from_rgb(&[100., 150., 200.]).unwrap();
    /// // Black is the screen identity.
    /// let screened = base.blend(&blend, BlendMode::Screen);
    /// assert!((blend.red - screened.red).abs() < 1e-9);
    /// assert!((blend.green - screened.green).abs() < 1e-9);
    /// assert!((blend.blue - screened.blue).abs() < 1e-9);
    /// ```
    pub fn blend(&self, other: &Color, mode: BlendMode) -> Color {
        let channel = |a: f64, b: f64| mode.apply(a / 255., b / 255.) * 255.;
        Color::new(
            channel(self.red, other.red),
            channel(self.green, other.green),
            channel(self.blue, other.blue),
            self.alpha,
        )
    }
}
