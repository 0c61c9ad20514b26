//! Convert, adjust, and blend sRGB colors.
//!
//! Colors are small immutable values with red, green, and blue channels in
//! [0, 255] and an alpha channel in [0, 1]. Every operation returns a new
//! [Color]; nothing is ever mutated in place.
//!
//! # Construction
//!
//! Build a color from a hex string, with or without a leading `#`:
//!
//! ```
//! use colorkit::Color;
//! let color = Color::from_hex_str("#3355AA").unwrap();
//! assert_eq!(51., color.red);
//! assert_eq!(85., color.green);
//! assert_eq!(170., color.blue);
//! assert_eq!(1., color.alpha);
//! ```
//!
//! Or from RGB(A) or HSB(A) channel slices:
//!
//! ```
//! use colorkit::Color;
//! let opaque = Color::from_rgb(&[255., 120., 43.]).unwrap();
//! let translucent = Color::from_rgba(&[255., 120., 43., 0.5]).unwrap();
//! let vivid = Color::from_hsb(&[120., 100., 100.]).unwrap();
//! ```
//!
//! # Tonal adjustments
//!
//! Adjustments work in HSB space and leave alpha untouched:
//!
//! ```
//! use colorkit::Color;
//! let color = Color::from_hex_str("3355AA").unwrap();
//! let lighter = color.lighten(20.);
//! let warmer = color.spin(-30.);
//! let grey = color.greyscale();
//! assert_eq!(0., grey.saturation());
//! ```
//!
//! # Blending
//!
//! Two colors combine channel-by-channel under a [BlendMode]:
//!
//! ```
//! use colorkit::{BlendMode, Color};
//! let base = Color::from_rgb(&[255., 255., 255.]).unwrap();
//! let blend = Color::from_rgb(&[100., 150., 200.]).unwrap();
//! // White is the multiply identity.
//! let multiplied = base.blend(&blend, BlendMode::Multiply);
//! assert!((blend.red - multiplied.red).abs() < 1e-9);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]

mod adjust;
mod blend;
mod color;
mod error;
mod hsb;

pub use blend::BlendMode;
pub use color::Color;
pub use error::Error;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
