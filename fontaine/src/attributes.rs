// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties for specifying font weight, stretch and style.

use core::fmt;

/// Visual weight class of a font, nominally on a scale from 100.0 to 900.0.
///
/// Values outside the nominal range are representable; whether they are
/// sensible is a policy question for the caller, not this type.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);

    /// Weight value of 200.
    pub const EXTRA_LIGHT: Self = Self(200.0);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const REGULAR: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 800.
    pub const EXTRA_BOLD: Self = Self(800.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns `true` if the weight lies in the nominal 100..=900 range.
    pub fn is_nominal(self) -> bool {
        (100.0..=900.0).contains(&self.0)
    }

    /// Parses a weight from a keyword.
    ///
    /// ```
    /// use fontaine::FontWeight;
    ///
    /// assert_eq!(FontWeight::parse("semibold"), Some(FontWeight::SEMI_BOLD));
    /// assert_eq!(FontWeight::parse("chonky"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "thin" => Self::THIN,
            "extralight" => Self::EXTRA_LIGHT,
            "light" => Self::LIGHT,
            "regular" => Self::REGULAR,
            "medium" => Self::MEDIUM,
            "semibold" => Self::SEMI_BOLD,
            "bold" => Self::BOLD,
            "extrabold" => Self::EXTRA_BOLD,
            "black" => Self::BLACK,
            _ => return None,
        })
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::REGULAR
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "the keyword mapping is only used when the cast is lossless (checked)"
        )]
        let int_value = self.0 as i32;

        if self.0 == int_value as f32 {
            let keyword = match int_value {
                100 => "thin",
                200 => "extralight",
                300 => "light",
                400 => "regular",
                500 => "medium",
                600 => "semibold",
                700 => "bold",
                800 => "extrabold",
                900 => "black",
                _ => return write!(f, "{}", self.0),
            };
            f.write_str(keyword)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Visual width of a font as a ratio of normal width.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontStretch(f32);

impl FontStretch {
    /// Width that is 50% of normal.
    pub const ULTRA_CONDENSED: Self = Self(0.5);

    /// Width that is 62.5% of normal.
    pub const EXTRA_CONDENSED: Self = Self(0.625);

    /// Width that is 75% of normal.
    pub const CONDENSED: Self = Self(0.75);

    /// Width that is 87.5% of normal.
    pub const SEMI_CONDENSED: Self = Self(0.875);

    /// Width that is 100% of normal. This is the default value.
    pub const NORMAL: Self = Self(1.0);

    /// Width that is 112.5% of normal.
    pub const SEMI_EXPANDED: Self = Self(1.125);

    /// Width that is 125% of normal.
    pub const EXPANDED: Self = Self(1.25);

    /// Width that is 150% of normal.
    pub const EXTRA_EXPANDED: Self = Self(1.5);

    /// Width that is 200% of normal.
    pub const ULTRA_EXPANDED: Self = Self(2.0);

    /// Creates a new stretch value with the given ratio.
    pub fn from_ratio(ratio: f32) -> Self {
        Self(ratio)
    }

    /// Returns the stretch value as a ratio, with `1.0` being normal width.
    pub fn ratio(self) -> f32 {
        self.0
    }

    /// Returns `true` if the stretch is normal.
    pub fn is_normal(self) -> bool {
        self == Self::NORMAL
    }

    /// Parses a stretch from a keyword or a percentage.
    ///
    /// ```
    /// use fontaine::FontStretch;
    ///
    /// assert_eq!(FontStretch::parse("condensed"), Some(FontStretch::CONDENSED));
    /// assert_eq!(FontStretch::parse("125%"), Some(FontStretch::EXPANDED));
    /// assert_eq!(FontStretch::parse("wide"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Some(match s {
            "ultra-condensed" => Self::ULTRA_CONDENSED,
            "extra-condensed" => Self::EXTRA_CONDENSED,
            "condensed" => Self::CONDENSED,
            "semi-condensed" => Self::SEMI_CONDENSED,
            "normal" => Self::NORMAL,
            "semi-expanded" => Self::SEMI_EXPANDED,
            "expanded" => Self::EXPANDED,
            "extra-expanded" => Self::EXTRA_EXPANDED,
            "ultra-expanded" => Self::ULTRA_EXPANDED,
            _ => {
                let p = s.strip_suffix('%')?.parse::<f32>().ok()?;
                return Some(Self(p / 100.0));
            }
        })
    }
}

impl Default for FontStretch {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontStretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0 * 1000.0;

        #[allow(
            clippy::cast_possible_truncation,
            reason = "the keyword mapping is only used when the cast is lossless (checked)"
        )]
        let int_value = value as i32;

        if value == int_value as f32 {
            let keyword = match int_value {
                500 => "ultra-condensed",
                625 => "extra-condensed",
                750 => "condensed",
                875 => "semi-condensed",
                1000 => "normal",
                1125 => "semi-expanded",
                1250 => "expanded",
                1500 => "extra-expanded",
                2000 => "ultra-expanded",
                _ => return write!(f, "{}%", self.0 * 100.0),
            };
            f.write_str(keyword)
        } else {
            write!(f, "{}%", self.0 * 100.0)
        }
    }
}

/// Visual slope of a font.
///
/// The directive grammar has no oblique angle syntax, so oblique carries
/// none here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Cursive glyphs.
    Italic,
    /// Sheared upright glyphs.
    Oblique,
}

impl FontStyle {
    /// Parses a style from a keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "normal" => Self::Normal,
            "italic" => Self::Italic,
            "oblique" => Self::Oblique,
            _ => return None,
        })
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        })
    }
}

/// Primary attributes for variant matching: [`FontStretch`], [`FontStyle`]
/// and [`FontWeight`].
///
/// A family declares one of these per face; a [`Query`] requests one.
///
/// [`Query`]: crate::Query
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct FontVariant {
    /// Width of the variant.
    pub stretch: FontStretch,
    /// Slope of the variant.
    pub style: FontStyle,
    /// Weight of the variant.
    pub weight: FontWeight,
}

impl FontVariant {
    /// Creates a new variant from the given stretch, style and weight.
    pub fn new(stretch: FontStretch, style: FontStyle, weight: FontWeight) -> Self {
        Self {
            stretch,
            style,
            weight,
        }
    }
}

impl fmt::Display for FontVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stretch: {}, style: {}, weight: {}",
            self.stretch, self.style, self.weight
        )
    }
}
