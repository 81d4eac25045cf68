// Copyright 2026 the Charta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The text style a font directive configures.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use fontaine::{FontStretch, FontStyle, FontVariant, FontWeight, QueryFamily};

use crate::value::Length;

/// Named or class font family.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Family {
    /// A named font family.
    Named(String),
    /// A font class standing for its member families.
    Class(String),
}

impl Family {
    /// Creates a named font family.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a font class reference.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }
}

impl<'a> From<&'a Family> for QueryFamily<'a> {
    fn from(value: &'a Family) -> Self {
        match value {
            Family::Named(name) => QueryFamily::Named(name),
            Family::Class(name) => QueryFamily::Class(name),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name:?}"),
            Self::Class(name) => f.write_str(name),
        }
    }
}

/// The text style the font directive reads and updates.
#[derive(Clone, PartialEq, Debug)]
pub struct TextStyle {
    /// Prioritized sequence of font families.
    pub families: Vec<Family>,
    /// Font size.
    pub size: Length,
    /// Requested stretch.
    pub stretch: FontStretch,
    /// Requested style.
    pub style: FontStyle,
    /// Requested weight.
    pub weight: FontWeight,
}

impl TextStyle {
    /// Returns the variant the style requests.
    pub fn variant(&self) -> FontVariant {
        FontVariant::new(self.stretch, self.style, self.weight)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            families: alloc::vec![Family::class("sans-serif")],
            size: Length::pt(11.0),
            stretch: FontStretch::default(),
            style: FontStyle::default(),
            weight: FontWeight::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Family, TextStyle};

    #[test]
    fn style_default_stack_is_sans_serif() {
        let style = TextStyle::default();
        assert_eq!(style.families, [Family::class("sans-serif")]);
        assert_eq!(style.size.to_pt(), 11.0);
    }

    #[test]
    fn family_display() {
        assert_eq!(Family::named("PT Sans").to_string(), "\"PT Sans\"");
        assert_eq!(Family::class("serif").to_string(), "serif");
    }
}
