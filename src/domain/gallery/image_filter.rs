// SPDX-License-Identifier: MPL-2.0
//! Presentation filters applied to the image shown in the viewer.

use std::fmt;

/// Visual filter applied to the viewer image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFilter {
    /// No filter (normal rendering).
    #[default]
    None,
    Grayscale,
    Sepia,
    Blur,
    HighContrast,
}

impl ImageFilter {
    /// Every filter, in control order.
    pub const ALL: [ImageFilter; 5] = [
        ImageFilter::None,
        ImageFilter::Grayscale,
        ImageFilter::Sepia,
        ImageFilter::Blur,
        ImageFilter::HighContrast,
    ];

    /// Parses a filter control name. Unrecognized names map to [`ImageFilter::None`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "grayscale" => Self::Grayscale,
            "sepia" => Self::Sepia,
            "blur" => Self::Blur,
            "high-contrast" => Self::HighContrast,
            _ => Self::None,
        }
    }

    /// Returns the control name of this filter.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
            Self::Blur => "blur",
            Self::HighContrast => "high-contrast",
        }
    }

    /// Returns `true` for anything other than [`ImageFilter::None`].
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for ImageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_control_name() {
        for filter in ImageFilter::ALL {
            assert_eq!(ImageFilter::parse(filter.name()), filter);
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(ImageFilter::parse("vintage"), ImageFilter::None);
        assert_eq!(ImageFilter::parse(""), ImageFilter::None);
        assert_eq!(ImageFilter::parse("Sepia"), ImageFilter::None);
    }

    #[test]
    fn only_none_is_inactive() {
        assert!(!ImageFilter::None.is_active());
        assert!(ImageFilter::Blur.is_active());
    }
}
