//! Color tokens for themed icons.
//!
//! Icons are served from `/i/<colorToken>/<name>`, so switching themes means rewriting the token
//! in every icon URL.

/// Named icon colors. Icons declare one of these in their `theme` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    /// Regular foreground color.
    #[default]
    Standard,
    Green,
    Red,
    Orange,
}

impl ThemeColor {
    /// Parses the value of an icon's `theme` attribute. Unknown or missing attributes are
    /// [`ThemeColor::Standard`].
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr {
            Some("green") => Self::Green,
            Some("red") => Self::Red,
            Some("orange") => Self::Orange,
            _ => Self::Standard,
        }
    }

    /// The value to put in an icon's `theme` attribute.
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Green => "green",
            Self::Red => "red",
            Self::Orange => "orange",
        }
    }

    /// Hex color token used in icon URLs.
    pub const fn token(self, dark: bool) -> &'static str {
        match (self, dark) {
            (Self::Standard, true) => "c1c1c1",
            (Self::Standard, false) => "212121",
            (Self::Green, true) => "4c9a4c",
            (Self::Green, false) => "2e7d32",
            (Self::Red, true) => "c14242",
            (Self::Red, false) => "a31515",
            (Self::Orange, true) => "c18c42",
            (Self::Orange, false) => "b0600d",
        }
    }
}

/// Looks up icon colors for the active theme.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    dark: bool,
}

impl ThemeColors {
    pub const fn new(dark: bool) -> Self {
        Self { dark }
    }

    /// Switch between the light and dark palettes.
    pub fn set_dark_theme(&mut self, dark: bool) {
        self.dark = dark;
    }

    /// Gets the color token for an icon with the given `theme` attribute.
    pub fn get(&self, attr: Option<&str>) -> &'static str {
        ThemeColor::from_attr(attr).token(self.dark)
    }
}

/// Builds the URL of an icon.
pub fn icon_src(color: &str, name: &str) -> String {
    format!("/i/{color}/{name}")
}

/// Replaces the color token of an existing icon URL, keeping only its final path segment.
pub fn rethemed_icon_src(src: &str, color: &str) -> String {
    let name = src.rsplit('/').next().unwrap_or(src);
    icon_src(color, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_attrs_are_standard() {
        assert_eq!(ThemeColor::from_attr(None), ThemeColor::Standard);
        assert_eq!(ThemeColor::from_attr(Some("purple")), ThemeColor::Standard);
        for color in [
            ThemeColor::Standard,
            ThemeColor::Green,
            ThemeColor::Red,
            ThemeColor::Orange,
        ] {
            assert_eq!(ThemeColor::from_attr(Some(color.attr())), color);
        }
    }

    #[test]
    fn palette_follows_theme() {
        let mut colors = ThemeColors::new(true);
        assert_eq!(colors.get(Some("standard")), "c1c1c1");
        colors.set_dark_theme(false);
        assert_eq!(colors.get(Some("standard")), "212121");
        assert_eq!(colors.get(None), "212121");
    }

    #[test]
    fn rethemed_urls() {
        assert_eq!(
            rethemed_icon_src("/i/c1c1c1/settings.svg", "212121"),
            "/i/212121/settings.svg"
        );
        assert_eq!(
            rethemed_icon_src("http://localhost:3232/i/212121/delete.svg", "a31515"),
            "/i/a31515/delete.svg"
        );
        assert_eq!(rethemed_icon_src("edit.svg", "212121"), "/i/212121/edit.svg");
    }
}
