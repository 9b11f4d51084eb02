// Copyright 2024 Zachary Stewart
//
//   Licensed under the Apache License, Version 2.0 (the "License");
//   you may not use this file except in compliance with the License.
//   You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
use crate::settings::ThemeSetting;

/// Stylesheet used for the dark theme.
pub const DARK_STYLESHEET: &str = "Client/Style/themeDark.css";
/// Stylesheet used for the light theme.
pub const LIGHT_STYLESHEET: &str = "Client/Style/themeLight.css";

/// Gets the stylesheet to use for the given theme.
#[inline]
pub const fn stylesheet_href(dark: bool) -> &'static str {
    if dark {
        DARK_STYLESHEET
    } else {
        LIGHT_STYLESHEET
    }
}

/// Where a theme change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// The user explicitly picked a theme, either with the theme toggle or the settings dialog.
    User,
    /// The browser's preferred color scheme changed.
    System,
}

/// Result of attempting to change the theme.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeToggle {
    /// The theme was already in the requested state, or a system change was ignored because the
    /// user picked the theme themselves.
    Unchanged,
    /// The user changed the theme. Stylesheets and icons need to be updated, and the settings
    /// saved.
    Changed,
    /// A system-derived theme followed the browser's color scheme. Stylesheets and icons need to
    /// be updated, but nothing is saved, so the stored theme stays system-derived.
    FollowedSystem,
}

impl ThemeToggle {
    /// Whether the theme actually changed.
    #[inline]
    pub fn changed(self) -> bool {
        self != Self::Unchanged
    }

    /// Whether the settings need to be saved after this toggle.
    #[inline]
    pub fn needs_save(self) -> bool {
        self == Self::Changed
    }
}

impl ThemeSetting {
    /// Makes a system-derived theme match the browser's current color scheme. `system_dark` is
    /// `None` when the color scheme can't be queried, in which case the theme falls back to light.
    /// User-set themes are left alone.
    pub fn seed_from_system(&mut self, system_dark: Option<bool>) {
        if !self.user_set {
            self.dark = system_dark.unwrap_or(false);
        }
    }

    /// Switches between light and dark.
    ///
    /// A user change always wins and marks the theme as user-set. A system change only applies
    /// while the theme is still system-derived.
    pub fn toggle(&mut self, dark: bool, source: ThemeSource) -> ThemeToggle {
        if dark == self.dark {
            return ThemeToggle::Unchanged;
        }
        match source {
            ThemeSource::User => {
                self.user_set = true;
                self.dark = dark;
                ThemeToggle::Changed
            }
            ThemeSource::System if self.user_set => ThemeToggle::Unchanged,
            ThemeSource::System => {
                self.dark = dark;
                ThemeToggle::FollowedSystem
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_THEMES: [ThemeSetting; 4] = [
        ThemeSetting {
            dark: false,
            user_set: false,
        },
        ThemeSetting {
            dark: true,
            user_set: false,
        },
        ThemeSetting {
            dark: false,
            user_set: true,
        },
        ThemeSetting {
            dark: true,
            user_set: true,
        },
    ];

    #[test]
    fn system_change_ignored_when_user_set() {
        for start in ALL_THEMES.into_iter().filter(|t| t.user_set) {
            for dark in [false, true] {
                let mut theme = start;
                assert_eq!(
                    theme.toggle(dark, ThemeSource::System),
                    ThemeToggle::Unchanged
                );
                assert_eq!(theme, start);
            }
        }
    }

    #[test]
    fn system_change_tracked_when_system_derived() {
        let mut theme = ThemeSetting::default();
        let toggle = theme.toggle(true, ThemeSource::System);
        assert_eq!(toggle, ThemeToggle::FollowedSystem);
        assert!(toggle.changed());
        assert!(!toggle.needs_save());
        assert_eq!(
            theme,
            ThemeSetting {
                dark: true,
                user_set: false,
            }
        );
        assert!(theme.toggle(false, ThemeSource::System).changed());
        assert!(!theme.dark);
        assert!(!theme.user_set);
    }

    #[test]
    fn user_change_always_applies() {
        for start in ALL_THEMES {
            let mut theme = start;
            let toggle = theme.toggle(!start.dark, ThemeSource::User);
            assert_eq!(toggle, ThemeToggle::Changed);
            assert!(toggle.needs_save());
            assert_eq!(theme.dark, !start.dark);
            assert!(theme.user_set);
        }
    }

    #[test]
    fn same_value_is_unchanged_for_any_source() {
        for start in ALL_THEMES {
            for source in [ThemeSource::User, ThemeSource::System] {
                let mut theme = start;
                let toggle = theme.toggle(start.dark, source);
                assert_eq!(toggle, ThemeToggle::Unchanged);
                assert!(!toggle.needs_save());
                assert_eq!(theme, start);
            }
        }
    }

    #[test]
    fn seed_from_system() {
        let mut theme = ThemeSetting::default();
        theme.seed_from_system(Some(true));
        assert!(theme.dark);
        theme.seed_from_system(None);
        assert!(!theme.dark);

        let mut theme = ThemeSetting {
            dark: false,
            user_set: true,
        };
        theme.seed_from_system(Some(true));
        assert!(!theme.dark);
    }

    #[test]
    fn stylesheets() {
        assert_eq!(stylesheet_href(true), "Client/Style/themeDark.css");
        assert_eq!(stylesheet_href(false), "Client/Style/themeLight.css");
    }
}
