use crate::settings::ClientSettings;

/// The state of the checkboxes in the settings dialog.
///
/// Features blocked by the server have no checkbox, which is represented by `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogSelection {
    /// Whether dark mode is checked.
    pub dark: bool,
    /// Whether "Show Thumbnails" is checked.
    pub thumbnails: Option<bool>,
    /// Whether "Extended Marker Stats" is checked.
    pub extended_stats: Option<bool>,
}

impl DialogSelection {
    /// Initial checkbox state mirroring the current settings.
    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self {
            dark: settings.is_dark_theme(),
            thumbnails: (!settings.thumbnails_blocked_by_server())
                .then(|| settings.use_thumbnails()),
            extended_stats: (!settings.extended_marker_stats_blocked())
                .then(|| settings.show_extended_marker_info()),
        }
    }

    /// The theme to switch to, if the dark mode checkbox differs from the current theme.
    pub fn theme_change(&self, settings: &ClientSettings) -> Option<bool> {
        (self.dark != settings.is_dark_theme()).then_some(self.dark)
    }

    /// Whether applying this selection changes anything that requires views to be rebuilt. Theme
    /// changes alone don't.
    pub fn requires_view_reset(&self, settings: &ClientSettings) -> bool {
        self.thumbnails
            .is_some_and(|thumbnails| thumbnails != settings.use_thumbnails())
            || self
                .extended_stats
                .is_some_and(|extended| extended != settings.show_extended_marker_info())
    }

    /// Writes the feature checkboxes into the settings. The theme is handled separately through
    /// the regular theme toggle.
    pub fn apply_preferences(&self, settings: &mut ClientSettings) {
        if let Some(thumbnails) = self.thumbnails {
            settings.set_thumbnails(thumbnails);
        }
        if let Some(extended) = self.extended_stats {
            settings.set_extended_stats(extended);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server_config::ServerConfig;

    #[test]
    fn blocked_features_have_no_checkbox() {
        let mut settings = ClientSettings::default();
        settings.apply_server_config(&ServerConfig {
            use_thumbnails: true,
            extended_marker_stats: false,
        });
        let selection = DialogSelection::from_settings(&settings);
        assert_eq!(selection.thumbnails, Some(true));
        assert_eq!(selection.extended_stats, None);
    }

    #[test]
    fn unchanged_selection_is_a_no_op() {
        let settings = ClientSettings::default();
        let selection = DialogSelection::from_settings(&settings);
        assert_eq!(selection.theme_change(&settings), None);
        assert!(!selection.requires_view_reset(&settings));
    }

    #[test]
    fn disabling_thumbnails_resets_view() {
        let mut settings = ClientSettings::default();
        let selection = DialogSelection {
            thumbnails: Some(false),
            ..DialogSelection::from_settings(&settings)
        };
        assert!(selection.requires_view_reset(&settings));
        assert_eq!(selection.theme_change(&settings), None);

        selection.apply_preferences(&mut settings);
        assert!(!settings.use_thumbnails());
        assert!(settings.show_extended_marker_info());
    }

    #[test]
    fn dark_mode_alone_does_not_reset_view() {
        let settings = ClientSettings::default();
        let selection = DialogSelection {
            dark: true,
            ..DialogSelection::from_settings(&settings)
        };
        assert!(!selection.requires_view_reset(&settings));
        assert_eq!(selection.theme_change(&settings), Some(true));
    }

    #[test]
    fn extended_stats_change_resets_view() {
        let mut settings = ClientSettings::default();
        settings.set_extended_stats(false);
        let selection = DialogSelection {
            extended_stats: Some(true),
            ..DialogSelection::from_settings(&settings)
        };
        assert!(selection.requires_view_reset(&settings));
    }
}
