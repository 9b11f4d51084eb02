// Copyright 2024 Zachary Stewart
//
//   Licensed under the Apache License, Version 2.0 (the "License");
//   you may not use this file except in compliance with the License.
//   You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
use log::info;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::server_config::ServerConfig;
use crate::theme::{ThemeSource, ThemeToggle};

/// Key of the theme object within the persisted settings record.
const THEME_KEY: &str = "theme";

/// Theme-related settings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSetting {
    /// Whether the dark theme is active.
    pub dark: bool,
    /// Whether the current theme was explicitly chosen by the user. If false, the theme follows
    /// the browser's preferred color scheme.
    pub user_set: bool,
}

impl ThemeSetting {
    /// Reads a theme from a persisted record. Each field falls back to `false` independently if
    /// it is missing or isn't a boolean.
    fn from_record(record: &Value) -> Self {
        Self {
            dark: bool_or(record, "dark", false),
            user_set: bool_or(record, "userSet", false),
        }
    }
}

/// A boolean preference which can be permanently overridden to "off" by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockableSetting {
    /// The user's stored preference.
    enabled: bool,
    /// Whether the server has disabled the corresponding feature.
    blocked: bool,
}

impl BlockableSetting {
    /// Creates an unblocked setting with the given preference.
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            blocked: false,
        }
    }

    /// Sets the user's preference. Ignored if the setting is blocked.
    pub fn enable(&mut self, enabled: bool) {
        if !self.blocked {
            self.enabled = enabled;
        }
    }

    /// Whether the feature is currently enabled, taking the server block into account.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.blocked
    }

    /// Whether the feature would be enabled if the server wasn't blocking it.
    pub fn enabled_ignoring_block(&self) -> bool {
        self.enabled
    }

    /// Whether the server is blocking this feature.
    pub fn blocked(&self) -> bool {
        self.blocked
    }

    /// Blocks this setting for the rest of the session. There is no way to unblock.
    pub fn block(&mut self) {
        self.blocked = true;
    }
}

/// Shared interface for the individual blockable features.
pub trait Blockable {
    /// Key this feature's preference is stored under in the persisted record.
    const SETTINGS_KEY: &'static str;

    /// The underlying setting.
    fn setting(&self) -> &BlockableSetting;

    /// The underlying setting, mutably.
    fn setting_mut(&mut self) -> &mut BlockableSetting;

    /// See [`BlockableSetting::enable`].
    fn enable(&mut self, enabled: bool) {
        self.setting_mut().enable(enabled);
    }

    /// See [`BlockableSetting::enabled`].
    fn enabled(&self) -> bool {
        self.setting().enabled()
    }

    /// See [`BlockableSetting::enabled_ignoring_block`].
    fn enabled_ignoring_block(&self) -> bool {
        self.setting().enabled_ignoring_block()
    }

    /// See [`BlockableSetting::blocked`].
    fn blocked(&self) -> bool {
        self.setting().blocked()
    }

    /// See [`BlockableSetting::block`].
    fn block(&mut self) {
        self.setting_mut().block();
    }
}

/// Whether thumbnails are shown when adding or editing markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewThumbnailsSetting(BlockableSetting);

impl PreviewThumbnailsSetting {
    pub const fn new(enabled: bool) -> Self {
        Self(BlockableSetting::new(enabled))
    }
}

impl Default for PreviewThumbnailsSetting {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Blockable for PreviewThumbnailsSetting {
    const SETTINGS_KEY: &'static str = "useThumbnails";

    #[inline]
    fn setting(&self) -> &BlockableSetting {
        &self.0
    }

    #[inline]
    fn setting_mut(&mut self) -> &mut BlockableSetting {
        &mut self.0
    }
}

/// Whether marker breakdowns are shown at the show and season level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedMarkerStatsSetting(BlockableSetting);

impl ExtendedMarkerStatsSetting {
    pub const fn new(enabled: bool) -> Self {
        Self(BlockableSetting::new(enabled))
    }
}

impl Default for ExtendedMarkerStatsSetting {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Blockable for ExtendedMarkerStatsSetting {
    const SETTINGS_KEY: &'static str = "extendedMarkerStats";

    #[inline]
    fn setting(&self) -> &BlockableSetting {
        &self.0
    }

    #[inline]
    fn setting_mut(&mut self) -> &mut BlockableSetting {
        &mut self.0
    }
}

/// The local settings for the marker editor. This is the unit of persistence.
///
/// The persisted record has the shape
/// `{ "theme": { "dark", "userSet" }, "useThumbnails", "extendedMarkerStats" }`. Deserialization
/// never fails on well-formed JSON: every field that is missing or has the wrong type falls back
/// to its default on its own, and a record which isn't an object is treated as empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClientSettings {
    /// Settings related to the current color theme.
    pub theme: ThemeSetting,
    /// Whether thumbnails appear when adding/editing markers.
    pub preview_thumbnails: PreviewThumbnailsSetting,
    /// Whether extended marker statistics are shown for shows and seasons.
    pub extended_marker_stats: ExtendedMarkerStatsSetting,
    /// Whether this session's server config has been applied. Not persisted.
    server_config_applied: bool,
}

impl ClientSettings {
    /// Builds settings from an already-parsed persisted record.
    pub fn from_record(record: &Value) -> Self {
        Self {
            theme: record
                .get(THEME_KEY)
                .map(ThemeSetting::from_record)
                .unwrap_or_default(),
            preview_thumbnails: PreviewThumbnailsSetting::new(bool_or(
                record,
                PreviewThumbnailsSetting::SETTINGS_KEY,
                true,
            )),
            extended_marker_stats: ExtendedMarkerStatsSetting::new(bool_or(
                record,
                ExtendedMarkerStatsSetting::SETTINGS_KEY,
                true,
            )),
            server_config_applied: false,
        }
    }

    /// Whether dark theme is currently enabled.
    pub fn is_dark_theme(&self) -> bool {
        self.theme.dark
    }

    /// Whether the current theme was set by the user rather than derived from the browser.
    pub fn is_theme_user_set(&self) -> bool {
        self.theme.user_set
    }

    /// Applies a theme change. See [`ThemeSetting::toggle`]. Only [`ThemeToggle::Changed`] needs
    /// the settings to be saved.
    pub fn toggle_theme(&mut self, dark: bool, source: ThemeSource) -> ThemeToggle {
        self.theme.toggle(dark, source)
    }

    /// Whether thumbnails should be displayed when adding/editing markers.
    pub fn use_thumbnails(&self) -> bool {
        self.preview_thumbnails.enabled()
    }

    /// Whether the server doesn't have preview thumbnails enabled.
    pub fn thumbnails_blocked_by_server(&self) -> bool {
        self.preview_thumbnails.blocked()
    }

    /// Sets whether thumbnails should be displayed. No-op if blocked by the server.
    pub fn set_thumbnails(&mut self, use_thumbnails: bool) {
        self.preview_thumbnails.enable(use_thumbnails);
    }

    /// Whether extended marker statistics should be displayed when navigating shows/seasons.
    pub fn show_extended_marker_info(&self) -> bool {
        self.extended_marker_stats.enabled()
    }

    /// Whether the server doesn't have extended marker statistics enabled.
    pub fn extended_marker_stats_blocked(&self) -> bool {
        self.extended_marker_stats.blocked()
    }

    /// Sets whether extended marker statistics are shown. No-op if blocked by the server.
    pub fn set_extended_stats(&mut self, show_stats: bool) {
        self.extended_marker_stats.enable(show_stats);
    }

    /// Blocks every feature the server has turned off. Blocks are permanent, so applying a
    /// config can only ever remove features.
    pub fn apply_server_config(&mut self, config: &ServerConfig) {
        if !config.use_thumbnails {
            info!("Preview thumbnails are disabled by the server");
            self.preview_thumbnails.block();
        }
        if !config.extended_marker_stats {
            info!("Extended marker stats are disabled by the server");
            self.extended_marker_stats.block();
        }
    }

    /// Applies the session's server config. Only the first config is applied, later ones are
    /// ignored and this returns false.
    pub fn apply_server_config_once(&mut self, config: &ServerConfig) -> bool {
        if self.server_config_applied {
            return false;
        }
        self.apply_server_config(config);
        self.server_config_applied = true;
        true
    }

    /// Whether the server config has been applied, so blocked features are known.
    pub fn server_config_applied(&self) -> bool {
        self.server_config_applied
    }
}

impl Serialize for ClientSettings {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Blocks are session state, only the user's raw preference is persisted.
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(THEME_KEY, &self.theme)?;
        map.serialize_entry(
            PreviewThumbnailsSetting::SETTINGS_KEY,
            &self.preview_thumbnails.enabled_ignoring_block(),
        )?;
        map.serialize_entry(
            ExtendedMarkerStatsSetting::SETTINGS_KEY,
            &self.extended_marker_stats.enabled_ignoring_block(),
        )?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ClientSettings {
    fn deserialize<D>(deserializer: D) -> Result<ClientSettings, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = Value::deserialize(deserializer)?;
        Ok(Self::from_record(&record))
    }
}

/// Gets the boolean at `key` in `record`, or `default` if the record isn't an object, the key is
/// missing, or the value isn't a boolean.
pub(crate) fn bool_or(record: &Value, key: &str, default: bool) -> bool {
    record.get(key).and_then(Value::as_bool).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use serde_test::{assert_ser_tokens, Token};

    use super::*;

    /// Parses a raw stored string the same way the app does when loading from local storage.
    fn load(raw: &str) -> ClientSettings {
        serde_json::from_str(raw).unwrap_or_default()
    }

    fn assert_defaults(settings: &ClientSettings) {
        assert!(!settings.is_dark_theme());
        assert!(!settings.is_theme_user_set());
        assert!(settings.use_thumbnails());
        assert!(settings.show_extended_marker_info());
    }

    #[test]
    fn malformed_or_missing_records_use_defaults() {
        for raw in [
            "", "{", "not json", "null", "5", "\"text\"", "[]", "[true]", "{}", "{\"theme\":null}",
        ] {
            assert_defaults(&load(raw));
        }
    }

    #[test]
    fn wrong_field_types_default_individually() {
        let settings = load(
            r#"{"theme":{"dark":"yes","userSet":true},"useThumbnails":1,"extendedMarkerStats":false}"#,
        );
        assert!(!settings.is_dark_theme());
        assert!(settings.is_theme_user_set());
        assert!(settings.use_thumbnails());
        assert!(!settings.show_extended_marker_info());
    }

    #[test]
    fn partial_record() {
        let settings = load(r#"{"theme":{"dark":true,"userSet":true},"useThumbnails":false}"#);
        assert!(settings.is_dark_theme());
        assert!(settings.is_theme_user_set());
        assert!(!settings.use_thumbnails());
        assert!(settings.show_extended_marker_info());
    }

    #[test]
    fn blocked_setting_ignores_enable() {
        let mut setting = BlockableSetting::new(true);
        setting.block();
        setting.enable(false);
        assert!(!setting.enabled());
        assert!(setting.enabled_ignoring_block());
        setting.enable(true);
        assert!(!setting.enabled());

        let mut setting = BlockableSetting::new(false);
        setting.block();
        setting.enable(true);
        assert!(!setting.enabled());
        assert!(!setting.enabled_ignoring_block());
    }

    #[test]
    fn block_is_idempotent() {
        let mut setting = PreviewThumbnailsSetting::default();
        assert!(!setting.blocked());
        setting.block();
        setting.block();
        assert!(setting.blocked());
        assert!(!setting.enabled());
    }

    #[test]
    fn unblocked_setting_follows_enable() {
        let mut setting = ExtendedMarkerStatsSetting::default();
        assert!(setting.enabled());
        setting.enable(false);
        assert!(!setting.enabled());
        assert!(!setting.enabled_ignoring_block());
    }

    #[test]
    fn server_config_blocks_disabled_features() {
        let mut settings = ClientSettings::default();
        settings.apply_server_config(&ServerConfig {
            use_thumbnails: false,
            extended_marker_stats: true,
        });
        assert!(settings.thumbnails_blocked_by_server());
        assert!(!settings.use_thumbnails());
        assert!(!settings.extended_marker_stats_blocked());
        assert!(settings.show_extended_marker_info());

        settings.set_thumbnails(true);
        assert!(!settings.use_thumbnails());

        // A later config can't unblock.
        settings.apply_server_config(&ServerConfig {
            use_thumbnails: true,
            extended_marker_stats: true,
        });
        assert!(settings.thumbnails_blocked_by_server());
    }

    #[test]
    fn server_config_applies_once() {
        let mut settings = ClientSettings::default();
        assert!(!settings.server_config_applied());
        assert!(settings.apply_server_config_once(&ServerConfig {
            use_thumbnails: true,
            extended_marker_stats: true,
        }));
        assert!(settings.server_config_applied());

        assert!(!settings.apply_server_config_once(&ServerConfig::default()));
        assert!(!settings.thumbnails_blocked_by_server());
        assert!(!settings.extended_marker_stats_blocked());

        // A fresh load starts a new session.
        let reloaded = load(&serde_json::to_string(&settings).unwrap());
        assert!(!reloaded.server_config_applied());
    }

    #[test]
    fn only_user_theme_changes_are_saved() {
        let mut settings = ClientSettings::default();
        let toggle = settings.toggle_theme(true, ThemeSource::System);
        assert!(toggle.changed());
        assert!(!toggle.needs_save());
        assert!(settings.is_dark_theme());
        assert!(!settings.is_theme_user_set());

        let toggle = settings.toggle_theme(false, ThemeSource::User);
        assert!(toggle.needs_save());
        assert!(!settings.is_dark_theme());
        assert!(settings.is_theme_user_set());

        // Once the user has picked, the system can't change or save anything.
        let toggle = settings.toggle_theme(true, ThemeSource::System);
        assert_eq!(toggle, ThemeToggle::Unchanged);
        assert!(!settings.is_dark_theme());
    }

    #[test]
    fn save_keeps_preference_of_blocked_settings() {
        let mut settings = ClientSettings::default();
        settings.set_extended_stats(false);
        settings.apply_server_config(&ServerConfig::default());
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({
                "theme": { "dark": false, "userSet": false },
                "useThumbnails": true,
                "extendedMarkerStats": false,
            })
        );
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut settings = ClientSettings::default();
        assert_eq!(
            settings.toggle_theme(true, ThemeSource::User),
            ThemeToggle::Changed
        );
        settings.set_thumbnails(false);
        let raw = serde_json::to_string(&settings).unwrap();
        assert_eq!(load(&raw), settings);

        // Blocks aren't persisted.
        settings.apply_server_config(&ServerConfig::default());
        let reloaded = load(&serde_json::to_string(&settings).unwrap());
        assert!(!reloaded.thumbnails_blocked_by_server());
        assert!(!reloaded.extended_marker_stats_blocked());
        assert!(reloaded.is_dark_theme());
        assert!(!reloaded.use_thumbnails());
        assert!(reloaded.show_extended_marker_info());
    }

    #[test]
    fn theme_serializes_with_camel_case_keys() {
        assert_ser_tokens(
            &ThemeSetting {
                dark: true,
                user_set: false,
            },
            &[
                Token::Struct {
                    name: "ThemeSetting",
                    len: 2,
                },
                Token::Str("dark"),
                Token::Bool(true),
                Token::Str("userSet"),
                Token::Bool(false),
                Token::StructEnd,
            ],
        );
    }
}
