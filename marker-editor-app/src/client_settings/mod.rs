//! Client settings: the theme, the optional features, and the dialog for changing them.

pub use dialog::{use_settings_dialog, SettingsDialogManager};
pub use manager::{
    use_client_settings, use_client_settings_dispatcher, use_dark_theme,
    use_server_config_applied, ClientSettingsManager,
};

mod dialog;
mod manager;
mod theme;
