mod dialog;
mod format;
mod palette;
mod response;
mod server_config;
mod settings;
mod theme;

pub use dialog::DialogSelection;
pub use format::{ms_to_hms, pad0, plural, Hms, Plural, ZeroPadded};
pub use palette::{icon_src, rethemed_icon_src, ThemeColor, ThemeColors};
pub use response::{classify_response, RequestError, ResponseOutcome, SERVER_SUSPENDED};
pub use server_config::ServerConfig;
pub use settings::{
    Blockable, BlockableSetting, ClientSettings, ExtendedMarkerStatsSetting,
    PreviewThumbnailsSetting, ThemeSetting,
};
pub use theme::{stylesheet_href, ThemeSource, ThemeToggle, DARK_STYLESHEET, LIGHT_STYLESHEET};
