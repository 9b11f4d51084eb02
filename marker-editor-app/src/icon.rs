use marker_settings::{icon_src, ThemeColor, ThemeColors};
use yew::{function_component, html, AttrValue, Html, Properties};

use crate::client_settings::use_dark_theme;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// File name of the icon, e.g. `settings.svg`.
    pub name: AttrValue,
    /// Color of the icon.
    #[prop_or_default]
    pub color: ThemeColor,
    /// Alt text for the icon.
    #[prop_or_default]
    pub alt: AttrValue,
}

/// Displays one of the server's themed SVG icons.
///
/// The icon carries its color in a `theme` attribute so that icon adjustment after a theme change
/// can recolor it.
#[function_component]
pub fn ThemedIcon(Props { name, color, alt }: &Props) -> Html {
    let dark = use_dark_theme();
    let src = icon_src(ThemeColors::new(dark).get(Some(color.attr())), name);
    html! {
        <img class="themed-icon" {src} alt={alt.clone()} theme={color.attr()} />
    }
}
