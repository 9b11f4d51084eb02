//! Browser side of the theme: the theme stylesheet, theme-sensitive icons, and the system color
//! scheme query.

use gloo::events::EventListener;
use log::{info, warn};
use marker_settings::{rethemed_icon_src, stylesheet_href, ThemeColors};
use wasm_bindgen::JsCast as _;
use web_sys::{Element, MediaQueryList, MediaQueryListEvent};
use yew::Callback;

use crate::dom::{self, DomError, NodeBuilder, NodeContent};

/// Media query matching a dark system color scheme.
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// The `<link>` element that holds the active theme stylesheet.
pub(super) struct ThemeStylesheet {
    /// The link element, if it could be created.
    link: Option<Element>,
}

impl ThemeStylesheet {
    /// Adds the stylesheet for the given theme to the document head.
    pub fn install(dark: bool) -> Self {
        match Self::create_link(dark) {
            Ok(link) => Self { link: Some(link) },
            Err(e) => {
                warn!("Unable to add the theme stylesheet: {e}");
                Self { link: None }
            }
        }
    }

    fn create_link(dark: bool) -> Result<Element, DomError> {
        let href = stylesheet_href(dark);
        let link = NodeBuilder::new("link")
            .attr("rel", "stylesheet")
            .attr("type", "text/css")
            .attr("href", href)
            .on("error", |_| {
                warn!("Theme stylesheet failed to load");
                if let Err(e) = show_stylesheet_error() {
                    warn!("Unable to show the stylesheet error: {e}");
                }
            })
            .build()?;
        dom::append_children(&dom::head()?, [Some(link.clone())])?;
        Ok(link)
    }

    /// Points the stylesheet at the given theme.
    pub fn apply(&self, dark: bool) {
        if let Some(link) = &self.link {
            if let Err(e) = link.set_attribute("href", stylesheet_href(dark)) {
                warn!("Unable to switch the theme stylesheet: {e:?}");
            }
        }
    }
}

/// Adds a dismissible banner to the body saying the theme stylesheet couldn't be loaded. This
/// lives outside of Yew since it can fire before the app renders.
fn show_stylesheet_error() -> Result<(), DomError> {
    let cross = NodeBuilder::new_ns(SVG_NS, "path")
        .attr("d", "M4 4L12 12M12 4L4 12")
        .attr("stroke", "currentColor")
        .attr("stroke-width", "2")
        .build()?;
    let icon = NodeBuilder::new_ns(SVG_NS, "svg")
        .attr("viewBox", "0 0 16 16")
        .attr("width", "16")
        .attr("height", "16")
        .content(NodeContent::Element(cross))
        .build()?;
    let dismiss = NodeBuilder::new("button")
        .attr("title", "Dismiss")
        .content(NodeContent::Element(icon))
        .on("click", |event| {
            let banner = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|button| button.parent_element());
            if let Some(banner) = banner {
                banner.remove();
            }
        })
        .build()?;
    let message = NodeBuilder::new("span")
        .content(NodeContent::Html(
            "Unable to load the theme stylesheet. Reload the page to try again.",
        ))
        .build()?;
    let banner = dom::build_node("div", &[("class", "stylesheet-error")])?;
    dom::append_children(&banner, [Some(message), Some(dismiss)])?;
    dom::append_children(&dom::body()?, [Some(banner)])?;
    Ok(())
}

/// Rewrites the color token of every themed icon in the document to match the theme.
pub(super) fn adjust_icons(dark: bool) {
    let colors = ThemeColors::new(dark);
    let icons = match dom::select(r#"img[src^="/i/"]"#, None) {
        Ok(selection) => selection.into_elements(),
        Err(e) => {
            warn!("Unable to find themed icons: {e}");
            return;
        }
    };
    for icon in icons {
        let Some(src) = icon.get_attribute("src") else {
            continue;
        };
        let color = colors.get(icon.get_attribute("theme").as_deref());
        if let Err(e) = icon.set_attribute("src", &rethemed_icon_src(&src, color)) {
            warn!("Unable to update icon {src}: {e:?}");
        }
    }
}

/// Gets the system color scheme query, or `None` if the browser can't answer it.
pub(super) fn system_theme_query() -> Option<MediaQueryList> {
    let window = web_sys::window()?;
    match window.match_media(DARK_SCHEME_QUERY) {
        // Browsers that don't understand the query report its media as "not all".
        Ok(Some(query)) if query.media() != "not all" => Some(query),
        Ok(_) => {
            info!("System color scheme is unavailable, defaulting to the light theme");
            None
        }
        Err(e) => {
            warn!("Unable to query the system color scheme: {e:?}");
            None
        }
    }
}

/// Calls `on_change` with whether the system is dark whenever the system color scheme changes.
/// The listener is removed when the returned [`EventListener`] is dropped.
pub(super) fn listen_for_system_theme(
    query: &MediaQueryList,
    on_change: Callback<bool>,
) -> EventListener {
    let fallback = query.clone();
    EventListener::new(query, "change", move |event| {
        let dark = match event.dyn_ref::<MediaQueryListEvent>() {
            Some(event) => event.matches(),
            None => fallback.matches(),
        };
        on_change.emit(dark);
    })
}
