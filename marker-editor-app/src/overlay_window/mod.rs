use log::warn;
use marker_settings::ThemeColor;
use web_sys::Element;
use yew::{
    classes, create_portal, function_component, html, use_effect_with, use_memo, AttrValue,
    Callback, Classes, Html, Properties,
};

use crate::icon::ThemedIcon;
use crate::inputs::button::Button;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Window title, shown in a row with the close button.
    pub title: AttrValue,
    /// Content to render in the window.
    #[prop_or_default]
    pub children: Html,
    /// Extra classes to apply to the window.
    #[prop_or_default]
    pub class: Classes,

    /// Callback for when the window is closed. Windows without one have no close button and can't
    /// be dismissed.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

/// Draws an overlay window on top of the rest of the app.
#[function_component]
pub fn OverlayWindow(props: &Props) -> Html {
    let host = use_memo((), |()| {
        gloo::utils::document()
            .create_element("div")
            .expect("Unable to create element")
    });
    let host = Element::clone(&*host);

    use_effect_with(host.clone(), |host| {
        let overlay_host = gloo::utils::document()
            .get_element_by_id("overlay-host")
            .expect("Missing Overlay Host");

        if let Err(e) = overlay_host.append_child(host) {
            warn!("Unable to attach overlay host element: {e:?}")
        }

        let host = host.clone();
        move || {
            if let Err(e) = overlay_host.remove_child(&host) {
                warn!("Unable to detach overlay host element: {e:?}")
            }
        }
    });

    html! {
        { create_portal(overlay_contents(props), host) }
    }
}

/// Renders the actual overlay contents.
fn overlay_contents(
    Props {
        title,
        children,
        class,
        on_close,
    }: &Props,
) -> Html {
    html! {
        <div class="overlay-backdrop">
            <div class={classes!("OverlayWindow", class.clone())}>
                <section class="window-title">
                    <h3>{title}</h3>
                    if let Some(on_close) = on_close {
                        <Button title="Close" onclick={on_close.clone()}>
                            <ThemedIcon name="cancel.svg" color={ThemeColor::Red} alt="Close" />
                        </Button>
                    }
                </section>
                <hr />
                <section class="window-content">
                    {children.clone()}
                </section>
            </div>
        </div>
    }
}
