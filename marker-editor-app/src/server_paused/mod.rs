use yew::{function_component, html, use_callback, use_state_eq, ContextProvider, Html, Properties};

use crate::overlay_window::OverlayWindow;
use crate::requests::Requester;

#[derive(PartialEq, Properties)]
pub struct Props {
    /// Children, which get access to the [`Requester`].
    pub children: Html,
}

/// Provides the [`Requester`] used for server requests, and shows the "server paused" overlay once
/// any request finds the server suspended. The overlay can't be dismissed; the page has to be
/// reloaded after the server resumes.
#[function_component]
pub fn ServerPausedManager(Props { children }: &Props) -> Html {
    let paused = use_state_eq(|| false);
    let on_suspended = use_callback(paused.setter(), |(), setter| {
        setter.set(true);
    });
    let requester = Requester::new(on_suspended);

    html! {
        <ContextProvider<Requester> context={requester}>
            {children.clone()}
            if *paused {
                <ServerPausedOverlay />
            }
        </ContextProvider<Requester>>
    }
}

/// Non-dismissible overlay shown while the server is suspended.
#[function_component]
fn ServerPausedOverlay() -> Html {
    html! {
        <OverlayWindow title="Server Paused" class="ServerPaused">
            <p>{"The server is currently paused, so changes can't be made right now."}</p>
            <p>{"Resume the server, then reload this page to continue editing markers."}</p>
        </OverlayWindow>
    }
}
