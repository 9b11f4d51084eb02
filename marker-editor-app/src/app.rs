use marker_settings::{plural, ThemeSource};
use yew::{function_component, html, use_callback, use_state_eq, Callback, Html};

use crate::client_settings::{
    use_client_settings, use_client_settings_dispatcher, use_server_config_applied,
    use_settings_dialog, ClientSettingsManager, SettingsDialogManager,
};
use crate::icon::ThemedIcon;
use crate::inputs::button::Button;
use crate::inputs::toggle::LabeledCheckbox;
use crate::modal::ModalManager;
use crate::server_paused::ServerPausedManager;

#[function_component]
pub fn App() -> Html {
    html! {
        <ServerPausedManager>
            <ModalManager>
                <ClientSettingsManager>
                    <SettingsDialogManager>
                        <AppShell />
                    </SettingsDialogManager>
                </ClientSettingsManager>
            </ModalManager>
        </ServerPausedManager>
    }
}

/// Page header and body. The body is rebuilt whenever applied settings require a view reset.
#[function_component]
fn AppShell() -> Html {
    let settings = use_client_settings();
    let settings_dispatcher = use_client_settings_dispatcher();
    let config_applied = use_server_config_applied();
    let dialog = use_settings_dialog();
    // Incremented to rebuild every view under the body.
    let generation = use_state_eq(|| 0u32);

    let toggle_theme = use_callback(settings_dispatcher, |dark: bool, settings_dispatcher| {
        settings_dispatcher.toggle_theme(dark, ThemeSource::User);
    });

    let on_apply = use_callback(generation.clone(), |should_reset: bool, generation| {
        if should_reset {
            generation.set(**generation + 1);
        }
    });
    let show_settings: Callback<()> = use_callback((dialog, on_apply), |(), (dialog, on_apply)| {
        dialog.show_settings(on_apply.clone());
    });

    html! {
        <>
            <header key="header" class="app-header">
                <h1>{"Marker Editor"}</h1>
                <div class="header-controls">
                    <LabeledCheckbox
                        id="darkModeCheckbox"
                        label="Dark Mode"
                        checked={settings.is_dark_theme()}
                        onchange={toggle_theme} />
                    if config_applied {
                        <Button id="settings" title="Settings" onclick={show_settings}>
                            <ThemedIcon name="settings.svg" alt="Settings" />
                        </Button>
                    }
                </div>
            </header>
            <main key={*generation} class="app-body">
                <MarkerViewPlaceholder />
            </main>
        </>
    }
}

/// Stands in for the marker views, showing which settings they would render with.
#[function_component]
fn MarkerViewPlaceholder() -> Html {
    let settings = use_client_settings();
    let enabled = [
        settings.use_thumbnails(),
        settings.show_extended_marker_info(),
    ]
    .into_iter()
    .filter(|&enabled| enabled)
    .count();

    html! {
        <section class="marker-views">
            <p>{format!("Viewing with {} enabled.", plural(enabled, "optional feature"))}</p>
            if settings.use_thumbnails() {
                <p>{"Thumbnails are shown when adding or editing markers."}</p>
            }
            if settings.show_extended_marker_info() {
                <p>{"Extended marker stats are shown when browsing libraries."}</p>
            }
        </section>
    }
}
