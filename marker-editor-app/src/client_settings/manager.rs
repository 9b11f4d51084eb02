//! Client settings manager owns the client settings, keeps the page theme in sync with them, and
//! applies the server's configuration.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage as _};
use log::{info, warn};
use marker_settings::{ClientSettings, DialogSelection, RequestError, ServerConfig, ThemeSource};
use serde_json::Value;
use web_sys::MediaQueryList;
use yew::{hook, html, use_context, Callback, Component, Context, ContextProvider, Html, Properties};

use crate::client_settings::theme::{
    adjust_icons, listen_for_system_theme, system_theme_query, ThemeStylesheet,
};
use crate::link::SharedLink;
use crate::modal::ModalDispatcher;
use crate::requests::Requester;

/// Local storage key used to save client settings.
const CLIENT_SETTINGS_KEY: &str = "plexIntro_settings";

/// Endpoint that returns the server's configuration.
const CONFIG_ENDPOINT: &str = "get_config";

/// Load the client settings, falling back to defaults if they are missing or unreadable.
fn load_client_settings() -> ClientSettings {
    match LocalStorage::get(CLIENT_SETTINGS_KEY) {
        Ok(settings) => settings,
        Err(StorageError::KeyNotFound(_)) => ClientSettings::default(),
        Err(e) => {
            warn!("Failed to load client settings, using defaults: {}", e);
            ClientSettings::default()
        }
    }
}

/// Save the given client settings.
fn save_client_settings(settings: &ClientSettings) {
    if let Err(e) = LocalStorage::set(CLIENT_SETTINGS_KEY, settings) {
        warn!("Unable to save client settings: {}", e);
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    /// Children to render within the context of the ClientSettingsManager.
    pub children: Html,
}

pub enum Msg {
    /// Switch between light and dark theme.
    ToggleTheme {
        /// Whether the dark theme should be active.
        dark: bool,
        /// Whether the user or the system asked for the change.
        source: ThemeSource,
    },
    /// Apply the feature checkboxes from the settings dialog and save.
    ApplyPreferences {
        /// State of the dialog when "Apply" was clicked.
        selection: DialogSelection,
    },
    /// The server config request succeeded.
    ServerConfigLoaded {
        /// Response body of the config request.
        config: Value,
    },
    /// The server config request failed.
    ServerConfigFailed {
        /// Why the request failed.
        error: RequestError,
    },
}

pub struct ClientSettingsManager {
    /// Current client settings.
    settings: Rc<ClientSettings>,
    /// Stylesheet link for the active theme.
    stylesheet: ThemeStylesheet,
    /// Listener for system color scheme changes. `None` if the browser can't report them.
    _system_theme_listener: Option<EventListener>,
    /// Used to report a failure to load the server config.
    modal_dispatcher: Option<ModalDispatcher>,

    /// Settings dispatcher for this instance.
    dispatcher: ClientSettingsDispatcher,
}

impl ClientSettingsManager {
    /// Message handler for ToggleTheme. Returns true if the theme changed.
    fn toggle_theme(&mut self, dark: bool, source: ThemeSource) -> bool {
        let mut theme = self.settings.theme;
        let toggle = theme.toggle(dark, source);
        if !toggle.changed() {
            return false;
        }
        Rc::make_mut(&mut self.settings).theme = theme;
        if toggle.needs_save() {
            save_client_settings(&self.settings);
        }
        self.stylesheet.apply(dark);
        adjust_icons(dark);
        true
    }

    /// Message handler for ApplyPreferences.
    fn apply_preferences(&mut self, selection: DialogSelection) -> bool {
        selection.apply_preferences(Rc::make_mut(&mut self.settings));
        save_client_settings(&self.settings);
        true
    }

    /// Message handler for ServerConfigLoaded.
    fn server_config_loaded(&mut self, config: Value) -> bool {
        if self.settings.server_config_applied() {
            warn!("Server config was already applied, ignoring: {config}");
            return false;
        }
        let config = ServerConfig::from_record(&config);
        info!("Applying server config: {config:?}");
        Rc::make_mut(&mut self.settings).apply_server_config_once(&config)
    }

    /// Message handler for ServerConfigFailed.
    fn server_config_failed(&self, error: RequestError) -> bool {
        warn!("Unable to load server config: {error}");
        match &self.modal_dispatcher {
            Some(modal_dispatcher) => modal_dispatcher
                .builder()
                .title("Unable to get server config")
                .content(html! { <p>{error.error_message()}</p> })
                .class("config-error")
                .build()
                .persist(),
            None => warn!("No modal dispatcher available to report the config failure"),
        }
        false
    }
}

impl Component for ClientSettingsManager {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link();

        let mut settings = load_client_settings();
        let query = system_theme_query();
        settings
            .theme
            .seed_from_system(query.as_ref().map(MediaQueryList::matches));

        let dark = settings.is_dark_theme();
        let stylesheet = ThemeStylesheet::install(dark);

        let system_theme_listener = query.as_ref().map(|query| {
            listen_for_system_theme(
                query,
                link.callback(|dark| Msg::ToggleTheme {
                    dark,
                    source: ThemeSource::System,
                }),
            )
        });

        let modal_dispatcher = link
            .context::<ModalDispatcher>(Callback::noop())
            .map(|(modal_dispatcher, _)| modal_dispatcher);

        match link.context::<Requester>(Callback::noop()) {
            Some((requester, _)) => requester.json_request(
                CONFIG_ENDPOINT,
                &[],
                link.callback(|config| Msg::ServerConfigLoaded { config }),
                Some(link.callback(|error| Msg::ServerConfigFailed { error })),
            ),
            None => warn!("No requester available, the server config won't be loaded"),
        }

        Self {
            settings: Rc::new(settings),
            stylesheet,
            _system_theme_listener: system_theme_listener,
            modal_dispatcher,
            dispatcher: ClientSettingsDispatcher::new(link.clone()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleTheme { dark, source } => self.toggle_theme(dark, source),
            Msg::ApplyPreferences { selection } => self.apply_preferences(selection),
            Msg::ServerConfigLoaded { config } => self.server_config_loaded(config),
            Msg::ServerConfigFailed { error } => self.server_config_failed(error),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            // This context provider will never change for the life of the ClientSettingsManager.
            <ContextProvider<ClientSettingsDispatcher> context={self.dispatcher.clone()}>
            // This context will change whenever the client settings change.
            <ContextProvider<Rc<ClientSettings>> context={Rc::clone(&self.settings)}>
                {ctx.props().children.clone()}
            </ContextProvider<Rc<ClientSettings>>>
            </ContextProvider<ClientSettingsDispatcher>>
        }
    }
}

/// Dispatcher which can be used to update client settings.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientSettingsDispatcher {
    link: SharedLink<ClientSettingsManager>,
}

impl ClientSettingsDispatcher {
    /// Wraps the Scope from ClientSettingsManager.
    fn new(scope: yew::html::Scope<ClientSettingsManager>) -> Self {
        Self {
            link: SharedLink::new(scope),
        }
    }

    /// Switch the theme. User changes are saved immediately.
    pub fn toggle_theme(&self, dark: bool, source: ThemeSource) {
        self.link.send_message(Msg::ToggleTheme { dark, source });
    }

    /// Apply the feature checkboxes from the settings dialog, then save all settings.
    pub fn apply_preferences(&self, selection: DialogSelection) {
        self.link.send_message(Msg::ApplyPreferences { selection });
    }
}

/// Gets the current client settings.
#[hook]
pub fn use_client_settings() -> Rc<ClientSettings> {
    use_context::<Rc<ClientSettings>>()
        .expect("use_client_settings can only be used from a child of ClientSettingsManager")
}

/// Gets the dispatcher for updating client settings.
#[hook]
pub fn use_client_settings_dispatcher() -> ClientSettingsDispatcher {
    use_context::<ClientSettingsDispatcher>().expect(
        "use_client_settings_dispatcher can only be used from a child of ClientSettingsManager",
    )
}

/// Gets whether the server config has been applied. Until it has, blocked features aren't known.
#[hook]
pub fn use_server_config_applied() -> bool {
    use_client_settings().server_config_applied()
}

/// Gets whether the dark theme is active. Outside of a ClientSettingsManager this is always
/// the light theme.
#[hook]
pub fn use_dark_theme() -> bool {
    use_context::<Rc<ClientSettings>>().map_or(false, |settings| settings.is_dark_theme())
}
