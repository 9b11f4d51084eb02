//! Settings dialog, letting the user change the theme and the features the server allows.

use std::rc::Rc;

use marker_settings::{DialogSelection, ThemeSource};
use yew::{
    function_component, hook, html, use_callback, use_context, use_reducer_eq, use_state_eq,
    Callback, ContextProvider, Html, Properties, Reducible, UseReducerHandle,
};

use crate::client_settings::manager::{use_client_settings, use_client_settings_dispatcher};
use crate::inputs::button::Button;
use crate::inputs::toggle::LabeledCheckbox;
use crate::overlay_window::OverlayWindow;

/// Whether the settings dialog is open.
#[derive(Debug, Default, PartialEq)]
struct DialogState {
    /// Called after settings are applied, with whether views need to be rebuilt. `None` when
    /// the dialog is closed.
    on_apply: Option<Callback<bool>>,
}

enum DialogAction {
    Show(Callback<bool>),
    Hide,
}

impl Reducible for DialogState {
    type Action = DialogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DialogAction::Show(on_apply) => Rc::new(Self {
                on_apply: Some(on_apply),
            }),
            DialogAction::Hide => Rc::new(Self { on_apply: None }),
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    /// Children which can open the settings dialog.
    pub children: Html,
}

/// Provides the [`SettingsDialogDispatcher`] and shows the settings dialog while it is open.
#[function_component]
pub fn SettingsDialogManager(Props { children }: &Props) -> Html {
    let state = use_reducer_eq(DialogState::default);
    let dispatcher = SettingsDialogDispatcher {
        state: state.clone(),
    };

    html! {
        <ContextProvider<SettingsDialogDispatcher> context={dispatcher}>
            {children.clone()}
            if let Some(on_apply) = &state.on_apply {
                <SettingsDialog on_apply={on_apply.clone()} />
            }
        </ContextProvider<SettingsDialogDispatcher>>
    }
}

/// Opens and closes the settings dialog.
#[derive(Clone, PartialEq)]
pub struct SettingsDialogDispatcher {
    state: UseReducerHandle<DialogState>,
}

impl SettingsDialogDispatcher {
    /// Opens the settings dialog. `on_apply` is called after the user applies their changes, with
    /// whether views need to be rebuilt to reflect them.
    pub fn show_settings(&self, on_apply: Callback<bool>) {
        self.state.dispatch(DialogAction::Show(on_apply));
    }

    /// Closes the settings dialog without applying anything.
    pub fn hide(&self) {
        self.state.dispatch(DialogAction::Hide);
    }
}

/// Gets the dispatcher for the settings dialog.
#[hook]
pub fn use_settings_dialog() -> SettingsDialogDispatcher {
    use_context::<SettingsDialogDispatcher>()
        .expect("use_settings_dialog can only be used from a child of SettingsDialogManager")
}

#[derive(PartialEq, Properties)]
struct SettingsDialogProps {
    /// Called after the settings are applied.
    on_apply: Callback<bool>,
}

/// The dialog itself. Checkbox changes are kept in a draft until "Apply".
#[function_component]
fn SettingsDialog(SettingsDialogProps { on_apply }: &SettingsDialogProps) -> Html {
    let settings = use_client_settings();
    let settings_dispatcher = use_client_settings_dispatcher();
    let dialog = use_settings_dialog();
    let draft = {
        let settings = settings.clone();
        use_state_eq(move || DialogSelection::from_settings(&settings))
    };

    let set_dark = use_callback(draft.clone(), |dark: bool, draft| {
        draft.set(DialogSelection { dark, ..**draft });
    });
    let set_thumbnails = use_callback(draft.clone(), |thumbnails: bool, draft| {
        draft.set(DialogSelection {
            thumbnails: Some(thumbnails),
            ..**draft
        });
    });
    let set_extended_stats = use_callback(draft.clone(), |extended: bool, draft| {
        draft.set(DialogSelection {
            extended_stats: Some(extended),
            ..**draft
        });
    });

    let cancel = use_callback(dialog.clone(), |(), dialog| dialog.hide());
    let apply = use_callback(
        (
            *draft,
            settings,
            settings_dispatcher,
            dialog,
            on_apply.clone(),
        ),
        |(), (selection, settings, settings_dispatcher, dialog, on_apply)| {
            let should_reset = selection.requires_view_reset(settings);
            if let Some(dark) = selection.theme_change(settings) {
                settings_dispatcher.toggle_theme(dark, ThemeSource::User);
            }
            settings_dispatcher.apply_preferences(*selection);
            dialog.hide();
            on_apply.emit(should_reset);
        },
    );

    html! {
        <OverlayWindow title="Settings" class="settings-dialog" on_close={cancel.clone()}>
            <div class="settings-form">
                <LabeledCheckbox
                    id="darkModeSetting"
                    label="Dark Mode"
                    tooltip="Use the dark theme"
                    checked={draft.dark}
                    onchange={set_dark} />
                if let Some(checked) = draft.thumbnails {
                    <LabeledCheckbox
                        id="showThumbnailsSetting"
                        label="Show Thumbnails"
                        tooltip="Show thumbnails when adding or editing markers"
                        {checked}
                        onchange={set_thumbnails} />
                }
                if let Some(checked) = draft.extended_stats {
                    <LabeledCheckbox
                        id="extendedStatsSetting"
                        label="Extended Marker Stats"
                        tooltip="Show detailed marker information when browsing libraries"
                        {checked}
                        onchange={set_extended_stats} />
                }
            </div>
            <div class="modal-buttons">
                <Button class="modal-button" title="Cancel" onclick={cancel}>
                    {"Cancel"}
                </Button>
                <Button class="modal-button" title="Apply" onclick={apply}>
                    {"Apply"}
                </Button>
            </div>
        </OverlayWindow>
    }
}
