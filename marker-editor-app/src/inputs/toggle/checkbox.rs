use yew::{function_component, html, use_callback, AttrValue, Callback, Event, Html, Properties};

use crate::inputs::events::get_checked_from_event;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// HTML id and name of the checkbox.
    pub id: AttrValue,
    /// Label shown before the checkbox.
    pub label: AttrValue,
    /// Hover text for the label.
    #[prop_or_default]
    pub tooltip: Option<AttrValue>,
    /// Whether the checkbox is currently checked.
    pub checked: bool,
    /// Called with the new checked state when the checkbox changes.
    pub onchange: Callback<bool>,
}

/// A label and checkbox pair in a form row.
#[function_component]
pub fn LabeledCheckbox(
    &Props {
        ref id,
        ref label,
        ref tooltip,
        checked,
        ref onchange,
    }: &Props,
) -> Html {
    let onchange = use_callback(onchange.clone(), |e: Event, onchange| {
        if let Some(checked) = get_checked_from_event(&e) {
            onchange.emit(checked);
        }
    });

    html! {
        <div class="formInput">
            <label for={id.clone()} title={tooltip.clone()}>{format!("{label}: ")}</label>
            <input type="checkbox" id={id.clone()} name={id.clone()} {checked} {onchange} />
        </div>
    }
}
