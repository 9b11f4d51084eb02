use yew::{
    classes, function_component, html, use_callback, AttrValue, Callback, Classes, Html, Properties,
};

#[derive(Debug, PartialEq, Properties)]
pub struct Props {
    /// Contents of the button.
    #[prop_or_default]
    pub children: Html,

    /// Callback to activate when the button is clicked.
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,

    /// Hover text for the button.
    #[prop_or_default]
    pub title: Option<AttrValue>,

    /// HTML id of the button.
    #[prop_or_default]
    pub id: Option<AttrValue>,

    /// Extra classes to apply to the button.
    #[prop_or_default]
    pub class: Classes,
}

/// Simple button. The button is disabled if it has no `onclick`.
#[function_component]
pub fn Button(
    Props {
        children,
        onclick,
        title,
        id,
        class,
    }: &Props,
) -> Html {
    let disabled = onclick.is_none();
    let class = classes!("Button", class.clone());
    let onclick = use_callback(onclick.clone(), |_, onclick| {
        if let Some(onclick) = onclick {
            onclick.emit(())
        }
    });

    html! {
        <button {class} {onclick} {disabled} title={title.clone()} id={id.clone()}>
            { children.clone() }
        </button>
    }
}
