use web_sys::{Event, HtmlInputElement};
use yew::TargetCast as _;

/// Extract the checked state from the target of a change event on a checkbox.
pub fn get_checked_from_event(e: &Event) -> Option<bool> {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| input.checked())
}
