use log::warn;
use web_sys::Element;

use crate::app::App;
use crate::dom::DomError;

mod app;
mod client_settings;
mod dom;
mod icon;
mod inputs;
mod link;
mod modal;
mod overlay_window;
mod requests;
mod server_paused;

/// Finds `#id` and empties it, or creates it at the end of the body.
fn mount_point(id: &str) -> Result<Element, DomError> {
    if let Some(existing) = dom::select_one(&format!("#{id}"), None)? {
        dom::clear_ele(&existing)?;
        return Ok(existing);
    }
    let created = dom::build_node("div", &[("id", id)])?;
    dom::append_children(&dom::body()?, [Some(created.clone())])?;
    Ok(created)
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logging");

    let root = mount_point("app").expect("Unable to create the app root");
    // Overlays are portaled here, so it must exist before anything renders.
    if let Err(e) = mount_point("overlay-host") {
        warn!("Unable to create the overlay host: {e}");
    }
    yew::Renderer::<App>::with_root(root).render();
}
