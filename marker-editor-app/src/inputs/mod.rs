//! Generic input elements.

pub mod button;
pub mod events;
pub mod toggle;
