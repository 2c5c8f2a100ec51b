//! Controller layer: events flowing from the backend worker to the UI.

pub mod events;
