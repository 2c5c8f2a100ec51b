//! UI layer: the item list window.

pub mod app;

pub use app::ItemListApp;
