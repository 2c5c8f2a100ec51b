//! Bridge between the tokio-driven load controller and the egui thread.

pub mod runtime;
