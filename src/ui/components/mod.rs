// src/ui/components/mod.rs
//! UI components library

pub mod divider;
pub mod panel;

pub use divider::Divider;
pub use panel::Panel;
