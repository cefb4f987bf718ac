//! Controller layer: scripted UI events and their dispatch onto the dashboard.

pub mod events;
pub mod orchestration;
