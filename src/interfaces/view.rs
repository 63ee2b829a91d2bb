//! The job creation screen: immutable state, a task-driven controller and an HTML renderer.

pub mod controller;
pub mod render;
pub mod state;
