//! Shared layout components.

pub mod main_layout;
