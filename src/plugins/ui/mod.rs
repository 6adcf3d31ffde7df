//! UI plugins.

pub mod hud;
