//! Frame-rate badge for Dioxus front-ends, plus the small app that hosts it:
//! a frame source, a sliding-window tracker, and persisted HUD settings.

pub mod app;
pub mod fps;
pub mod frames;
pub mod settings;
pub mod ui;
