mod fps_counter;
mod metrics_overlay;
mod settings_panel;

pub use fps_counter::{badge_class, format_fps, passthrough, FpsCounter, BASE_CLASSES, MIN_DIGITS};
pub use metrics_overlay::MetricsOverlay;
pub use settings_panel::SettingsPanel;
