use dioxus::prelude::*;

use super::fps_counter::{passthrough, FpsCounter};

#[component]
pub fn MetricsOverlay(visible: bool, fps: Signal<f64>) -> Element {
    if !visible {
        return rsx! {};
    }
    rsx! {
        div {
            style: "
                position: fixed; top: 0.75rem; right: 0.75rem;
                z-index: 1500; pointer-events: none;
            ",
            FpsCounter {
                value: fps(),
                class: "metrics-overlay",
                attributes: vec![
                    passthrough("title", "Measured frame rate"),
                    passthrough("data-testid", "fps-counter"),
                ],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Host(visible: bool, fps: f64) -> Element {
        let fps = use_signal(|| fps);
        rsx! { MetricsOverlay { visible, fps } }
    }

    #[test]
    fn hidden_overlay_renders_nothing() {
        let html = dioxus_ssr::render_element(rsx! { Host { visible: false, fps: 60.0 } });
        assert!(!html.contains("fps"), "{html}");
    }

    #[test]
    fn visible_overlay_hosts_badge() {
        let html = dioxus_ssr::render_element(rsx! { Host { visible: true, fps: 59.7 } });
        assert!(html.contains("60 fps"), "{html}");
        assert!(html.contains("metrics-overlay text-sm"), "{html}");
        assert!(html.contains("title=\"Measured frame rate\""), "{html}");
    }
}
