use dioxus::prelude::*;

use crate::settings::{save_settings, HudSettings};

fn persist(mut settings: Signal<HudSettings>, next: HudSettings) {
    let next = next.clamped();
    if let Err(err) = save_settings(&next) {
        log::warn!("Failed to save settings: {}", err);
    }
    settings.set(next);
}

#[component]
pub fn SettingsPanel(settings: Signal<HudSettings>) -> Element {
    let s = settings();
    rsx! {
        div {
            class: "settings-panel",
            style: "
                padding: 1.5rem; max-width: 22rem;
                background: #12121a;
                border: 1px solid rgba(255,255,255,0.12);
                border-radius: 12px;
                display: flex; flex-direction: column; gap: 1rem;
            ",
            h3 {
                style: "margin: 0; font-size: 1rem; color: #9ca3af;",
                "Performance"
            }
            label {
                style: "display: flex; align-items: center; gap: 0.75rem; cursor: pointer;",
                input {
                    r#type: "checkbox",
                    checked: s.show_fps_counter,
                    oninput: move |evt| {
                        let mut next = settings();
                        next.show_fps_counter = evt.checked();
                        persist(settings, next);
                    },
                }
                span { style: "color: #e5e7eb; font-size: 0.9375rem;", "Show FPS counter" }
            }
            label {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 0.75rem;",
                span { style: "color: #e5e7eb; font-size: 0.9375rem;", "Target frame rate" }
                input {
                    r#type: "number",
                    min: "1",
                    max: "240",
                    value: "{s.target_fps}",
                    style: "width: 5rem;",
                    onchange: move |evt| {
                        // ignore partial input such as an empty field
                        if let Ok(fps) = evt.value().trim().parse::<u32>() {
                            let mut next = settings();
                            next.target_fps = fps;
                            persist(settings, next);
                        }
                    },
                }
            }
            label {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 0.75rem;",
                span { style: "color: #e5e7eb; font-size: 0.9375rem;", "Averaged frames" }
                input {
                    r#type: "number",
                    min: "2",
                    max: "600",
                    value: "{s.sample_window}",
                    style: "width: 5rem;",
                    onchange: move |evt| {
                        if let Ok(window) = evt.value().trim().parse::<u32>() {
                            let mut next = settings();
                            next.sample_window = window;
                            persist(settings, next);
                        }
                    },
                }
            }
        }
    }
}
