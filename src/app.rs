use dioxus::prelude::*;

use crate::fps::FpsTracker;
use crate::frames;
use crate::settings::load_settings;
use crate::ui::{MetricsOverlay, SettingsPanel};

#[component]
pub fn App() -> Element {
    let settings = use_signal(|| load_settings());
    let mut fps = use_signal(|| 0.0_f64);
    let mut frame_task = use_signal(|| None::<Task>);

    let target_fps = use_memo(move || settings().target_fps);
    let sample_window = use_memo(move || settings().sample_window);

    // Restart the frame source whenever the target rate or window changes.
    use_effect(move || {
        let target = target_fps();
        let window = sample_window() as usize;
        if let Some(prev) = *frame_task.peek() {
            prev.cancel();
        }
        fps.set(0.0);
        let mut source = frames::spawn_frame_source(target);
        log::info!("frame source started at {} fps", source.target_fps);
        let task = spawn(async move {
            let mut tracker = FpsTracker::new(window);
            while let Some(at) = source.ticks.recv().await {
                tracker.record_frame_at(at);
                fps.set(tracker.fps());
            }
        });
        frame_task.set(Some(task));
    });

    rsx! {
        div {
            style: "
                min-height: 100vh; margin: 0;
                background: #0d0d12; color: #e5e7eb;
                font-family: ui-sans-serif, system-ui, sans-serif;
                display: flex; align-items: center; justify-content: center;
            ",
            SettingsPanel { settings }
            MetricsOverlay { visible: settings().show_fps_counter, fps }
        }
    }
}
