use fps_hud::app;

fn main() {
    env_logger::init();
    log::info!("fps-hud {}", env!("CARGO_PKG_VERSION"));

    #[cfg(feature = "desktop")]
    {
        use dioxus::prelude::LaunchBuilder;
        use dioxus_desktop::{Config, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(Config::new().with_window(WindowBuilder::new().with_title("FPS HUD")))
            .launch(app::App);
    }
    #[cfg(not(feature = "desktop"))]
    dioxus::launch(app::App);
}
