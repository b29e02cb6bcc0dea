mod bubbles;
mod level;
mod map;
mod plugins;
mod state;
mod types;
mod widgets;
mod windows;

pub use map::MapConfig;

use map::MapApp;

pub fn run(config: MapConfig) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Games Map",
        Default::default(),
        Box::new(move |cc| Ok(Box::new(MapApp::new(cc.egui_ctx.clone(), config)))),
    )
}
