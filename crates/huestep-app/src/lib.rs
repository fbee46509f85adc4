//! huestep Application
//!
//! The eframe shell: window setup, theme, clipboard and the per-entity views.

mod app;
mod clipboard;
mod frame;
mod view;

pub use app::{AppConfig, HuestepApp};
pub use clipboard::PlatformClipboard;
pub use frame::RepaintScheduler;

/// Open the native window and run until it closes.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_native(config: AppConfig) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([config.width as f32, config.height as f32]),
        ..Default::default()
    };
    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(HuestepApp::new(cc, config)))),
    )
}

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
