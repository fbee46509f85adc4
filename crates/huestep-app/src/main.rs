//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting huestep");

    huestep_app::run_native(huestep_app::AppConfig::default())
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
