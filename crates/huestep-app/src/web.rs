//! WebAssembly entry point.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::{AppConfig, HuestepApp};

/// Id of the canvas element the app renders into.
const CANVAS_ID: &str = "huestep_canvas";

fn canvas() -> Result<web_sys::HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("Canvas element not found"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("Element is not a canvas"))
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub async fn run_wasm() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        let message = format!("Failed to initialize logger: {}", e);
        web_sys::console::error_1(&JsValue::from_str(&message));
    }

    log::info!("Starting huestep (WASM)");

    eframe::WebRunner::new()
        .start(
            canvas()?,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(HuestepApp::new(cc, AppConfig::default())))),
        )
        .await
}
