//! Browser entry point

use eframe::wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;

use crate::VertexExplorerApp;

/// Id of the canvas element the app attaches to
const CANVAS_ID: &str = "vertex_explorer_canvas";

#[wasm_bindgen(start)]
pub fn start() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run().await {
            log::error!("Failed to start vertex explorer: {:?}", e);
        }
    });
}

async fn run() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("Canvas element not found"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(VertexExplorerApp::new(cc)))),
        )
        .await
}
