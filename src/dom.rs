use crate::constants::{ATTR_AGENTS, ATTR_SEED, CANVAS_ID, MAX_AGENTS};
use crate::input;
use trails_core::{EngineError, EngineParams};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window() -> Result<web::Window, EngineError> {
    web::window().ok_or_else(|| EngineError::MissingSurface("no window".into()))
}

pub fn find_canvas(window: &web::Window) -> Result<web::HtmlCanvasElement, EngineError> {
    let document = window
        .document()
        .ok_or_else(|| EngineError::MissingSurface("no document".into()))?;
    document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| EngineError::MissingSurface(format!("missing #{CANVAS_ID}")))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| EngineError::MissingSurface(format!("#{CANVAS_ID} is not a canvas")))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, EngineError> {
    canvas
        .get_context("2d")
        .map_err(|e| EngineError::MissingContext(format!("{e:?}")))?
        .ok_or_else(|| EngineError::MissingContext("2d context unavailable".into()))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| EngineError::MissingContext(format!("{e:?}")))
}

/// Window inner size in whole pixels.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    input::viewport_pixels(dim(window.inner_width()), dim(window.inner_height()))
}

/// Defaults overridden by the canvas's data attributes. Bad values are logged
/// and ignored.
pub fn params_from_canvas(canvas: &web::HtmlCanvasElement) -> EngineParams {
    let mut params = EngineParams::default().with_seed(rand::random());
    if let Some(raw) = canvas.get_attribute(ATTR_AGENTS) {
        match input::parse_agent_count(&raw, MAX_AGENTS) {
            Some(n) => params = params.with_agent_count(n),
            None => log::warn!("ignoring {ATTR_AGENTS}={raw:?}"),
        }
    }
    if let Some(raw) = canvas.get_attribute(ATTR_SEED) {
        match input::parse_seed(&raw) {
            Some(seed) => params = params.with_seed(seed),
            None => log::warn!("ignoring {ATTR_SEED}={raw:?}"),
        }
    }
    params
}
