use super::EventListener;
use crate::input;
use crate::surface::CanvasSurface;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use trails_core::RenderLoop;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Forward window pointer moves, in canvas pixels, to the engine.
pub fn wire_pointermove(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    engine: Rc<RefCell<RenderLoop<CanvasSurface>>>,
) -> anyhow::Result<EventListener> {
    let canvas = canvas.clone();
    EventListener::new(window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let rect = canvas.get_bounding_client_rect();
        let pos = input::client_to_surface(
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
            Vec2::new(canvas.width() as f32, canvas.height() as f32),
        );
        // event timestamps share the animation-frame clock
        engine.borrow_mut().pointer_move(pos.x, pos.y, ev.time_stamp());
    })
}
