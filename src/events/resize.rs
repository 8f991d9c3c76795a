use super::EventListener;
use crate::dom;
use crate::surface::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use trails_core::RenderLoop;
use web_sys as web;

/// Keep the surface sized to the window.
pub fn wire_resize(
    window: &web::Window,
    engine: Rc<RefCell<RenderLoop<CanvasSurface>>>,
) -> anyhow::Result<EventListener> {
    let wnd = window.clone();
    EventListener::new(window, "resize", move |_| {
        let (w, h) = dom::viewport_size(&wnd);
        engine.borrow_mut().resize(w as f32, h as f32);
    })
}
