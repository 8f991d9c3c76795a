use crate::surface::CanvasSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use trails_core::{FrameStatus, RenderLoop};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Drives `RenderLoop::frame` from `requestAnimationFrame` and remembers the
/// pending request so it can be cancelled.
pub struct FrameDriver {
    window: web::Window,
    tick: Rc<RefCell<Option<FrameClosure>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameDriver {
    pub fn start(
        window: &web::Window,
        engine: Rc<RefCell<RenderLoop<CanvasSurface>>>,
    ) -> anyhow::Result<Self> {
        let tick: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        let wnd = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            pending_clone.set(None);
            let status = engine.borrow_mut().frame(timestamp_ms);
            if status == FrameStatus::Stopped {
                return;
            }
            // Schedule next frame
            if let Some(cb) = tick_clone.borrow().as_ref() {
                match wnd.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending_clone.set(Some(id)),
                    Err(e) => log::error!("requestAnimationFrame failed: {e:?}"),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let id = {
            let cb = tick.borrow();
            let cb = cb
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("frame callback missing"))?;
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {e:?}"))?
        };
        pending.set(Some(id));

        Ok(Self {
            window: window.clone(),
            tick,
            pending,
        })
    }

    /// Cancel the outstanding frame request and drop the callback, which also
    /// breaks the callback's reference to itself.
    pub fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameDriver {
    fn drop(&mut self) {
        self.cancel();
    }
}
