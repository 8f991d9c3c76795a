pub mod pointer;
pub mod resize;

pub use pointer::wire_pointermove;
pub use resize::wire_resize;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM listener that unsubscribes itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {kind} listener: {e:?}"))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
