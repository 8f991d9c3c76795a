#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use trails_core::RenderLoop;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod surface;

use events::EventListener;
use frame::FrameDriver;
use surface::CanvasSurface;

/// Everything a running engine holds on to. Dropping it unmounts the
/// animation: no further frames, listeners removed, idle timer released.
struct EngineHandle {
    engine: Rc<RefCell<RenderLoop<CanvasSurface>>>,
    driver: FrameDriver,
    listeners: Vec<EventListener>,
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.driver.cancel();
        self.listeners.clear();
        self.engine.borrow_mut().stop();
    }
}

thread_local! {
    static ENGINE: RefCell<Option<EngineHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trails-web starting");

    match init() {
        Ok(handle) => ENGINE.with(|slot| *slot.borrow_mut() = Some(handle)),
        // the page renders without the background effect
        Err(e) => log::error!("init error: {e:?}"),
    }
    Ok(())
}

/// Tear the animation down. Safe to call more than once.
#[wasm_bindgen]
pub fn stop() {
    let handle = ENGINE.with(|slot| slot.borrow_mut().take());
    if handle.is_some() {
        log::info!("trails-web stopping");
    }
    drop(handle);
}

fn init() -> anyhow::Result<EngineHandle> {
    let window = dom::window()?;
    let canvas = dom::find_canvas(&window)?;
    let ctx = dom::context_2d(&canvas)?;

    let (width, height) = dom::viewport_size(&window);
    canvas.set_width(width);
    canvas.set_height(height);

    let params = dom::params_from_canvas(&canvas);
    let engine = Rc::new(RefCell::new(RenderLoop::new(
        CanvasSurface::new(canvas.clone(), ctx),
        &params,
    )?));

    let listeners = vec![
        events::wire_resize(&window, engine.clone())?,
        events::wire_pointermove(&window, &canvas, engine.clone())?,
    ];
    let driver = FrameDriver::start(&window, engine.clone())?;

    Ok(EngineHandle {
        engine,
        driver,
        listeners,
    })
}
