//! Platform-independent core of the cursor-trail animation.
//!
//! Nothing here touches a browser API: hosts feed pointer, resize and
//! animation-frame events into a [`RenderLoop`] and provide a [`Surface`] to
//! draw on.

pub mod agent;
pub mod config;
pub mod constants;
pub mod error;
pub mod noise_line;
pub mod pointer;
pub mod pool;
pub mod render_loop;
pub mod surface;

pub use agent::{Agent, TrailPoint};
pub use config::{EngineParams, Rgb};
pub use error::{EngineError, Result};
pub use noise_line::NoiseLineRenderer;
pub use pointer::{IdleTimer, PointerState, PointerTracker};
pub use pool::AgentPool;
pub use render_loop::{FrameStatus, RenderLoop};
pub use surface::{DrawCommand, RecordingSurface, Surface};
