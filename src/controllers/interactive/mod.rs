//! Headless interactive session: a view, a task queue and a presenter port.
//!
//! Row batches and Julia sweep steps are queued tasks, so the host drives
//! everything by calling `tick` from its own event loop.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod julia_sweep;
pub mod ports;
pub mod task_queue;

pub use controller::InteractiveController;
pub use events::render_event::RenderEvent;
pub use ports::presenter_port::PresenterPort;
