use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives everything a generation publishes, in order.
pub trait PresenterPort {
    fn present(&mut self, event: RenderEvent);
}
