use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::progress_data::ProgressData;
use crate::controllers::interactive::errors::render_error::RenderError;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Progress(ProgressData),
    Frame(FrameData),
    Error(RenderError),
}
