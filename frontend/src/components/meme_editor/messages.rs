use common::error::MemeError;
use common::model::caption::CaptionSlot;
use common::model::orientation::{HorizontalAlign, VerticalMode};
use common::model::template::MemeTemplate;

#[derive(Clone)]
pub enum Msg {
    TemplatesLoaded(Vec<MemeTemplate>),
    TemplatesFailed(MemeError),
    NewImage,
    SetTopText(String),
    SetBottomText(String),
    SetVerticalMode(VerticalMode),
    SetHorizontalAlign(HorizontalAlign),
    ToggleDragMode,
    BeginDrag(CaptionSlot),
    ContinueDrag { client_x: f64, client_y: f64 },
    EndDrag,
    Download,
}
