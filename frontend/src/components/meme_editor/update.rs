//! Update function for the meme editor component.
//!
//! Elm-style: each `Msg` maps onto one `MemeSession` transition, and the
//! returned `bool` tells Yew whether the view needs to re-render. Side
//! effects (console logging, export, alert) happen here too; none of them
//! alter the session on failure.

use gloo_console::{error, log};

use common::model::caption::CaptionSlot;

use crate::config;

use super::export::export_meme;
use super::helpers::{alert, show_toast};
use super::messages::Msg;
use super::state::MemeEditorComponent;

pub fn update(component: &mut MemeEditorComponent, msg: Msg) -> bool {
    match msg {
        Msg::TemplatesLoaded(templates) => {
            log!(format!("Loaded {} meme templates", templates.len()));
            component.session.set_templates(templates);
            false
        }
        Msg::TemplatesFailed(err) => {
            error!(format!("Error fetching memes: {}", err));
            false
        }
        Msg::NewImage => component.session.select_random_template(js_sys::Math::random()),
        Msg::SetTopText(text) => component.session.set_text(CaptionSlot::Top, text),
        Msg::SetBottomText(text) => component.session.set_text(CaptionSlot::Bottom, text),
        Msg::SetVerticalMode(mode) => component.session.set_vertical_mode(mode),
        Msg::SetHorizontalAlign(align) => component.session.set_horizontal_align(align),
        Msg::ToggleDragMode => {
            component.session.toggle_drag_mode();
            true
        }
        Msg::BeginDrag(slot) => component.session.begin_drag(slot),
        Msg::ContinueDrag { client_x, client_y } => {
            let rect = component.container_rect();
            component.session.continue_drag(client_x, client_y, rect)
        }
        Msg::EndDrag => component.session.end_drag(),
        Msg::Download => {
            match export_meme(component) {
                Ok(file_name) => {
                    log!(format!("Exported {}", file_name));
                    show_toast(config::EXPORT_DONE_TOAST);
                }
                Err(err) => {
                    error!(format!("Error downloading meme: {}", err));
                    alert(config::EXPORT_FAILED_ALERT);
                }
            }
            false
        }
    }
}
