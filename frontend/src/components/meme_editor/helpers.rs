//! Utility functions for the meme editor component.
//!
//! - **Template fetch**: the one network call, decoded into `MemeTemplate`s.
//! - **Labels**: orientation-dependent placeholders and drag-mode copy.
//! - **Layout**: caption CSS and the text geometry the export reuses.
//! - **User feedback**: toast and blocking alert.

use gloo_net::http::Request;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use common::api::GetMemesResponse;
use common::error::{MemeError, MemeResult};
use common::model::caption::{CaptionSlot, Position};
use common::model::orientation::{HorizontalAlign, VerticalMode};
use common::model::template::MemeTemplate;

use crate::config;

/// Requests the template list.
///
/// Transport errors, non-2xx statuses, undecodable bodies and API-reported
/// failures all surface as `MemeError::TemplateFetch`.
pub async fn fetch_templates(url: &str) -> MemeResult<Vec<MemeTemplate>> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| MemeError::template_fetch(err.to_string()))?;

    if !response.ok() {
        return Err(MemeError::template_fetch(format!(
            "unexpected status {}",
            response.status()
        )));
    }

    let body = response
        .json::<GetMemesResponse>()
        .await
        .map_err(|err| MemeError::template_fetch(err.to_string()))?;
    body.into_templates().map_err(MemeError::template_fetch)
}

pub fn caption_placeholder(mode: VerticalMode, slot: CaptionSlot) -> &'static str {
    match (mode, slot) {
        (VerticalMode::TopBottom, CaptionSlot::Top) => "Enter your top text here...",
        (VerticalMode::TopBottom, CaptionSlot::Bottom) => "Enter your bottom text here...",
        (VerticalMode::LeftRight, CaptionSlot::Top) => "Enter your left side text here...",
        (VerticalMode::LeftRight, CaptionSlot::Bottom) => "Enter your right side text here...",
    }
}

pub fn drag_button_label(drag_mode: bool) -> &'static str {
    if drag_mode {
        "🎯 Drag Mode ON"
    } else {
        "🎯 Drag Mode OFF"
    }
}

pub fn drag_instruction(drag_mode: bool) -> &'static str {
    if drag_mode {
        "Click and drag text to move it around"
    } else {
        "Enable drag mode to move text freely"
    }
}

/// Inline style anchoring a caption's center on its percent position.
pub fn caption_style(position: Position, align: HorizontalAlign) -> String {
    format!(
        "left: {}%; top: {}%; transform: translate(-50%, -50%); text-align: {};",
        position.x,
        position.y,
        align.value()
    )
}

/// `meme-<unix-epoch-ms>.png`
pub fn export_file_name(epoch_ms: f64) -> String {
    format!(
        "{}{}{}",
        config::EXPORT_FILE_PREFIX,
        epoch_ms.max(0.0) as u64,
        config::EXPORT_FILE_EXTENSION
    )
}

/// Parses a computed CSS length such as `"32px"`.
pub fn parse_px(value: &str) -> Option<f64> {
    value
        .trim()
        .strip_suffix("px")
        .and_then(|n| n.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Horizontal canvas anchor for text inside a box, given the `textAlign` in use.
pub fn text_anchor_x(align: HorizontalAlign, box_left: f64, box_width: f64) -> f64 {
    match align {
        HorizontalAlign::Left => box_left,
        HorizontalAlign::Center => box_left + box_width / 2.0,
        HorizontalAlign::Right => box_left + box_width,
    }
}

/// Greedy word wrap so exported captions break where the preview does.
///
/// Words wider than `max_width` get a line of their own instead of being
/// split. Explicit newlines are kept.
pub fn wrap_lines(text: &str, max_width: f64, measure: impl Fn(&str) -> f64) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{} {}", current, word);
            // Small tolerance for subpixel differences between DOM layout and canvas metrics.
            if measure(&candidate) <= max_width + 0.5 {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }
    lines
}

/// Best-effort human readable message for a JS exception.
pub fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Blocking notification; used for failures the user must acknowledge.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast removes itself after `config::TOAST_DURATION_MS`.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(config::TOAST_DURATION_MS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_width(s: &str) -> f64 {
        s.chars().count() as f64 * 10.0
    }

    #[test]
    fn placeholders_follow_orientation() {
        assert_eq!(
            caption_placeholder(VerticalMode::TopBottom, CaptionSlot::Top),
            "Enter your top text here..."
        );
        assert_eq!(
            caption_placeholder(VerticalMode::LeftRight, CaptionSlot::Bottom),
            "Enter your right side text here..."
        );
    }

    #[test]
    fn drag_copy_reflects_mode() {
        assert_eq!(drag_button_label(true), "🎯 Drag Mode ON");
        assert_eq!(drag_button_label(false), "🎯 Drag Mode OFF");
        assert_ne!(drag_instruction(true), drag_instruction(false));
    }

    #[test]
    fn caption_style_centers_on_position() {
        let style = caption_style(Position { x: 50.0, y: 12.5 }, HorizontalAlign::Left);
        assert_eq!(
            style,
            "left: 50%; top: 12.5%; transform: translate(-50%, -50%); text-align: left;"
        );
    }

    #[test]
    fn export_file_name_uses_epoch_millis() {
        assert_eq!(export_file_name(1_700_000_000_123.0), "meme-1700000000123.png");
        assert_eq!(export_file_name(-1.0), "meme-0.png");
    }

    #[test]
    fn parse_px_reads_computed_lengths() {
        assert_eq!(parse_px("32px"), Some(32.0));
        assert_eq!(parse_px(" 38.4px "), Some(38.4));
        assert_eq!(parse_px("normal"), None);
        assert_eq!(parse_px("2em"), None);
    }

    #[test]
    fn anchor_follows_alignment() {
        assert_eq!(text_anchor_x(HorizontalAlign::Left, 10.0, 100.0), 10.0);
        assert_eq!(text_anchor_x(HorizontalAlign::Center, 10.0, 100.0), 60.0);
        assert_eq!(text_anchor_x(HorizontalAlign::Right, 10.0, 100.0), 110.0);
    }

    #[test]
    fn wrap_lines_breaks_on_width() {
        let lines = wrap_lines("one does not simply", 100.0, char_width);
        assert_eq!(lines, vec!["one does", "not simply"]);
    }

    #[test]
    fn wrap_lines_keeps_long_words_and_newlines() {
        let lines = wrap_lines("supercalifragilistic\nhi", 50.0, char_width);
        assert_eq!(lines, vec!["supercalifragilistic", "hi"]);
    }

    #[test]
    fn wrap_lines_of_single_short_line() {
        assert_eq!(wrap_lines("TOP", 500.0, char_width), vec!["TOP"]);
    }
}
