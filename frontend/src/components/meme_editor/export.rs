//! Rasterizes the live preview into a PNG download.
//!
//! The preview is redrawn onto an offscreen canvas at `config::EXPORT_SCALE`
//! using the on-page geometry: the template image where it is laid out, and
//! each caption at its rendered box with its computed font and colour. The
//! canvas background stays transparent. The template `<img>` carries
//! `crossorigin="anonymous"`, otherwise the canvas is tainted and encoding
//! fails.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, CssStyleDeclaration, Document, Element, HtmlAnchorElement,
    HtmlCanvasElement, HtmlElement, HtmlImageElement,
};

use common::editor::drag::ContainerRect;
use common::error::{MemeError, MemeResult};
use common::model::caption::CaptionSlot;
use common::model::orientation::HorizontalAlign;

use crate::config;

use super::helpers::{export_file_name, js_error_message, parse_px, text_anchor_x, wrap_lines};
use super::state::{element_rect, MemeEditorComponent};

/// Captures the preview and starts the download. Returns the file name used.
pub fn export_meme(component: &MemeEditorComponent) -> MemeResult<String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| MemeError::export("no document available"))?;
    let container = component
        .container_ref
        .cast::<HtmlElement>()
        .ok_or_else(|| MemeError::export("preview container is not mounted"))?;
    let image = component
        .image_ref
        .cast::<HtmlImageElement>()
        .ok_or_else(|| MemeError::export("template image is not mounted"))?;
    if !image.complete() || image.natural_width() == 0 {
        return Err(MemeError::export("template image has not finished loading"));
    }

    let origin = element_rect(&container);
    let canvas = create_canvas(&document, &origin)?;
    let ctx = context_2d(&canvas)?;
    ctx.scale(config::EXPORT_SCALE, config::EXPORT_SCALE)
        .map_err(|e| js_failure("scale canvas", e))?;

    let image_rect = relative_to(&element_rect(&image), &origin);
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        &image,
        image_rect.left,
        image_rect.top,
        image_rect.width,
        image_rect.height,
    )
    .map_err(|e| js_failure("draw template image", e))?;

    let align = component.session.orientation.horizontal;
    for slot in [CaptionSlot::Top, CaptionSlot::Bottom] {
        let text = &component.session.caption(slot).text;
        if text.trim().is_empty() {
            continue;
        }
        if let Some(element) = component.caption_ref(slot).cast::<Element>() {
            let caption_rect = relative_to(&element_rect(&element), &origin);
            draw_caption(&ctx, &element, &caption_rect, text, align)?;
        }
    }

    // Throws a SecurityError when the image tainted the canvas.
    let data_url = canvas
        .to_data_url_with_type(config::EXPORT_MIME)
        .map_err(|e| js_failure("encode PNG", e))?;

    let file_name = export_file_name(js_sys::Date::now());
    trigger_download(&document, &data_url, &file_name)?;
    Ok(file_name)
}

fn js_failure(action: &str, err: JsValue) -> MemeError {
    MemeError::export(format!("{} failed: {}", action, js_error_message(&err)))
}

fn relative_to(rect: &ContainerRect, origin: &ContainerRect) -> ContainerRect {
    ContainerRect {
        left: rect.left - origin.left,
        top: rect.top - origin.top,
        ..*rect
    }
}

fn create_canvas(document: &Document, size: &ContainerRect) -> MemeResult<HtmlCanvasElement> {
    if !(size.width > 0.0 && size.height > 0.0) {
        return Err(MemeError::export("preview container has no size"));
    }
    let canvas = document
        .create_element("canvas")
        .map_err(|e| js_failure("create canvas", e))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MemeError::export("created element is not a canvas"))?;
    canvas.set_width((size.width * config::EXPORT_SCALE).round() as u32);
    canvas.set_height((size.height * config::EXPORT_SCALE).round() as u32);
    Ok(canvas)
}

fn context_2d(canvas: &HtmlCanvasElement) -> MemeResult<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| js_failure("get 2d context", e))?
        .ok_or_else(|| MemeError::export("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| MemeError::export("context is not a CanvasRenderingContext2d"))
}

/// Caption typography as laid out in the preview.
struct CaptionFont {
    font: String,
    color: String,
    size: f64,
    line_height: f64,
}

impl CaptionFont {
    fn from_computed(style: Option<CssStyleDeclaration>) -> Self {
        let read = |name: &str| {
            style
                .as_ref()
                .and_then(|s| s.get_property_value(name).ok())
                .filter(|v| !v.trim().is_empty())
        };

        let size = read("font-size").as_deref().and_then(parse_px).unwrap_or(32.0);
        let font = match (read("font-family"), read("font-weight"), read("font-style")) {
            (Some(family), weight, font_style) => format!(
                "{} {} {}px {}",
                font_style.unwrap_or_else(|| "normal".to_string()),
                weight.unwrap_or_else(|| "normal".to_string()),
                size,
                family
            ),
            (None, ..) => config::CAPTION_FALLBACK_FONT.to_string(),
        };
        let line_height = read("line-height")
            .as_deref()
            .and_then(parse_px)
            .unwrap_or(size * config::CAPTION_LINE_HEIGHT);

        Self {
            font,
            color: read("color").unwrap_or_else(|| config::CAPTION_FALLBACK_COLOR.to_string()),
            size,
            line_height,
        }
    }
}

fn draw_caption(
    ctx: &CanvasRenderingContext2d,
    element: &Element,
    rect: &ContainerRect,
    text: &str,
    align: HorizontalAlign,
) -> MemeResult<()> {
    let computed = web_sys::window().and_then(|w| w.get_computed_style(element).ok().flatten());
    let font = CaptionFont::from_computed(computed);

    ctx.set_font(&font.font);
    ctx.set_text_align(align.value());
    ctx.set_text_baseline("middle");
    ctx.set_line_join("round");
    ctx.set_line_width((font.size / 8.0).max(2.0));
    ctx.set_stroke_style_str(config::CAPTION_OUTLINE_COLOR);
    ctx.set_fill_style_str(&font.color);

    let lines = wrap_lines(text, rect.width, |candidate| {
        ctx.measure_text(candidate).map(|m| m.width()).unwrap_or(0.0)
    });

    let x = text_anchor_x(align, rect.left, rect.width);
    let block_height = font.line_height * lines.len() as f64;
    let first_line_y = rect.top + (rect.height - block_height) / 2.0 + font.line_height / 2.0;

    for (i, line) in lines.iter().enumerate() {
        let y = first_line_y + font.line_height * i as f64;
        ctx.stroke_text(line, x, y)
            .map_err(|e| js_failure("stroke caption", e))?;
        ctx.fill_text(line, x, y)
            .map_err(|e| js_failure("fill caption", e))?;
    }
    Ok(())
}

fn trigger_download(document: &Document, data_url: &str, file_name: &str) -> MemeResult<()> {
    let link = document
        .create_element("a")
        .map_err(|e| js_failure("create download link", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| MemeError::export("created element is not an anchor"))?;
    link.set_download(file_name);
    link.set_href(data_url);

    let body = document
        .body()
        .ok_or_else(|| MemeError::export("document has no body"))?;
    body.append_child(&link)
        .map_err(|e| js_failure("attach download link", e))?;
    link.click();
    body.remove_child(&link)
        .map_err(|e| js_failure("detach download link", e))?;
    Ok(())
}
