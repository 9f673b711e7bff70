//! View rendering for the meme editor component.
//!
//! Two blocks: the form (caption inputs, orientation selects, drag toggle,
//! new-image and download buttons) and the preview container holding the
//! template image with both captions absolutely positioned on top.
//!
//! Press handlers only exist in effect while drag mode is on; move handlers
//! only emit while a caption is being dragged, so ordinary pointer motion
//! never reaches `update`.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::caption::CaptionSlot;
use common::model::orientation::{HorizontalAlign, VerticalMode};

use super::helpers::{caption_placeholder, caption_style, drag_button_label, drag_instruction};
use super::messages::Msg;
use super::state::MemeEditorComponent;

pub fn view(component: &MemeEditorComponent, ctx: &Context<MemeEditorComponent>) -> Html {
    let link = ctx.link();

    html! {
        <main class="meme-container">
            <div class="form">
                { build_caption_input(component, link, CaptionSlot::Top) }
                { build_caption_input(component, link, CaptionSlot::Bottom) }
                { build_orientation_controls(component, link) }
                { build_drag_toggle(component, link) }
                { build_buttons(link) }
            </div>
            { build_preview(component, link) }
        </main>
    }
}

fn build_caption_input(
    component: &MemeEditorComponent,
    link: &Scope<MemeEditorComponent>,
    slot: CaptionSlot,
) -> Html {
    let session = &component.session;
    let oninput = link.callback(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        match slot {
            CaptionSlot::Top => Msg::SetTopText(value),
            CaptionSlot::Bottom => Msg::SetBottomText(value),
        }
    });

    html! {
        <input
            type="text"
            class="form-input"
            placeholder={caption_placeholder(session.orientation.vertical, slot)}
            value={session.caption(slot).text.clone()}
            {oninput}
        />
    }
}

fn build_orientation_controls(
    component: &MemeEditorComponent,
    link: &Scope<MemeEditorComponent>,
) -> Html {
    let orientation = component.session.orientation;

    let vertical_options = VerticalMode::ALL
        .into_iter()
        .map(|mode| {
            html! {
                <option value={mode.value()} selected={mode == orientation.vertical}>
                    { mode.label() }
                </option>
            }
        })
        .collect::<Html>();

    let horizontal_options = HorizontalAlign::ALL
        .into_iter()
        .map(|align| {
            html! {
                <option value={align.value()} selected={align == orientation.horizontal}>
                    { align.label() }
                </option>
            }
        })
        .collect::<Html>();

    html! {
        <div class="orientation-controls">
            <div class="orientation-group">
                <label class="orientation-label">{"Text Position"}</label>
                <select
                    class="orientation-select"
                    onchange={link.batch_callback(|e: Event| {
                        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                        VerticalMode::from_value(&value).map(Msg::SetVerticalMode)
                    })}
                >
                    { vertical_options }
                </select>
            </div>
            <div class="orientation-group">
                <label class="orientation-label">{"Text Alignment"}</label>
                <select
                    class="orientation-select"
                    onchange={link.batch_callback(|e: Event| {
                        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                        HorizontalAlign::from_value(&value).map(Msg::SetHorizontalAlign)
                    })}
                >
                    { horizontal_options }
                </select>
            </div>
        </div>
    }
}

fn build_drag_toggle(component: &MemeEditorComponent, link: &Scope<MemeEditorComponent>) -> Html {
    let drag_mode = component.session.drag_mode;

    html! {
        <div class="drag-mode-toggle">
            <button
                class={classes!("drag-toggle-button", drag_mode.then_some("active"))}
                onclick={link.callback(|_| Msg::ToggleDragMode)}
            >
                { drag_button_label(drag_mode) }
            </button>
            <p class="drag-instruction">{ drag_instruction(drag_mode) }</p>
        </div>
    }
}

fn build_buttons(link: &Scope<MemeEditorComponent>) -> Html {
    html! {
        <div class="button-group">
            <button class="form-button primary" onclick={link.callback(|_| Msg::NewImage)}>
                {"Get a new meme image 🖼️"}
            </button>
            <button class="form-button secondary" onclick={link.callback(|_| Msg::Download)}>
                {"Download Meme 💾"}
            </button>
        </div>
    }
}

fn build_preview(component: &MemeEditorComponent, link: &Scope<MemeEditorComponent>) -> Html {
    let tracking = component.session.drag_mode && component.session.is_dragging();

    let onmousemove = link.batch_callback(move |e: MouseEvent| {
        tracking.then(|| Msg::ContinueDrag {
            client_x: f64::from(e.client_x()),
            client_y: f64::from(e.client_y()),
        })
    });
    let ontouchmove = link.batch_callback(move |e: TouchEvent| {
        if !tracking {
            return None;
        }
        e.touches().get(0).map(|touch| Msg::ContinueDrag {
            client_x: f64::from(touch.client_x()),
            client_y: f64::from(touch.client_y()),
        })
    });

    html! {
        <div
            class="meme"
            ref={component.container_ref.clone()}
            {onmousemove}
            onmouseup={link.callback(|_: MouseEvent| Msg::EndDrag)}
            onmouseleave={link.callback(|_: MouseEvent| Msg::EndDrag)}
            {ontouchmove}
            ontouchend={link.callback(|_: TouchEvent| Msg::EndDrag)}
        >
            <img
                ref={component.image_ref.clone()}
                src={component.session.active_image.clone()}
                class="meme-image"
                alt="Meme template"
                crossorigin="anonymous"
            />
            { build_caption(component, link, CaptionSlot::Top) }
            { build_caption(component, link, CaptionSlot::Bottom) }
        </div>
    }
}

fn build_caption(
    component: &MemeEditorComponent,
    link: &Scope<MemeEditorComponent>,
    slot: CaptionSlot,
) -> Html {
    let session = &component.session;
    let caption = session.caption(slot);
    let drag_mode = session.drag_mode;

    let onmousedown = link.batch_callback(move |e: MouseEvent| {
        if !drag_mode {
            return None;
        }
        e.prevent_default();
        Some(Msg::BeginDrag(slot))
    });
    let ontouchstart = link.batch_callback(move |e: TouchEvent| {
        if !drag_mode {
            return None;
        }
        e.prevent_default();
        Some(Msg::BeginDrag(slot))
    });

    html! {
        <h2
            ref={component.caption_ref(slot).clone()}
            class={classes!(
                "meme-text",
                "draggable",
                drag_mode.then_some("drag-enabled"),
                caption.dragging.then_some("dragging")
            )}
            style={caption_style(caption.position, session.orientation.horizontal)}
            {onmousedown}
            {ontouchstart}
        >
            { caption.text.clone() }
        </h2>
    }
}
