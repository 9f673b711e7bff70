//! Component state for the meme editor.
//!
//! The session model (captions, orientation, drag flags, templates) lives in
//! `common::editor::MemeSession`; this struct pairs it with the DOM
//! references the drag and export code need to measure the preview.

use web_sys::Element;
use yew::prelude::*;

use common::editor::drag::ContainerRect;
use common::editor::MemeSession;
use common::model::caption::CaptionSlot;

pub struct MemeEditorComponent {
    /// Editor model mutated by `update`.
    pub session: MemeSession,

    /// The `.meme` preview container; drag percentages are relative to it.
    pub container_ref: NodeRef,

    /// The template `<img>` inside the container.
    pub image_ref: NodeRef,

    pub top_caption_ref: NodeRef,
    pub bottom_caption_ref: NodeRef,

    /// Guard to run the template fetch only once.
    pub loaded: bool,
}

impl MemeEditorComponent {
    pub fn new(initial_image: &str) -> Self {
        Self {
            session: MemeSession::new(initial_image),
            container_ref: Default::default(),
            image_ref: Default::default(),
            top_caption_ref: Default::default(),
            bottom_caption_ref: Default::default(),
            loaded: false,
        }
    }

    pub fn caption_ref(&self, slot: CaptionSlot) -> &NodeRef {
        match slot {
            CaptionSlot::Top => &self.top_caption_ref,
            CaptionSlot::Bottom => &self.bottom_caption_ref,
        }
    }

    /// Current bounding box of the preview container, or `None` when it is
    /// not mounted.
    pub fn container_rect(&self) -> Option<ContainerRect> {
        self.container_ref.cast::<Element>().map(|el| element_rect(&el))
    }
}

pub fn element_rect(element: &Element) -> ContainerRect {
    let rect = element.get_bounding_client_rect();
    ContainerRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}
