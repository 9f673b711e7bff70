//! Editor session: the single owned state of one meme editor instance.
//!
//! Every user interaction maps to one transition method on `MemeSession`.
//! Methods return `true` when observable state changed, which the UI layer
//! uses to decide whether to re-render.

pub mod drag;

use crate::model::caption::{Caption, CaptionSlot, Position};
use crate::model::orientation::{HorizontalAlign, Orientation, VerticalMode};
use crate::model::template::MemeTemplate;

use drag::ContainerRect;

#[derive(Debug, Clone, PartialEq)]
pub struct MemeSession {
    /// URL of the image currently shown behind the captions.
    pub active_image: String,
    /// Templates fetched at mount; empty until (and unless) the fetch succeeds.
    pub templates: Vec<MemeTemplate>,
    pub top: Caption,
    pub bottom: Caption,
    pub orientation: Orientation,
    /// Gates whether press/move events reposition captions.
    pub drag_mode: bool,
}

impl MemeSession {
    pub fn new(initial_image: impl Into<String>) -> Self {
        let orientation = Orientation::default();
        let (top, bottom) = orientation.vertical.default_positions();
        Self {
            active_image: initial_image.into(),
            templates: Vec::new(),
            top: Caption::at(top),
            bottom: Caption::at(bottom),
            orientation,
            drag_mode: false,
        }
    }

    pub fn caption(&self, slot: CaptionSlot) -> &Caption {
        match slot {
            CaptionSlot::Top => &self.top,
            CaptionSlot::Bottom => &self.bottom,
        }
    }

    fn caption_mut(&mut self, slot: CaptionSlot) -> &mut Caption {
        match slot {
            CaptionSlot::Top => &mut self.top,
            CaptionSlot::Bottom => &mut self.bottom,
        }
    }

    pub fn set_templates(&mut self, templates: Vec<MemeTemplate>) {
        self.templates = templates;
    }

    /// Activates the template at `floor(roll * len)`.
    ///
    /// `roll` is a uniform sample from `[0, 1)`. Out-of-range rolls are
    /// clamped onto the list. No-op on an empty list.
    pub fn select_random_template(&mut self, roll: f64) -> bool {
        let len = self.templates.len();
        if len == 0 {
            return false;
        }
        let roll = if roll.is_nan() { 0.0 } else { roll.clamp(0.0, 1.0) };
        let index = ((roll * len as f64) as usize).min(len - 1);
        let url = self.templates[index].url.clone();
        let changed = url != self.active_image;
        self.active_image = url;
        changed
    }

    pub fn set_text(&mut self, slot: CaptionSlot, text: String) -> bool {
        let caption = self.caption_mut(slot);
        if caption.text == text {
            return false;
        }
        caption.text = text;
        true
    }

    /// Switches the layout scheme; a real change resets both positions to the
    /// new mode's defaults.
    pub fn set_vertical_mode(&mut self, mode: VerticalMode) -> bool {
        if self.orientation.vertical == mode {
            return false;
        }
        self.orientation.vertical = mode;
        let (top, bottom) = mode.default_positions();
        self.top.position = top;
        self.bottom.position = bottom;
        true
    }

    pub fn set_horizontal_align(&mut self, align: HorizontalAlign) -> bool {
        if self.orientation.horizontal == align {
            return false;
        }
        self.orientation.horizontal = align;
        true
    }

    pub fn toggle_drag_mode(&mut self) {
        self.drag_mode = !self.drag_mode;
    }

    pub fn is_dragging(&self) -> bool {
        self.top.dragging || self.bottom.dragging
    }

    /// Press on a caption. Returns `true` when the press starts a drag, in
    /// which case the caller suppresses the browser's default handling.
    pub fn begin_drag(&mut self, slot: CaptionSlot) -> bool {
        if !self.drag_mode {
            return false;
        }
        self.caption_mut(slot).dragging = true;
        true
    }

    /// Pointer motion over the container.
    ///
    /// `rect` is `None` once the container is gone. When both captions are
    /// flagged the top caption wins.
    pub fn continue_drag(
        &mut self,
        client_x: f64,
        client_y: f64,
        rect: Option<ContainerRect>,
    ) -> bool {
        if !self.drag_mode || !self.is_dragging() {
            return false;
        }
        let Some(position) = rect.and_then(|rect| rect.percent_at(client_x, client_y)) else {
            return false;
        };

        let caption = if self.top.dragging {
            &mut self.top
        } else {
            &mut self.bottom
        };
        move_caption(caption, position)
    }

    /// Release or leave: clears both flags unconditionally.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.top.dragging = false;
        self.bottom.dragging = false;
        was_dragging
    }
}

fn move_caption(caption: &mut Caption, position: Position) -> bool {
    if caption.position == position {
        return false;
    }
    caption.position = position;
    true
}
