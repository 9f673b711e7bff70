//! Caption overlay model: which caption, where it sits, and what it says.

use serde::{Deserialize, Serialize};

/// Identifies one of the two captions.
///
/// Under the left-right orientation `Top` is rendered as the left side text
/// and `Bottom` as the right side text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptionSlot {
    Top,
    Bottom,
}

/// A position in percent of the image container, both axes in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Builds a position, clamping each axis into the container.
    ///
    /// NaN collapses to `MIN` so a degenerate measurement can never escape
    /// the bounds.
    #[must_use]
    pub fn clamped(x: f64, y: f64) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    #[must_use]
    pub fn in_bounds(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.x) && (Self::MIN..=Self::MAX).contains(&self.y)
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return Position::MIN;
    }
    value.clamp(Position::MIN, Position::MAX)
}

/// One overlay text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub text: String,
    pub position: Position,
    /// True between a press on this caption and the next release/leave.
    pub dragging: bool,
}

impl Caption {
    pub fn at(position: Position) -> Self {
        Self {
            text: String::new(),
            position,
            dragging: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_keeps_values_inside_range() {
        assert_eq!(Position::clamped(120.0, -5.0), Position { x: 100.0, y: 0.0 });
        assert_eq!(Position::clamped(33.3, 66.6), Position { x: 33.3, y: 66.6 });
    }

    #[test]
    fn clamped_handles_non_finite_input() {
        let pos = Position::clamped(f64::NAN, f64::INFINITY);
        assert_eq!(pos, Position { x: 0.0, y: 100.0 });
        assert!(pos.in_bounds());

        let pos = Position::clamped(f64::NEG_INFINITY, f64::NAN);
        assert_eq!(pos, Position { x: 0.0, y: 0.0 });
    }

    #[test]
    fn new_caption_is_empty_and_idle() {
        let caption = Caption::at(Position { x: 50.0, y: 10.0 });
        assert!(caption.text.is_empty());
        assert!(!caption.dragging);
    }
}
