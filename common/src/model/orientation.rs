//! Caption layout schemes.
//!
//! `VerticalMode` decides where the captions start out; `HorizontalAlign` is
//! purely presentational. Both round-trip through the `<select>` option
//! values used by the view.

use serde::{Deserialize, Serialize};

use super::caption::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalMode {
    #[default]
    TopBottom,
    LeftRight,
}

impl VerticalMode {
    pub const ALL: [VerticalMode; 2] = [VerticalMode::TopBottom, VerticalMode::LeftRight];

    /// Default `(top, bottom)` caption positions for this mode.
    #[must_use]
    pub fn default_positions(self) -> (Position, Position) {
        match self {
            VerticalMode::TopBottom => (Position { x: 50.0, y: 10.0 }, Position { x: 50.0, y: 90.0 }),
            VerticalMode::LeftRight => (Position { x: 10.0, y: 50.0 }, Position { x: 90.0, y: 50.0 }),
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            VerticalMode::TopBottom => "top-bottom",
            VerticalMode::LeftRight => "left-right",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VerticalMode::TopBottom => "Top & Bottom",
            VerticalMode::LeftRight => "Left & Right Sides",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl HorizontalAlign {
    pub const ALL: [HorizontalAlign; 3] = [
        HorizontalAlign::Left,
        HorizontalAlign::Center,
        HorizontalAlign::Right,
    ];

    /// Also the CSS `text-align` and canvas `textAlign` keyword.
    pub fn value(self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HorizontalAlign::Left => "Left Aligned",
            HorizontalAlign::Center => "Center Aligned",
            HorizontalAlign::Right => "Right Aligned",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|align| align.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub vertical: VerticalMode,
    pub horizontal: HorizontalAlign,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_values_round_trip() {
        for mode in VerticalMode::ALL {
            assert_eq!(VerticalMode::from_value(mode.value()), Some(mode));
        }
        for align in HorizontalAlign::ALL {
            assert_eq!(HorizontalAlign::from_value(align.value()), Some(align));
        }
        assert_eq!(VerticalMode::from_value("diagonal"), None);
        assert_eq!(HorizontalAlign::from_value(""), None);
    }

    #[test]
    fn defaults_match_initial_layout() {
        let orientation = Orientation::default();
        assert_eq!(orientation.vertical, VerticalMode::TopBottom);
        assert_eq!(orientation.horizontal, HorizontalAlign::Center);
    }

    #[test]
    fn default_positions_per_mode() {
        let (top, bottom) = VerticalMode::TopBottom.default_positions();
        assert_eq!((top.x, top.y, bottom.x, bottom.y), (50.0, 10.0, 50.0, 90.0));

        let (left, right) = VerticalMode::LeftRight.default_positions();
        assert_eq!((left.x, left.y, right.x, right.y), (10.0, 50.0, 90.0, 50.0));
    }
}
