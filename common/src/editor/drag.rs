//! Pointer-to-caption geometry for drag interaction.

use crate::model::caption::Position;

/// Bounding box of the image container in viewport (client) pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    /// Maps a pointer in client coordinates to a clamped percent position.
    ///
    /// Returns `None` for a collapsed container, where no meaningful
    /// percentage exists.
    #[must_use]
    pub fn percent_at(&self, client_x: f64, client_y: f64) -> Option<Position> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        let x = (client_x - self.left) / self.width * 100.0;
        let y = (client_y - self.top) / self.height * 100.0;
        Some(Position::clamped(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: ContainerRect = ContainerRect {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 200.0,
    };

    #[test]
    fn maps_pointer_inside_container() {
        assert_eq!(RECT.percent_at(300.0, 150.0), Some(Position { x: 50.0, y: 50.0 }));
        assert_eq!(RECT.percent_at(100.0, 50.0), Some(Position { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn clamps_pointer_outside_container() {
        // 120% of the width, above the top edge.
        let pos = RECT.percent_at(100.0 + 480.0, 0.0).unwrap();
        assert_eq!(pos, Position { x: 100.0, y: 0.0 });
    }

    #[test]
    fn collapsed_container_has_no_mapping() {
        let rect = ContainerRect { width: 0.0, ..RECT };
        assert_eq!(rect.percent_at(10.0, 10.0), None);

        let rect = ContainerRect { height: f64::NAN, ..RECT };
        assert_eq!(rect.percent_at(10.0, 10.0), None);
    }
}
