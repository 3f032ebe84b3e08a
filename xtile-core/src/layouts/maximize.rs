use crate::models::Rect;

/// The whole usable area, for the one window being shown.
pub fn update(usable: Rect) -> Vec<Rect> {
    vec![usable]
}
