use super::{fitting, min_size, split, LayoutParams};
use crate::models::Rect;

/// Equal rows, top to bottom.
pub fn update(window_count: usize, usable: Rect, params: &LayoutParams) -> Vec<Rect> {
    let rows = window_count
        .min(params.max_windows)
        .min(fitting(usable.h, min_size(params)));
    if rows == 0 {
        return vec![];
    }
    split(usable.y, usable.h, rows)
        .map(|(y, h)| Rect::new(usable.x, y, usable.w, h))
        .collect()
}
