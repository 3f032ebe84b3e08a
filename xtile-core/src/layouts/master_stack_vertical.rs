use super::{fitting, master_extent, min_size, split, LayoutParams};
use crate::models::Rect;

/// Master on the left, the rest stacked top to bottom on the right.
pub fn update(window_count: usize, usable: Rect, params: &LayoutParams) -> Vec<Rect> {
    let min = min_size(params);
    let count = window_count.min(params.max_windows);
    let stacked = count.saturating_sub(1).min(fitting(usable.h, min));
    if stacked == 0 || usable.w < 2 * min {
        return vec![usable];
    }

    let master_w = master_extent(usable.w, params.master_fraction, min);
    let stack_x = usable.x + master_w;
    let stack_w = usable.w - master_w;

    let mut rects = vec![Rect::new(usable.x, usable.y, master_w, usable.h)];
    let stack = split(usable.y, usable.h, stacked).map(|(y, h)| Rect::new(stack_x, y, stack_w, h));
    rects.extend(stack);
    rects
}
