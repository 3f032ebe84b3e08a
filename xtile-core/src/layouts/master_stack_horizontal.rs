use super::{fitting, master_extent, min_size, split, LayoutParams};
use crate::models::Rect;

/// Master across the top, the rest side by side below it.
pub fn update(window_count: usize, usable: Rect, params: &LayoutParams) -> Vec<Rect> {
    let min = min_size(params);
    let count = window_count.min(params.max_windows);
    let stacked = count.saturating_sub(1).min(fitting(usable.w, min));
    if stacked == 0 || usable.h < 2 * min {
        return vec![usable];
    }

    let master_h = master_extent(usable.h, params.master_fraction, min);
    let stack_y = usable.y + master_h;
    let stack_h = usable.h - master_h;

    let mut rects = vec![Rect::new(usable.x, usable.y, usable.w, master_h)];
    let stack = split(usable.x, usable.w, stacked).map(|(x, w)| Rect::new(x, stack_y, w, stack_h));
    rects.extend(stack);
    rects
}
