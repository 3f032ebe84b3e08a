//! Layout algorithms. Each one maps a window count onto geometries inside a usable rectangle.
//!
//! Windows past `max_windows`, or past what fits at `min_size`, get no geometry. Division is
//! floored and the last window of every run takes the remainder.
mod master_stack_horizontal;
mod master_stack_vertical;
mod maximize;
mod stack_horizontal;
mod stack_vertical;

use crate::models::{Rect, TilerKind, WindowHandle, WindowInfo};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub max_windows: usize,
    pub master_fraction: f32,
    pub min_size: i32,
}

/// Geometries for the first `window_count` windows, in tiling order.
pub fn layout(
    kind: TilerKind,
    window_count: usize,
    usable: Rect,
    params: &LayoutParams,
) -> Vec<Rect> {
    if window_count == 0 || !usable.fits(min_size(params)) {
        return vec![];
    }
    match kind {
        TilerKind::MasterStackVertical => {
            master_stack_vertical::update(window_count, usable, params)
        }
        TilerKind::MasterStackHorizontal => {
            master_stack_horizontal::update(window_count, usable, params)
        }
        TilerKind::StackHorizontal => stack_horizontal::update(window_count, usable, params),
        TilerKind::StackVertical => stack_vertical::update(window_count, usable, params),
        TilerKind::Maximize => maximize::update(usable),
    }
}

/// Sorts windows into tiling order by their position along the tiler's axis, so manual
/// rearrangements survive a re-tile. Ties keep the oldest window first.
///
/// Master tilers pick the leading window as master and order the rest along the stack. The
/// maximize tiler puts `focused` first.
pub fn tiling_order(kind: TilerKind, windows: &mut [WindowInfo], focused: Option<WindowHandle>) {
    let by_x = |a: &WindowInfo, b: &WindowInfo| {
        (a.geometry.x, a.insertion_order).cmp(&(b.geometry.x, b.insertion_order))
    };
    let by_y = |a: &WindowInfo, b: &WindowInfo| {
        (a.geometry.y, a.insertion_order).cmp(&(b.geometry.y, b.insertion_order))
    };
    match kind {
        TilerKind::MasterStackVertical => {
            windows.sort_by(by_x);
            if let Some((_, stack)) = windows.split_first_mut() {
                stack.sort_by(by_y);
            }
        }
        TilerKind::MasterStackHorizontal => {
            windows.sort_by(by_y);
            if let Some((_, stack)) = windows.split_first_mut() {
                stack.sort_by(by_x);
            }
        }
        TilerKind::StackHorizontal => windows.sort_by(by_x),
        TilerKind::StackVertical => windows.sort_by(by_y),
        TilerKind::Maximize => {
            windows.sort_by_key(|w| w.insertion_order);
            if let Some(index) = windows.iter().position(|w| Some(w.handle) == focused) {
                windows[..=index].rotate_right(1);
            }
        }
    }
}

fn min_size(params: &LayoutParams) -> i32 {
    params.min_size.max(1)
}

/// How many runs of at least `min_size` fit into `extent`.
fn fitting(extent: i32, min_size: i32) -> usize {
    (extent / min_size).max(0) as usize
}

/// Cuts `extent` pixels starting at `start` into `parts` runs of `(offset, length)`.
fn split(start: i32, extent: i32, parts: usize) -> impl Iterator<Item = (i32, i32)> {
    let parts = parts.max(1);
    let size = extent / parts as i32;
    (0..parts).map(move |i| {
        let offset = size * i as i32;
        let length = if i + 1 == parts { extent - offset } else { size };
        (start + offset, length)
    })
}

/// Size of the master region, keeping both regions at least `min_size`.
fn master_extent(extent: i32, fraction: f32, min_size: i32) -> i32 {
    let wanted = (extent as f32 * fraction).round() as i32;
    wanted.clamp(min_size, extent - min_size)
}
