//! Keeps docked neighbours attached when the user drags one edge of a tiled window.
use crate::models::{Rect, WindowHandle};

/// Tolerance when checking that the dragged window spanned a neighbour.
const EXTENT_SLACK: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Left,
    Upper,
    Right,
    Lower,
}

/// The single border that moved between `old` and `new`, if exactly one did.
pub fn moved_border(old: Rect, new: Rect) -> Option<Border> {
    let mut moved = [
        (old.x != new.x, Border::Left),
        (old.y != new.y, Border::Upper),
        (old.right() != new.right(), Border::Right),
        (old.bottom() != new.bottom(), Border::Lower),
    ]
    .into_iter()
    .filter_map(|(changed, border)| changed.then_some(border));
    match (moved.next(), moved.next()) {
        (Some(border), None) => Some(border),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SyncParams {
    pub usable: Rect,
    pub margin: i32,
    pub min_size: i32,
}

/// New geometries for the neighbours docked to `border` of a window resized from `old` to
/// `new`. Neighbours that would end up smaller than `min_size` are left alone.
pub fn compensate(
    border: Border,
    old: Rect,
    new: Rect,
    neighbours: &[(WindowHandle, Rect)],
    params: &SyncParams,
) -> Vec<(WindowHandle, Rect)> {
    let near = |a: i32, b: i32| (a - b).abs() <= params.margin;
    neighbours
        .iter()
        .filter_map(|&(handle, other)| {
            let resized = match border {
                Border::Left => (near(other.right(), old.x)
                    && spans_vertically(old, other, params.usable))
                .then(|| Rect {
                    w: new.x - other.x,
                    ..other
                }),
                Border::Right => (near(other.x, old.right())
                    && spans_vertically(old, other, params.usable))
                .then(|| Rect {
                    x: new.right(),
                    w: other.right() - new.right(),
                    ..other
                }),
                Border::Upper => (near(other.bottom(), old.y)
                    && spans_horizontally(old, other, params.usable))
                .then(|| Rect {
                    h: new.y - other.y,
                    ..other
                }),
                Border::Lower => (near(other.y, old.bottom())
                    && spans_horizontally(old, other, params.usable))
                .then(|| Rect {
                    y: new.bottom(),
                    h: other.bottom() - new.bottom(),
                    ..other
                }),
            }?;
            resized
                .fits(params.min_size)
                .then_some((handle, resized))
        })
        .collect()
}

fn spans_vertically(active: Rect, other: Rect, usable: Rect) -> bool {
    active.y <= other.y.max(usable.y) + EXTENT_SLACK
        && active.bottom() >= other.bottom().min(usable.bottom()) - EXTENT_SLACK
}

fn spans_horizontally(active: Rect, other: Rect, usable: Rect) -> bool {
    active.x <= other.x.max(usable.x) + EXTENT_SLACK
        && active.right() >= other.right().min(usable.right()) - EXTENT_SLACK
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASTER: Rect = Rect::new(0, 0, 960, 1080);
    const TOP: Rect = Rect::new(960, 0, 960, 540);
    const BOTTOM: Rect = Rect::new(960, 540, 960, 540);

    fn params() -> SyncParams {
        SyncParams {
            usable: Rect::new(0, 0, 1920, 1080),
            margin: 10,
            min_size: 350,
        }
    }

    fn neighbours() -> Vec<(WindowHandle, Rect)> {
        vec![
            (WindowHandle(1), MASTER),
            (WindowHandle(2), TOP),
            (WindowHandle(3), BOTTOM),
        ]
    }

    #[test]
    fn only_single_border_moves_count() {
        assert_eq!(
            moved_border(MASTER, Rect::new(0, 0, 900, 1080)),
            Some(Border::Right)
        );
        assert_eq!(
            moved_border(TOP, Rect::new(960, 0, 960, 600)),
            Some(Border::Lower)
        );
        assert_eq!(moved_border(MASTER, Rect::new(10, 0, 960, 1080)), None);
        assert_eq!(moved_border(MASTER, MASTER), None);
    }

    #[test]
    fn master_edge_drags_the_whole_stack() {
        let new = Rect::new(0, 0, 900, 1080);
        let others = &neighbours()[1..];
        let moved = compensate(Border::Right, MASTER, new, others, &params());
        assert_eq!(
            moved,
            vec![
                (WindowHandle(2), Rect::new(900, 0, 1020, 540)),
                (WindowHandle(3), Rect::new(900, 540, 1020, 540)),
            ]
        );
    }

    #[test]
    fn stack_edge_does_not_drag_a_taller_master() {
        let new = Rect::new(1000, 0, 920, 540);
        let others = [neighbours()[0], neighbours()[2]];
        assert!(compensate(Border::Left, TOP, new, &others, &params()).is_empty());
    }

    #[test]
    fn lower_edge_drags_the_window_below() {
        let new = Rect::new(960, 0, 960, 600);
        let others = [neighbours()[0], neighbours()[2]];
        let moved = compensate(Border::Lower, TOP, new, &others, &params());
        assert_eq!(moved, vec![(WindowHandle(3), Rect::new(960, 600, 960, 480))]);
    }

    #[test]
    fn neighbours_are_not_shrunk_below_min_size() {
        let new = Rect::new(960, 0, 960, 800);
        let others = [neighbours()[2]];
        assert!(compensate(Border::Lower, TOP, new, &others, &params()).is_empty());
    }
}
