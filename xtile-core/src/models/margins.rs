use serde::{Deserialize, Serialize};

use super::Rect;

/// Space taken away from each side of a rectangle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    /// Computes the strips of `screen` occupied by windows docked at its edges.
    ///
    /// A window counts as docked on a side when its outer edge lies within `margin` of that
    /// screen edge, it spans the whole edge (again within `margin`) and it is thinner than half
    /// the screen in that direction.
    pub fn docked(screen: Rect, windows: impl IntoIterator<Item = Rect>, margin: i32) -> Self {
        let mut margins = Self::default();
        let near = |a: i32, b: i32| (a - b).abs() <= margin;
        for r in windows {
            let spans_height = r.y <= screen.y + margin && r.bottom() >= screen.bottom() - margin;
            let spans_width = r.x <= screen.x + margin && r.right() >= screen.right() - margin;
            if spans_height && r.w < screen.w / 2 {
                if near(r.x, screen.x) {
                    margins.left = margins.left.max(thickness(r.right() - screen.x));
                } else if near(r.right(), screen.right()) {
                    margins.right = margins.right.max(thickness(screen.right() - r.x));
                }
            }
            if spans_width && r.h < screen.h / 2 {
                if near(r.y, screen.y) {
                    margins.top = margins.top.max(thickness(r.bottom() - screen.y));
                } else if near(r.bottom(), screen.bottom()) {
                    margins.bottom = margins.bottom.max(thickness(screen.bottom() - r.y));
                }
            }
        }
        margins
    }
}

fn thickness(value: i32) -> u32 {
    value.max(0) as u32
}
