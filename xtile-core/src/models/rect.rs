//! Screen rectangles in root-window coordinates.
use serde::{Deserialize, Serialize};

use super::Margins;

/// x,y from top left; `right()` and `bottom()` are exclusive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub const fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Whether both dimensions are at least `min`.
    pub const fn fits(&self, min: i32) -> bool {
        self.w >= min && self.h >= min
    }

    pub const fn overlaps(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub const fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    #[must_use]
    pub const fn shrink(&self, margins: Margins) -> Self {
        let (top, right, bottom, left) = (
            margins.top as i32,
            margins.right as i32,
            margins.bottom as i32,
            margins.left as i32,
        );
        Self {
            x: self.x + left,
            y: self.y + top,
            w: self.w - left - right,
            h: self.h - top - bottom,
        }
    }
}
