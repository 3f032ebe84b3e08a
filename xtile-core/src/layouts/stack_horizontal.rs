use super::{fitting, min_size, split, LayoutParams};
use crate::models::Rect;

/// Equal columns, left to right.
pub fn update(window_count: usize, usable: Rect, params: &LayoutParams) -> Vec<Rect> {
    let columns = window_count
        .min(params.max_windows)
        .min(fitting(usable.w, min_size(params)));
    if columns == 0 {
        return vec![];
    }
    split(usable.x, usable.w, columns)
        .map(|(x, w)| Rect::new(x, usable.y, w, usable.h))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_share_the_width() {
        let params = LayoutParams {
            max_windows: 3,
            master_fraction: 0.5,
            min_size: 100,
        };
        let rects = update(3, Rect::new(0, 0, 1000, 800), &params);
        assert_eq!(
            rects,
            vec![
                Rect::new(0, 0, 333, 800),
                Rect::new(333, 0, 333, 800),
                Rect::new(666, 0, 334, 800),
            ]
        );
    }
}
