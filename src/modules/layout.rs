use sheet::FrameSize;

/// Placement of the preview grid inside the window.
///
/// Columns come from `sprite_count / display_rows`. Sprites past
/// `display_rows * display_columns` have no cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub display_rows: usize,
    pub display_columns: usize,
    /// Top left corner of the first cell, can be negative when the grid is wider than the window
    pub origin: (i64, i64),
    /// Distance between two neighbouring cells
    pub step: (i64, i64),
}

impl GridLayout {
    pub fn new(
        sprite_count: usize,
        display_rows: usize,
        frame_size: FrameSize,
        spacing: u32,
        window_size: (u32, u32),
    ) -> Self {
        let display_rows = display_rows.max(1);
        let display_columns = sprite_count / display_rows;

        let width = frame_size.width() as i64;
        let height = frame_size.height() as i64;
        let spacing = spacing as i64;

        let span = |count: usize, side: i64| {
            let count = count as i64;

            if count == 0 {
                0
            } else {
                count * side + (count - 1) * spacing
            }
        };

        let total_width = span(display_columns, width);
        let total_height = span(display_rows, height);

        let origin = (
            (window_size.0 as i64).div_euclid(2) - total_width.div_euclid(2),
            (window_size.1 as i64).div_euclid(2) - total_height.div_euclid(2),
        );

        Self {
            display_rows,
            display_columns,
            origin,
            step: (width + spacing, height + spacing),
        }
    }

    pub fn visible_count(&self) -> usize {
        self.display_rows * self.display_columns
    }

    pub fn cell_position(&self, index: usize) -> Option<(i64, i64)> {
        if index >= self.visible_count() {
            return None;
        }

        let column = (index % self.display_columns) as i64;
        let row = (index / self.display_columns) as i64;

        Some((
            self.origin.0 + column * self.step.0,
            self.origin.1 + row * self.step.1,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_grid_is_centered() {
        // 32 sprites of 48x48 in 4 rows, 10px spacing, 600x300 window
        let layout = GridLayout::new(32, 4, FrameSize::new(48, 48), 10, (600, 300));

        assert_eq!(layout.display_columns, 8);
        // total 8 * 48 + 7 * 10 = 454, 4 * 48 + 3 * 10 = 222
        assert_eq!(layout.origin, (300 - 227, 150 - 111));
        assert_eq!(layout.cell_position(0), Some(layout.origin));
        assert_eq!(
            layout.cell_position(9),
            Some((layout.origin.0 + 58, layout.origin.1 + 58))
        );
    }

    #[test]
    fn trailing_sprites_have_no_cell() {
        let layout = GridLayout::new(10, 4, FrameSize::new(8, 8), 2, (100, 100));

        assert_eq!(layout.display_columns, 2);
        assert_eq!(layout.visible_count(), 8);
        assert!(layout.cell_position(7).is_some());
        assert!(layout.cell_position(8).is_none());
        assert!(layout.cell_position(9).is_none());
    }

    #[test]
    fn fewer_sprites_than_rows() {
        let layout = GridLayout::new(3, 4, FrameSize::new(8, 8), 2, (100, 100));

        assert_eq!(layout.visible_count(), 0);
        assert!(layout.cell_position(0).is_none());
    }

    #[test]
    fn oversized_grid_goes_negative() {
        let layout = GridLayout::new(32, 4, FrameSize::new(200, 48), 10, (600, 300));

        assert!(layout.origin.0 < 0);
    }
}
