//! Staggered "brick" placement for the testimonial wall.

/// Grid of equally sized cards where one column sits half a row lower.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrickLayout {
    pub columns: usize,
    pub card_width: f64,
    pub card_height: f64,
    pub gap: f64,
    /// Column shifted down by half a row pitch. `None` disables the stagger.
    pub offset_column: Option<usize>,
    /// Upward scroll speed of the leftmost column, px per second.
    pub base_speed: f64,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            columns: 3,
            card_width: 300.0,
            card_height: 280.0,
            gap: 20.0,
            offset_column: Some(1),
            base_speed: 24.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrickSlot {
    pub column: usize,
    pub row: usize,
    pub x: f64,
    pub y: f64,
}

impl BrickLayout {
    /// Vertical distance between the tops of consecutive rows.
    pub fn pitch(&self) -> f64 {
        self.card_height + self.gap
    }

    pub fn grid_width(&self) -> f64 {
        let columns = self.columns as f64;
        columns * self.card_width + (columns - 1.0).max(0.0) * self.gap
    }

    pub fn stagger(&self, column: usize) -> f64 {
        if self.offset_column == Some(column) {
            self.pitch() / 2.0
        } else {
            0.0
        }
    }

    /// Resting position of item `index`, with the grid centred in the container.
    pub fn place(&self, index: usize, container_width: f64) -> BrickSlot {
        let columns = self.columns.max(1);
        let column = index % columns;
        let row = index / columns;
        let start_x = (container_width - self.grid_width()) / 2.0;

        BrickSlot {
            column,
            row,
            x: start_x + column as f64 * (self.card_width + self.gap),
            y: row as f64 * self.pitch() + self.stagger(column),
        }
    }

    /// Height of the full wall for `count` items, which is also the
    /// recycling period of [`BrickLayout::scrolled_y`].
    pub fn content_height(&self, count: usize) -> f64 {
        let columns = self.columns.max(1);
        count.div_ceil(columns) as f64 * self.pitch()
    }

    /// Position of `slot` after travelling `travelled` pixels upward.
    ///
    /// A card is recycled below the last row of its column once it sits a
    /// whole card height above that column's resting top. With no travel
    /// every card stays where [`BrickLayout::place`] put it.
    pub fn scrolled_y(&self, slot: BrickSlot, travelled: f64, content_height: f64) -> f64 {
        if content_height <= 0.0 {
            return slot.y;
        }
        let top = self.stagger(slot.column) - self.card_height;
        (slot.y - travelled - top).rem_euclid(content_height) + top
    }

    pub fn column_speed(&self, column: usize) -> f64 {
        self.base_speed * 20.0 / (20.0 + 2.0 * column as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_maps_to_column_and_row() {
        let layout = BrickLayout::default();
        for index in 0..30 {
            let slot = layout.place(index, 1000.0);
            assert_eq!(slot.column, index % 3);
            assert_eq!(slot.row, index / 3);
        }
    }

    #[test]
    fn only_middle_column_is_staggered() {
        let layout = BrickLayout::default();
        let half = (280.0 + 20.0) / 2.0;
        for index in 0..12 {
            let slot = layout.place(index, 1000.0);
            let plain = slot.row as f64 * 300.0;
            match slot.column {
                1 => assert_eq!(slot.y, plain + half),
                _ => assert_eq!(slot.y, plain),
            }
        }
    }

    #[test]
    fn grid_is_centred() {
        let layout = BrickLayout::default();
        assert_eq!(layout.grid_width(), 940.0);
        assert_eq!(layout.place(0, 1140.0).x, 100.0);
        assert_eq!(layout.place(2, 1140.0).x, 100.0 + 2.0 * 320.0);
    }

    #[test]
    fn content_height_rounds_rows_up() {
        let layout = BrickLayout::default();
        assert_eq!(layout.content_height(27), 9.0 * 300.0);
        assert_eq!(layout.content_height(28), 10.0 * 300.0);
        assert_eq!(layout.content_height(0), 0.0);
    }

    #[test]
    fn scrolling_wraps_after_one_content_height() {
        let layout = BrickLayout::default();
        let total = layout.content_height(27);
        let slot = layout.place(4, 1000.0);

        assert_eq!(layout.scrolled_y(slot, 0.0, total), slot.y);
        assert_eq!(layout.scrolled_y(slot, 100.0, total), slot.y - 100.0);
        assert!((layout.scrolled_y(slot, total, total) - slot.y).abs() < 1e-9);
    }

    #[test]
    fn cards_recycle_once_fully_above_the_top() {
        let layout = BrickLayout::default();
        let total = layout.content_height(27);
        let slot = layout.place(3, 1000.0);

        // bottom edge touching the top: still in place
        let touching = slot.y + layout.card_height;
        assert_eq!(layout.scrolled_y(slot, touching, total), -layout.card_height);

        // one pixel further it moves below the last row
        let recycled = layout.scrolled_y(slot, touching + 1.0, total);
        assert_eq!(recycled, total - layout.card_height - 1.0);
        assert!(recycled > layout.place(24, 1000.0).y);
    }

    #[test]
    fn resting_cards_stay_put_without_travel() {
        let layout = BrickLayout::default();
        let total = layout.content_height(27);
        for index in 0..27 {
            let slot = layout.place(index, 1000.0);
            assert_eq!(layout.scrolled_y(slot, 0.0, total), slot.y, "index {}", index);
        }
    }

    #[test]
    fn staggered_column_keeps_its_offset_while_scrolling() {
        let layout = BrickLayout::default();
        let total = layout.content_height(27);
        let travelled = 1234.0;
        for row in 0..9 {
            let plain = layout.scrolled_y(layout.place(row * 3, 1000.0), travelled, total);
            let shifted = layout.scrolled_y(layout.place(row * 3 + 1, 1000.0), travelled, total);
            let gap = (shifted - plain).rem_euclid(total);
            assert_eq!(gap, layout.stagger(1));
        }
    }

    #[test]
    fn columns_move_at_slightly_different_speeds() {
        let layout = BrickLayout::default();
        assert_eq!(layout.column_speed(0), 24.0);
        assert!(layout.column_speed(1) < layout.column_speed(0));
        assert!(layout.column_speed(2) < layout.column_speed(1));
    }
}
