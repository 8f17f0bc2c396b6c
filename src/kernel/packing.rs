//! Greedy shortest-column packing.
//!
//! Cards are visited once, in input order. Each goes to the column whose
//! running height is smallest; on a tie the leftmost column wins. Layout
//! snapshots depend on that tie-break, so keep the strict `<` scan.

use crate::core::Position;

/// Where one card lands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPlacement {
    pub column: usize,
    pub top: f64,
    pub left: f64,
}

impl CardPlacement {
    pub fn position(&self) -> Position {
        Position::new(self.top, self.left)
    }
}

/// Result of one packing pass.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    /// Column width including its share of the horizontal gutter.
    pub outer_width: f64,
    /// Width given to every card. Negative when the gutter is wider than a
    /// column; callers that allow that get what they asked for.
    pub inner_width: f64,
    pub placements: Vec<CardPlacement>,
    column_heights: Vec<f64>,
    gutter_height: f64,
}

impl GridLayout {
    pub fn columns(&self) -> usize {
        self.column_heights.len()
    }

    /// Running height of each column after the last card, trailing gutter
    /// included.
    pub fn column_heights(&self) -> &[f64] {
        &self.column_heights
    }

    /// Height of the tallest column without its trailing gutter.
    pub fn content_height(&self) -> f64 {
        if self.placements.is_empty() {
            return 0.0;
        }
        let tallest = self.column_heights.iter().copied().fold(0.0, f64::max);
        (tallest - self.gutter_height).max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Packs `card_heights` into `columns` columns of a `container_width` wide
/// container.
pub fn pack(
    card_heights: &[f64],
    columns: u32,
    container_width: f64,
    gutter_width: f64,
    gutter_height: f64,
) -> GridLayout {
    debug_assert!(columns >= 1, "packing needs at least one column");
    let columns = columns.max(1) as usize;

    let outer_width = container_width / columns as f64;
    let inner_width = outer_width - gutter_width;
    let mut heights = vec![0.0; columns];
    let mut placements = Vec::with_capacity(card_heights.len());

    for &card_height in card_heights {
        let column = index_of_min(&heights);
        placements.push(CardPlacement {
            column,
            top: heights[column],
            left: column as f64 * outer_width + gutter_width / 2.0,
        });
        heights[column] += card_height + gutter_height;
    }

    GridLayout {
        outer_width,
        inner_width,
        placements,
        column_heights: heights,
        gutter_height,
    }
}

fn index_of_min(heights: &[f64]) -> usize {
    let mut min_index = 0;
    for (i, &h) in heights.iter().enumerate().skip(1) {
        if h < heights[min_index] {
            min_index = i;
        }
    }
    min_index
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/packing.rs"]
mod tests;
