//! Board geometry: where each square lands on screen.
//!
//! The same geometry is used to draw squares and to hit-test mouse events,
//! so a click always lands on the square that was drawn there.

use ratatui::layout::Rect;
use strictly_chess::{BoardConfig, Orientation, Square};
use tracing::instrument;

/// Board widths in the config are in pixels; one terminal column counts as this many.
const PIXELS_PER_COLUMN: u32 = 8;

/// Columns reserved left of the board for rank labels.
pub const RANK_GUTTER: u16 = 2;

/// Rows reserved below the board for file labels.
pub const FILE_GUTTER: u16 = 1;

const MIN_SQUARE_WIDTH: u16 = 3;
const MAX_SQUARE_WIDTH: u16 = 9;

/// Screen placement of the 64 squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    x: u16,
    y: u16,
    square_width: u16,
    square_height: u16,
    orientation: Orientation,
}

impl BoardGeometry {
    /// Fits the board into `area`, sized by the config's responsive width.
    #[instrument(skip(config))]
    pub fn fit(area: Rect, config: &BoardConfig, orientation: Orientation) -> Self {
        let viewport = u32::from(area.width) * PIXELS_PER_COLUMN;
        let wanted_columns = config.responsive_width(viewport) / PIXELS_PER_COLUMN;
        let wanted = u16::try_from(wanted_columns / 8)
            .unwrap_or(MAX_SQUARE_WIDTH)
            .clamp(MIN_SQUARE_WIDTH, MAX_SQUARE_WIDTH);

        let available_width = area.width.saturating_sub(RANK_GUTTER) / 8;
        let available_height = area.height.saturating_sub(FILE_GUTTER) / 8;

        let square_width = wanted.min(available_width).max(1);
        let square_height = (square_width / 2).clamp(1, available_height.max(1));

        Self {
            x: area.x + RANK_GUTTER,
            y: area.y,
            square_width,
            square_height,
            orientation,
        }
    }

    /// Area covered by the 8x8 squares (labels excluded).
    pub fn area(&self) -> Rect {
        Rect::new(self.x, self.y, self.square_width * 8, self.square_height * 8)
    }

    /// Width of one square in columns.
    pub fn square_width(&self) -> u16 {
        self.square_width
    }

    /// Height of one square in rows.
    pub fn square_height(&self) -> u16 {
        self.square_height
    }

    /// Side drawn at the bottom.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Screen rectangle of `square`.
    pub fn square_rect(&self, square: Square) -> Rect {
        let (column, row) = to_display(square, self.orientation);
        Rect::new(
            self.x + u16::from(column) * self.square_width,
            self.y + u16::from(row) * self.square_height,
            self.square_width,
            self.square_height,
        )
    }

    /// Square under the terminal cell `(column, row)`, if any.
    pub fn square_at(&self, column: u16, row: u16) -> Option<Square> {
        let area = self.area();
        if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
            return None;
        }
        let display_column = u8::try_from((column - area.x) / self.square_width).ok()?;
        let display_row = u8::try_from((row - area.y) / self.square_height).ok()?;
        from_display(display_column, display_row, self.orientation)
    }
}

/// Display coordinates (column, row from the top-left) of `square`.
pub fn to_display(square: Square, orientation: Orientation) -> (u8, u8) {
    match orientation {
        Orientation::White => (square.file(), 7 - square.rank()),
        Orientation::Black => (7 - square.file(), square.rank()),
    }
}

/// Square at display coordinates, if they are on the board.
pub fn from_display(column: u8, row: u8, orientation: Orientation) -> Option<Square> {
    if column > 7 || row > 7 {
        return None;
    }
    match orientation {
        Orientation::White => Square::new(column, 7 - row),
        Orientation::Black => Square::new(7 - column, row),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_display_corners() {
        assert_eq!(to_display(sq("a8"), Orientation::White), (0, 0));
        assert_eq!(to_display(sq("h1"), Orientation::White), (7, 7));
        assert_eq!(to_display(sq("h1"), Orientation::Black), (0, 0));
        assert_eq!(to_display(sq("a8"), Orientation::Black), (7, 7));
    }

    #[test]
    fn test_hit_testing_matches_drawing() {
        let area = Rect::new(0, 0, 100, 40);
        for orientation in [Orientation::White, Orientation::Black] {
            let geometry = BoardGeometry::fit(area, &BoardConfig::default(), orientation);
            for square in Square::all() {
                let rect = geometry.square_rect(square);
                assert_eq!(geometry.square_at(rect.x, rect.y), Some(square));
                assert_eq!(
                    geometry.square_at(rect.right() - 1, rect.bottom() - 1),
                    Some(square)
                );
            }
        }
    }

    #[test]
    fn test_clicks_outside_board_miss() {
        let geometry =
            BoardGeometry::fit(Rect::new(0, 0, 100, 40), &BoardConfig::default(), Orientation::White);
        let area = geometry.area();
        assert_eq!(geometry.square_at(0, 0), None);
        assert_eq!(geometry.square_at(area.right(), area.y), None);
        assert_eq!(geometry.square_at(area.x, area.bottom()), None);
    }

    #[test]
    fn test_fit_respects_config_and_space() {
        let config = BoardConfig::default();
        // 100 columns: 800px - 40 margin clamps to 500px, i.e. 62 columns.
        let wide = BoardGeometry::fit(Rect::new(0, 0, 100, 40), &config, Orientation::White);
        assert_eq!(wide.square_width(), 7);
        assert_eq!(wide.square_height(), 3);

        let short = BoardGeometry::fit(Rect::new(0, 0, 100, 17), &config, Orientation::White);
        assert_eq!(short.square_height(), 2);
        assert!(short.area().height <= 16);
    }
}
