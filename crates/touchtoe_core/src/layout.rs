//! Screen geometry: where the grid, buttons and labels live.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::geometry::{Point, Rect};
use crate::input::{RegionTable, Target};
use crate::position::Position;

/// Errors found while validating a [`Layout`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum LayoutError {
    /// The grid cells have no area.
    #[display("Grid cell size must be non-zero")]
    EmptyCell,

    /// A region reaches past the screen edge.
    #[display("Region {} does not fit on a {}x{} screen", region, width, height)]
    OffScreen {
        /// Offending region.
        region: String,
        /// Screen width.
        width: u16,
        /// Screen height.
        height: u16,
    },

    /// Two regions that are active at the same time overlap.
    #[display("Regions {} and {} overlap", first, second)]
    Overlap {
        /// First region in table order.
        first: String,
        /// Second region in table order.
        second: String,
    },
}

/// Screen geometry in device pixels.
///
/// Grid cells are `cell_size` square and separated by `2 * cell_gap`; the
/// grid lines run through the middle of each gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Screen width.
    pub width: u16,
    /// Screen height.
    pub height: u16,
    /// Top-left corner of the top-left cell.
    pub grid_origin: Point,
    /// Side length of a cell.
    pub cell_size: u16,
    /// Half the spacing between neighbouring cells.
    pub cell_gap: u16,
    /// Back button, shown while playing and after a round.
    pub back_button: Rect,
    /// Replay button, shown after a round.
    pub replay_button: Rect,
    /// Menu button starting a two-player round.
    pub two_player_button: Rect,
    /// Menu button starting a round where the engine plays Cross.
    pub ai_first_button: Rect,
    /// Menu button starting a round where the engine plays Nought.
    pub ai_second_button: Rect,
    /// Where the whose-turn label is printed.
    pub status_anchor: Point,
    /// Where the round result is printed.
    pub banner_anchor: Point,
    /// Text scale factor.
    pub text_scale: u8,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 240,
            height: 320,
            grid_origin: Point::new(10, 90),
            cell_size: 60,
            cell_gap: 10,
            back_button: Rect::new(10, 10, 70, 40),
            replay_button: Rect::new(160, 10, 70, 70),
            two_player_button: Rect::new(40, 40, 160, 100),
            ai_first_button: Rect::new(40, 180, 70, 100),
            ai_second_button: Rect::new(130, 180, 70, 100),
            status_anchor: Point::new(90, 22),
            banner_anchor: Point::new(90, 52),
            text_scale: 2,
        }
    }
}

impl Layout {
    /// Distance between the origins of neighbouring cells.
    pub fn cell_pitch(&self) -> u16 {
        self.cell_size.saturating_add(self.cell_gap.saturating_mul(2))
    }

    /// Side length of the whole grid, outer gaps included.
    pub fn grid_extent(&self) -> u16 {
        self.cell_size
            .saturating_mul(3)
            .saturating_add(self.cell_gap.saturating_mul(4))
    }

    /// Rectangle of a single cell.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        let pitch = self.cell_pitch();
        Rect::new(
            self.grid_origin
                .x
                .saturating_add(pitch.saturating_mul(pos.col() as u16)),
            self.grid_origin
                .y
                .saturating_add(pitch.saturating_mul(pos.row() as u16)),
            self.cell_size,
            self.cell_size,
        )
    }

    /// Offsets of the two inner grid lines, measured from the grid origin.
    pub fn grid_line_offsets(&self) -> [u16; 2] {
        let first = self.cell_size.saturating_add(self.cell_gap);
        [first, first.saturating_add(self.cell_pitch())]
    }

    /// Checks that every region fits on screen and that regions active at
    /// the same time do not overlap.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.cell_size == 0 {
            return Err(LayoutError::EmptyCell);
        }

        let table = RegionTable::from_layout(self);
        for regions in [table.menu(), table.playing(), table.round_over()] {
            for (i, region) in regions.iter().enumerate() {
                if region.rect.right() >= u32::from(self.width)
                    || region.rect.bottom() >= u32::from(self.height)
                {
                    return Err(LayoutError::OffScreen {
                        region: region.target.to_string(),
                        width: self.width,
                        height: self.height,
                    });
                }
                if let Some(other) = regions[i + 1..]
                    .iter()
                    .find(|other| other.rect.intersects(&region.rect))
                {
                    return Err(LayoutError::Overlap {
                        first: region.target.to_string(),
                        second: other.target.to_string(),
                    });
                }
            }
        }

        debug!("Layout valid");
        Ok(())
    }

    /// Center of the first region bound to `target`.
    pub fn center_of(&self, target: Target) -> Option<Point> {
        let table = RegionTable::from_layout(self);
        [table.menu(), table.playing(), table.round_over()]
            .into_iter()
            .flatten()
            .find(|region| region.target == target)
            .map(|region| {
                Point::new(
                    region.rect.x + region.rect.dx / 2,
                    region.rect.y + region.rect.dy / 2,
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        assert_eq!(Layout::default().validate(), Ok(()));
    }

    #[test]
    fn test_cell_rects_follow_pitch() {
        let layout = Layout::default();
        assert_eq!(layout.cell_rect(Position::TopLeft), Rect::new(10, 90, 60, 60));
        assert_eq!(layout.cell_rect(Position::Center), Rect::new(90, 170, 60, 60));
        assert_eq!(layout.cell_rect(Position::BottomRight), Rect::new(170, 250, 60, 60));
        assert_eq!(layout.grid_line_offsets(), [70, 150]);
    }

    #[test]
    fn test_zero_gap_makes_cells_touch() {
        let layout = Layout {
            cell_gap: 0,
            ..Layout::default()
        };
        assert!(matches!(layout.validate(), Err(LayoutError::Overlap { .. })));
    }

    #[test]
    fn test_button_past_edge_rejected() {
        let layout = Layout {
            replay_button: Rect::new(200, 10, 70, 70),
            ..Layout::default()
        };
        assert!(matches!(layout.validate(), Err(LayoutError::OffScreen { .. })));
    }

    #[test]
    fn test_empty_cell_rejected() {
        let layout = Layout {
            cell_size: 0,
            ..Layout::default()
        };
        assert_eq!(layout.validate(), Err(LayoutError::EmptyCell));
    }
}
