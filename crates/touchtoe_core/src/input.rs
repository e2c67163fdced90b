//! Input mapper: turns a touch coordinate into a UI target.
//!
//! Regions are plain data. The controller picks the table that matches its
//! state and asks [`hit_test`] which target, if any, was touched.

use derive_getters::Getters;
use tracing::{instrument, trace};

use crate::controller::UiState;
use crate::geometry::{Point, Rect};
use crate::layout::Layout;
use crate::position::Position;

/// What a touch region stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Target {
    /// Menu: both sides are human.
    #[strum(to_string = "two-player button")]
    TwoPlayer,
    /// Menu: the engine plays Cross and moves first.
    #[strum(to_string = "AI-first button")]
    AiFirst,
    /// Menu: the engine plays Nought and moves second.
    #[strum(to_string = "AI-second button")]
    AiSecond,
    /// A grid cell.
    #[strum(to_string = "{0} cell")]
    Cell(Position),
    /// Abandon the round and go back to the menu.
    #[strum(to_string = "back button")]
    Back,
    /// Start another round with the same roles.
    #[strum(to_string = "replay button")]
    Replay,
}

/// A rectangle bound to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Touch-sensitive area, borders included.
    pub rect: Rect,
    /// What touching the area means.
    pub target: Target,
}

impl Region {
    /// Binds `rect` to `target`.
    pub fn new(rect: Rect, target: Target) -> Self {
        Self { rect, target }
    }
}

/// Returns the target of the first region containing `point`.
#[instrument(level = "trace", skip(regions))]
pub fn hit_test(point: Point, regions: &[Region]) -> Option<Target> {
    let hit = regions
        .iter()
        .find(|region| region.rect.contains(point))
        .map(|region| region.target);
    trace!(?hit, "Hit test");
    hit
}

/// The three region tables, one per UI state.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RegionTable {
    /// Menu buttons.
    menu: Vec<Region>,
    /// Back button followed by the nine cells in row-major order.
    playing: Vec<Region>,
    /// Back button followed by the replay button.
    round_over: Vec<Region>,
}

impl RegionTable {
    /// Derives all tables from the layout.
    pub fn from_layout(layout: &Layout) -> Self {
        let menu = vec![
            Region::new(layout.ai_first_button, Target::AiFirst),
            Region::new(layout.ai_second_button, Target::AiSecond),
            Region::new(layout.two_player_button, Target::TwoPlayer),
        ];

        let playing = std::iter::once(Region::new(layout.back_button, Target::Back))
            .chain(
                Position::ALL
                    .iter()
                    .map(|pos| Region::new(layout.cell_rect(*pos), Target::Cell(*pos))),
            )
            .collect();

        let round_over = vec![
            Region::new(layout.back_button, Target::Back),
            Region::new(layout.replay_button, Target::Replay),
        ];

        Self {
            menu,
            playing,
            round_over,
        }
    }

    /// Table consulted in `state`.
    pub fn active(&self, state: UiState) -> &[Region] {
        match state {
            UiState::Menu => &self.menu,
            UiState::Playing => &self.playing,
            UiState::RoundOver => &self.round_over,
        }
    }
}
