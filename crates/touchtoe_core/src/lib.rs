//! Touchtoe core - tic-tac-toe for a small touch panel
//!
//! Everything with decision logic lives here; the display and the touch
//! sensor are reached only through the [`Panel`] trait.
//!
//! # Architecture
//!
//! - **Board**: 3x3 cells, move counter and outcome detection
//! - **Search**: exhaustive minimax picking the engine's move
//! - **Input**: hit testing touches against layout-derived regions
//! - **Controller**: the menu / playing / round-over state machine
//!
//! # Example
//!
//! ```
//! use touchtoe_core::{DisplayList, Event, GameController, Layout, Target};
//!
//! let layout = Layout::default();
//! let mut panel = DisplayList::new();
//! let mut controller = GameController::new(layout.clone());
//! controller.start(&mut panel);
//!
//! // Pick "AI 1ST": the engine plays Cross and opens in the top-left cell.
//! panel.push_touch(layout.center_of(Target::AiFirst).unwrap());
//! assert!(matches!(controller.step(&mut panel), Event::MatchStarted { .. }));
//! assert!(matches!(controller.step(&mut panel), Event::MovePlayed { by_ai: true, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod controller;
mod geometry;
mod input;
mod layout;
mod panel;
mod position;
mod render;
mod search;

// Crate-level exports - Board model
pub use board::{Board, BoardError, Cell, Mark, Outcome};
pub use position::Position;

// Crate-level exports - Search engine
pub use search::{SCORE_DRAW, SCORE_LOSS, SCORE_WIN, best_move, minimax};

// Crate-level exports - Input mapping
pub use geometry::{Point, Rect};
pub use input::{Region, RegionTable, Target, hit_test};
pub use layout::{Layout, LayoutError};

// Crate-level exports - Collaborator and rendering
pub use panel::{Color, DisplayList, DrawCommand, GLYPH_HEIGHT, GLYPH_WIDTH, Panel};
pub use render::{BACKGROUND, FOREGROUND};

// Crate-level exports - Controller
pub use controller::{Event, GameController, UiState};
