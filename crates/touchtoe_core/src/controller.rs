//! Game controller: the state machine driven by the poll loop.
//!
//! The controller owns the board and the UI state. Each poll iteration calls
//! [`GameController::step`], which lets the engine move when it is its turn
//! and otherwise feeds at most one touch through the input mapper.

use derive_getters::Getters;
use tracing::{debug, error, info, instrument, warn};

use crate::board::{Board, Mark, Outcome};
use crate::geometry::Point;
use crate::input::{RegionTable, Target, hit_test};
use crate::layout::Layout;
use crate::panel::Panel;
use crate::position::Position;
use crate::render;
use crate::search::best_move;

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumIter)]
pub enum UiState {
    /// Mode selection.
    #[default]
    Menu,
    /// A round is being played.
    Playing,
    /// The round is decided; waiting for replay or back.
    RoundOver,
}

/// What a controller call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Nothing to do this tick.
    Idle,
    /// A touch that maps to no action in the current state.
    Ignored,
    /// A round started from the menu.
    MatchStarted {
        /// Mark played by the engine, `None` for two human players.
        ai: Option<Mark>,
    },
    /// A mark was placed and the round goes on.
    MovePlayed {
        /// Mark placed.
        mark: Mark,
        /// Cell played.
        position: Position,
        /// True when the engine chose the move.
        by_ai: bool,
    },
    /// The last move decided the round.
    RoundOver(Outcome),
    /// The round was abandoned or closed via the back button.
    ReturnedToMenu,
    /// A new round started with the same roles.
    Replayed,
}

/// Owns all game state and turns ticks and touches into transitions.
#[derive(Debug, Clone, Getters)]
pub struct GameController {
    /// Screen geometry.
    layout: Layout,
    /// Touch regions derived from the layout.
    regions: RegionTable,
    /// Active screen.
    state: UiState,
    /// Current board.
    board: Board,
    /// Mark to move next.
    turn: Mark,
    /// Mark played by the engine, fixed for the match.
    ai: Option<Mark>,
}

impl GameController {
    /// Creates a controller showing the menu.
    #[instrument(skip(layout))]
    pub fn new(layout: Layout) -> Self {
        info!("Creating GameController");
        let regions = RegionTable::from_layout(&layout);
        Self {
            layout,
            regions,
            state: UiState::Menu,
            board: Board::new(),
            turn: Mark::Cross,
            ai: None,
        }
    }

    /// Draws the initial menu.
    #[instrument(skip_all)]
    pub fn start<P: Panel>(&mut self, panel: &mut P) {
        self.state = UiState::Menu;
        render::draw_menu(panel, &self.layout);
    }

    /// Runs one poll-loop iteration.
    ///
    /// An engine move takes the whole iteration; pending touches are read on
    /// the next one.
    pub fn step<P: Panel>(&mut self, panel: &mut P) -> Event {
        match self.on_tick(panel) {
            Event::Idle => match panel.poll_touch() {
                Some(point) => self.on_touch(point, panel),
                None => Event::Idle,
            },
            event => event,
        }
    }

    /// Lets the engine move when it is its turn.
    #[instrument(skip_all, fields(state = %self.state, turn = %self.turn))]
    pub fn on_tick<P: Panel>(&mut self, panel: &mut P) -> Event {
        if self.state != UiState::Playing || self.ai != Some(self.turn) {
            return Event::Idle;
        }

        let outcome = self.board.outcome();
        if outcome.is_over() {
            warn!(%outcome, "Decided board still in play, closing the round");
            return self.finish_round(outcome, panel);
        }

        match best_move(&self.board, self.board.move_count(), self.turn) {
            Some(pos) => self.play(pos, true, panel),
            None => {
                error!(board = %self.board.display(), "Engine found no empty cell");
                self.finish_round(Outcome::Draw, panel)
            }
        }
    }

    /// Handles a touch at `point`.
    #[instrument(skip(self, panel), fields(state = %self.state))]
    pub fn on_touch<P: Panel>(&mut self, point: Point, panel: &mut P) -> Event {
        let Some(target) = hit_test(point, self.regions.active(self.state)) else {
            debug!("Touch outside active regions");
            return Event::Ignored;
        };
        debug!(%target, "Touch mapped");

        match (self.state, target) {
            (UiState::Menu, Target::TwoPlayer) => self.start_match(None, panel),
            (UiState::Menu, Target::AiFirst) => self.start_match(Some(Mark::Cross), panel),
            (UiState::Menu, Target::AiSecond) => self.start_match(Some(Mark::Nought), panel),

            (UiState::Playing | UiState::RoundOver, Target::Back) => {
                info!("Back to menu");
                self.board.clear();
                self.state = UiState::Menu;
                render::draw_menu(panel, &self.layout);
                Event::ReturnedToMenu
            }

            (UiState::Playing, Target::Cell(pos)) => {
                if self.ai == Some(self.turn) {
                    debug!(%pos, "Engine's turn, touch ignored");
                    Event::Ignored
                } else if !self.board.is_empty(pos) {
                    debug!(%pos, "Cell occupied, touch ignored");
                    Event::Ignored
                } else {
                    self.play(pos, false, panel)
                }
            }

            (UiState::RoundOver, Target::Replay) => {
                info!(ai = ?self.ai, "Replaying");
                self.reset_round(panel);
                Event::Replayed
            }

            (state, target) => {
                debug!(%state, %target, "No transition");
                Event::Ignored
            }
        }
    }

    /// Label naming the side to move.
    pub fn turn_label(&self) -> &'static str {
        if self.ai == Some(self.turn) {
            "AI"
        } else {
            match self.turn {
                Mark::Cross => "P1",
                Mark::Nought => "P2",
            }
        }
    }

    fn start_match<P: Panel>(&mut self, ai: Option<Mark>, panel: &mut P) -> Event {
        info!(?ai, "Match started");
        self.ai = ai;
        self.reset_round(panel);
        Event::MatchStarted { ai }
    }

    fn reset_round<P: Panel>(&mut self, panel: &mut P) {
        self.board.clear();
        self.turn = Mark::Cross;
        self.state = UiState::Playing;
        render::draw_grid(panel, &self.layout);
        render::draw_turn_label(panel, &self.layout, self.turn_label());
    }

    fn play<P: Panel>(&mut self, pos: Position, by_ai: bool, panel: &mut P) -> Event {
        let mark = self.turn;
        if let Err(e) = self.board.set(pos, mark) {
            error!(error = %e, "Rejected move");
            return Event::Ignored;
        }
        render::draw_mark(panel, &self.layout, pos, mark);
        self.turn = mark.opponent();
        info!(%mark, %pos, by_ai, moves = self.board.move_count(), "Move played");

        let outcome = self.board.outcome();
        if outcome.is_over() {
            return self.finish_round(outcome, panel);
        }

        render::draw_turn_label(panel, &self.layout, self.turn_label());
        Event::MovePlayed {
            mark,
            position: pos,
            by_ai,
        }
    }

    fn finish_round<P: Panel>(&mut self, outcome: Outcome, panel: &mut P) -> Event {
        info!(%outcome, "Round over");
        self.state = UiState::RoundOver;
        render::draw_result(panel, &self.layout, outcome);
        Event::RoundOver(outcome)
    }
}
