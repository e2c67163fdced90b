//! Screens and marks drawn through a [`Panel`].

use tracing::{debug, instrument};

use crate::board::{Mark, Outcome};
use crate::geometry::{Point, Rect};
use crate::layout::Layout;
use crate::panel::{Color, GLYPH_HEIGHT, GLYPH_WIDTH, Panel};
use crate::position::Position;

/// Screen background.
pub const BACKGROUND: Color = Color::CYAN;
/// Grid lines, button outlines and labels.
pub const FOREGROUND: Color = Color::WHITE;

/// Origin that centers `text` inside `rect`.
fn centered_text(rect: Rect, text: &str, scale: u8) -> Point {
    let scale = u16::from(scale);
    let width = (text.len() as u16).saturating_mul(GLYPH_WIDTH * scale);
    let height = GLYPH_HEIGHT * scale;
    Point::new(
        rect.x + rect.dx.saturating_sub(width) / 2,
        rect.y + rect.dy.saturating_sub(height) / 2,
    )
}

fn labelled_button<P: Panel>(panel: &mut P, rect: Rect, text: &str, scale: u8) {
    panel.draw_rect(rect, FOREGROUND);
    panel.draw_text(centered_text(rect, text, scale), scale, FOREGROUND, BACKGROUND, text);
}

/// Draws the mode selection menu.
#[instrument(skip_all)]
pub fn draw_menu<P: Panel>(panel: &mut P, layout: &Layout) {
    panel.clear_screen(BACKGROUND);
    labelled_button(panel, layout.two_player_button, "TWO PLAYERS", layout.text_scale);
    labelled_button(panel, layout.ai_first_button, "AI 1ST", layout.text_scale);
    labelled_button(panel, layout.ai_second_button, "AI 2ND", layout.text_scale);
    debug!("Menu drawn");
}

/// Draws an empty grid with the back button.
#[instrument(skip_all)]
pub fn draw_grid<P: Panel>(panel: &mut P, layout: &Layout) {
    panel.clear_screen(BACKGROUND);

    let origin = layout.grid_origin;
    let extent = layout.grid_extent();
    for offset in layout.grid_line_offsets() {
        // Vertical
        panel.draw_line(
            Point::new(origin.x + offset, origin.y),
            Point::new(origin.x + offset, origin.y + extent),
            FOREGROUND,
        );
        // Horizontal
        panel.draw_line(
            Point::new(origin.x, origin.y + offset),
            Point::new(origin.x + extent, origin.y + offset),
            FOREGROUND,
        );
    }

    labelled_button(panel, layout.back_button, "BACK", layout.text_scale);
    debug!("Grid drawn");
}

/// Draws a nought (circle) or a cross inside the region `rect`, inset by `inset`.
fn draw_icon<P: Panel>(panel: &mut P, rect: Rect, inset: u16, mark: Mark) {
    match mark {
        Mark::Nought => {
            let center = Point::new(rect.x + rect.dx / 2, rect.y + rect.dy / 2);
            let radius = (rect.dx.min(rect.dy) / 2).saturating_sub(inset);
            panel.draw_circle(center, radius, Color::GREEN);
        }
        Mark::Cross => {
            let origin = Point::new(rect.x + inset, rect.y + inset);
            let size = rect.dx.min(rect.dy).saturating_sub(2 * inset);
            panel.draw_cross(origin, size, Color::RED);
        }
    }
}

/// Draws `mark` in the cell at `pos`.
#[instrument(skip(panel, layout))]
pub fn draw_mark<P: Panel>(panel: &mut P, layout: &Layout, pos: Position, mark: Mark) {
    draw_icon(panel, layout.cell_rect(pos), layout.cell_gap, mark);
}

/// Prints whose turn it is next to the back button.
pub fn draw_turn_label<P: Panel>(panel: &mut P, layout: &Layout, label: &str) {
    panel.draw_text(
        layout.status_anchor,
        layout.text_scale,
        FOREGROUND,
        BACKGROUND,
        label,
    );
}

/// Draws the round result: banner text, the winner's icon (both icons on a
/// draw) framed by the replay button, and a blank turn label.
#[instrument(skip(panel, layout))]
pub fn draw_result<P: Panel>(panel: &mut P, layout: &Layout, outcome: Outcome) {
    let (banner, icons): (&str, &[Mark]) = match outcome {
        Outcome::Won(Mark::Cross) => ("WINS", &[Mark::Cross][..]),
        Outcome::Won(Mark::Nought) => ("WINS", &[Mark::Nought][..]),
        Outcome::Draw => ("DRAW", &[Mark::Nought, Mark::Cross][..]),
        Outcome::InProgress => return,
    };

    draw_turn_label(panel, layout, "  ");
    panel.draw_text(
        layout.banner_anchor,
        layout.text_scale,
        FOREGROUND,
        BACKGROUND,
        banner,
    );
    for mark in icons {
        draw_icon(panel, layout.replay_button, layout.cell_gap, *mark);
    }
    panel.draw_rect(layout.replay_button, FOREGROUND);
    debug!(%outcome, "Result drawn");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{DisplayList, DrawCommand};

    #[test]
    fn test_menu_labels() {
        let mut panel = DisplayList::new();
        draw_menu(&mut panel, &Layout::default());
        assert_eq!(panel.texts(), vec!["TWO PLAYERS", "AI 1ST", "AI 2ND"]);
        assert_eq!(panel.background(), BACKGROUND);
    }

    #[test]
    fn test_grid_has_four_lines_and_back() {
        let mut panel = DisplayList::new();
        draw_grid(&mut panel, &Layout::default());
        let lines = panel
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(lines, 4);
        assert!(panel.shows_text("BACK"));
    }

    #[test]
    fn test_nought_is_centered_in_cell() {
        let layout = Layout::default();
        let mut panel = DisplayList::new();
        draw_mark(&mut panel, &layout, Position::TopLeft, Mark::Nought);
        assert_eq!(
            panel.commands(),
            &[DrawCommand::Circle {
                center: Point::new(40, 120),
                radius: 20,
                color: Color::GREEN,
            }]
        );
    }

    #[test]
    fn test_draw_result_shows_both_icons() {
        let mut panel = DisplayList::new();
        draw_result(&mut panel, &Layout::default(), Outcome::Draw);
        assert!(panel.shows_text("DRAW"));
        assert!(panel.commands().iter().any(|c| matches!(c, DrawCommand::Circle { .. })));
        assert!(panel.commands().iter().any(|c| matches!(c, DrawCommand::Cross { .. })));
    }

    #[test]
    fn test_centered_text_clamps_wide_labels() {
        let origin = centered_text(Rect::new(10, 10, 20, 20), "TWO PLAYERS", 2);
        assert_eq!(origin.x, 10);
    }
}
