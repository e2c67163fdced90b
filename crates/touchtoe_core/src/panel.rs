//! Display/touch collaborator interface.
//!
//! The game never talks to hardware directly. It draws through a [`Panel`]
//! and asks the same panel for touches. [`DisplayList`] is an in-memory
//! panel that records what was drawn and replays scripted touches.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::geometry::{Point, Rect};

/// Width of one glyph cell in font pixels, spacing included.
pub const GLYPH_WIDTH: u16 = 6;
/// Height of one glyph in font pixels.
pub const GLYPH_HEIGHT: u16 = 7;

/// A 16-bit RGB565 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u16);

impl Color {
    /// Light blue.
    pub const LIGHT_BLUE: Color = Color(0x963D);
    /// White.
    pub const WHITE: Color = Color(0xFFFF);
    /// Black.
    pub const BLACK: Color = Color(0x0000);
    /// Green, used for noughts.
    pub const GREEN: Color = Color(0xC72B);
    /// Red, used for crosses.
    pub const RED: Color = Color(0xD369);
    /// Cyan, the background.
    pub const CYAN: Color = Color(0x1AAE);

    /// Expands the color to 8-bit red, green and blue channels.
    pub fn to_rgb888(self) -> (u8, u8, u8) {
        let r = ((self.0 >> 11) & 0x1F) as u8;
        let g = ((self.0 >> 5) & 0x3F) as u8;
        let b = (self.0 & 0x1F) as u8;
        ((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
    }
}

/// Drawing and touch primitives offered by the output device.
///
/// Coordinates are device pixels. Drawing calls are idempotent.
/// [`Panel::poll_touch`] must not block.
pub trait Panel {
    /// Fills the whole screen.
    fn clear_screen(&mut self, color: Color);

    /// Draws a straight line between two points.
    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Draws the outline of a rectangle.
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Draws a circle outline.
    fn draw_circle(&mut self, center: Point, radius: u16, color: Color);

    /// Draws an X whose bounding square starts at `origin`.
    fn draw_cross(&mut self, origin: Point, size: u16, color: Color);

    /// Prints text starting at `origin`, each font pixel `scale` pixels wide.
    fn draw_text(&mut self, origin: Point, scale: u8, fg: Color, bg: Color, text: &str);

    /// Returns the current touch position, or `None` when nothing is pressed.
    fn poll_touch(&mut self) -> Option<Point>;
}

/// A recorded drawing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// See [`Panel::draw_line`].
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke color.
        color: Color,
    },
    /// See [`Panel::draw_rect`].
    Rect {
        /// Outline.
        rect: Rect,
        /// Stroke color.
        color: Color,
    },
    /// See [`Panel::draw_circle`].
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: u16,
        /// Stroke color.
        color: Color,
    },
    /// See [`Panel::draw_cross`].
    Cross {
        /// Top-left of the bounding square.
        origin: Point,
        /// Side of the bounding square.
        size: u16,
        /// Stroke color.
        color: Color,
    },
    /// See [`Panel::draw_text`].
    Text {
        /// Top-left of the first glyph.
        origin: Point,
        /// Font pixel scale.
        scale: u8,
        /// Glyph color.
        fg: Color,
        /// Glyph background color.
        bg: Color,
        /// Printed text.
        text: String,
    },
}

/// In-memory panel: a display list plus a queue of pending touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayList {
    background: Color,
    commands: Vec<DrawCommand>,
    touches: VecDeque<Point>,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayList {
    /// Creates an empty black display with no pending touches.
    pub fn new() -> Self {
        Self {
            background: Color::BLACK,
            commands: Vec::new(),
            touches: VecDeque::new(),
        }
    }

    /// Color of the last [`Panel::clear_screen`].
    pub fn background(&self) -> Color {
        self.background
    }

    /// Commands drawn since the last clear, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Queues a touch for a later [`Panel::poll_touch`].
    pub fn push_touch(&mut self, point: Point) {
        self.touches.push_back(point);
    }

    /// Texts currently on screen, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Returns true when `text` was printed since the last clear.
    pub fn shows_text(&self, text: &str) -> bool {
        self.texts().contains(&text)
    }
}

impl Panel for DisplayList {
    #[instrument(level = "trace", skip(self))]
    fn clear_screen(&mut self, color: Color) {
        self.background = color;
        self.commands.clear();
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_circle(&mut self, center: Point, radius: u16, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_cross(&mut self, origin: Point, size: u16, color: Color) {
        self.commands.push(DrawCommand::Cross {
            origin,
            size,
            color,
        });
    }

    fn draw_text(&mut self, origin: Point, scale: u8, fg: Color, bg: Color, text: &str) {
        // Reprinting at the same anchor overwrites the old glyphs.
        self.commands.retain(
            |command| !matches!(command, DrawCommand::Text { origin: o, .. } if *o == origin),
        );
        self.commands.push(DrawCommand::Text {
            origin,
            scale,
            fg,
            bg,
            text: text.to_string(),
        });
    }

    fn poll_touch(&mut self) -> Option<Point> {
        let touch = self.touches.pop_front();
        if touch.is_some() {
            trace!(?touch, "Scripted touch");
        }
        touch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb565_expansion() {
        assert_eq!(Color::WHITE.to_rgb888(), (255, 255, 255));
        assert_eq!(Color::BLACK.to_rgb888(), (0, 0, 0));
        assert_eq!(Color(0xF800).to_rgb888(), (255, 0, 0));
    }

    #[test]
    fn test_clear_drops_commands() {
        let mut panel = DisplayList::new();
        panel.draw_rect(Rect::new(0, 0, 5, 5), Color::WHITE);
        panel.clear_screen(Color::CYAN);
        assert!(panel.commands().is_empty());
        assert_eq!(panel.background(), Color::CYAN);
    }

    #[test]
    fn test_text_at_same_anchor_is_replaced() {
        let mut panel = DisplayList::new();
        let at = Point::new(4, 4);
        panel.draw_text(at, 2, Color::WHITE, Color::CYAN, "P1");
        panel.draw_text(at, 2, Color::WHITE, Color::CYAN, "P2");
        assert_eq!(panel.texts(), vec!["P2"]);
    }

    #[test]
    fn test_touches_are_fifo() {
        let mut panel = DisplayList::new();
        panel.push_touch(Point::new(1, 2));
        panel.push_touch(Point::new(3, 4));
        assert_eq!(panel.poll_touch(), Some(Point::new(1, 2)));
        assert_eq!(panel.poll_touch(), Some(Point::new(3, 4)));
        assert_eq!(panel.poll_touch(), None);
    }
}
