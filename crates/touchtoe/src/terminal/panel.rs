//! A [`Panel`] emulated in the terminal.
//!
//! Drawing calls go into a [`DisplayList`] that is painted onto a ratatui
//! canvas every frame. Left mouse presses stand in for touches.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Frame,
    layout::Rect as Viewport,
    style::{Color as TuiColor, Style},
    symbols::Marker,
    text::Span,
    widgets::canvas::{Canvas, Circle, Line, Rectangle},
};
use touchtoe_core::{Color, DisplayList, DrawCommand, Panel, Point, Rect};
use tracing::{debug, trace, warn};

/// Terminal stand-in for the touch panel.
#[derive(Debug)]
pub struct TerminalPanel {
    frame: DisplayList,
    width: u16,
    height: u16,
    viewport: Viewport,
    quit: bool,
}

impl TerminalPanel {
    /// Creates a panel emulating a `width` x `height` pixel screen.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            frame: DisplayList::new(),
            width,
            height,
            viewport: Viewport::default(),
            quit: false,
        }
    }

    /// True once the user pressed `q` or `Esc`.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Paints the current display list into `frame`.
    pub fn render(&mut self, frame: &mut Frame) {
        self.viewport = fit_viewport(frame.area(), self.width, self.height);
        let height = f64::from(self.height);
        let commands = self.frame.commands();

        let canvas = Canvas::default()
            .background_color(to_tui(self.frame.background()))
            .marker(Marker::Braille)
            .x_bounds([0.0, f64::from(self.width)])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                // Canvas y grows upward, device y downward.
                let flip = |y: u16| height - f64::from(y);
                for command in commands {
                    match command {
                        DrawCommand::Line { from, to, color } => ctx.draw(&Line::new(
                            f64::from(from.x),
                            flip(from.y),
                            f64::from(to.x),
                            flip(to.y),
                            to_tui(*color),
                        )),
                        DrawCommand::Rect { rect, color } => ctx.draw(&Rectangle {
                            x: f64::from(rect.x),
                            y: height - rect.bottom() as f64,
                            width: f64::from(rect.dx),
                            height: f64::from(rect.dy),
                            color: to_tui(*color),
                        }),
                        DrawCommand::Circle {
                            center,
                            radius,
                            color,
                        } => ctx.draw(&Circle {
                            x: f64::from(center.x),
                            y: flip(center.y),
                            radius: f64::from(*radius),
                            color: to_tui(*color),
                        }),
                        DrawCommand::Cross {
                            origin,
                            size,
                            color,
                        } => {
                            let (x0, x1) = (f64::from(origin.x), f64::from(origin.x) + f64::from(*size));
                            let (y0, y1) = (flip(origin.y), flip(origin.y) - f64::from(*size));
                            ctx.draw(&Line::new(x0, y0, x1, y1, to_tui(*color)));
                            ctx.draw(&Line::new(x0, y1, x1, y0, to_tui(*color)));
                        }
                        DrawCommand::Text {
                            origin, fg, bg, text, ..
                        } => ctx.print(
                            f64::from(origin.x),
                            flip(origin.y),
                            Span::styled(
                                text.clone(),
                                Style::default().fg(to_tui(*fg)).bg(to_tui(*bg)),
                            ),
                        ),
                    }
                }
            });

        frame.render_widget(canvas, self.viewport);
    }

    /// Applies one terminal event, returning a touch if it was a left press.
    pub fn handle_event(&mut self, event: Event) -> Option<Point> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    debug!(code = ?key.code, "Quit requested");
                    self.quit = true;
                }
                None
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let point = to_device(self.viewport, column, row, self.width, self.height);
                trace!(column, row, ?point, "Mouse press");
                point
            }
            _ => None,
        }
    }
}

impl Panel for TerminalPanel {
    fn clear_screen(&mut self, color: Color) {
        self.frame.clear_screen(color);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.frame.draw_line(from, to, color);
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.frame.draw_rect(rect, color);
    }

    fn draw_circle(&mut self, center: Point, radius: u16, color: Color) {
        self.frame.draw_circle(center, radius, color);
    }

    fn draw_cross(&mut self, origin: Point, size: u16, color: Color) {
        self.frame.draw_cross(origin, size, color);
    }

    fn draw_text(&mut self, origin: Point, scale: u8, fg: Color, bg: Color, text: &str) {
        self.frame.draw_text(origin, scale, fg, bg, text);
    }

    fn poll_touch(&mut self) -> Option<Point> {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    warn!(error = %e, "Event poll failed");
                    return None;
                }
            }
            match event::read() {
                Ok(event) => {
                    if let Some(point) = self.handle_event(event) {
                        return Some(point);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Event read failed");
                    return None;
                }
            }
        }
    }
}

fn to_tui(color: Color) -> TuiColor {
    let (r, g, b) = color.to_rgb888();
    TuiColor::Rgb(r, g, b)
}

/// Largest area inside `area` keeping the screen's aspect ratio.
///
/// Terminal cells are taken to be twice as tall as wide.
pub fn fit_viewport(area: Viewport, width: u16, height: u16) -> Viewport {
    if width == 0 || height == 0 {
        return Viewport::default();
    }
    let (w, h) = (u32::from(width), u32::from(height));
    let cols = (u32::from(area.height) * 2 * w / h).min(u32::from(area.width));
    let rows = (cols * h / (2 * w)).min(u32::from(area.height));

    // Both are bounded by the area's own u16 extents.
    let cols = cols as u16;
    let rows = rows as u16;
    Viewport::new(
        area.x + (area.width - cols) / 2,
        area.y + (area.height - rows) / 2,
        cols,
        rows,
    )
}

/// Maps a terminal cell to the device pixel at its center.
pub fn to_device(
    viewport: Viewport,
    column: u16,
    row: u16,
    width: u16,
    height: u16,
) -> Option<Point> {
    if viewport.width == 0
        || viewport.height == 0
        || column < viewport.x
        || row < viewport.y
        || column >= viewport.x + viewport.width
        || row >= viewport.y + viewport.height
    {
        return None;
    }
    let scale = |offset: u16, extent: u16, size: u16| {
        ((u32::from(offset) * 2 + 1) * u32::from(size) / (2 * u32::from(extent))) as u16
    };
    Some(Point::new(
        scale(column - viewport.x, viewport.width, width),
        scale(row - viewport.y, viewport.height, height),
    ))
}
