//! Terminal front end: the poll loop around the game controller.

mod panel;

pub use panel::TerminalPanel;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use touchtoe_core::{Event, GameController};
use tracing::{debug, error, info, instrument};

use crate::config::AppConfig;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits.
///
/// The terminal is restored whether the loop ends normally or with an error.
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting touchtoe terminal panel");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            error!(error = %e, "Failed to create terminal");
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
            return Err(e.into());
        }
    };

    let res = poll_loop(&mut terminal, config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref err) = res {
        error!(error = ?err, "Poll loop error");
    }
    info!("Terminal restored");
    res
}

#[instrument(skip_all, fields(tick_ms = config.tick_ms()))]
fn poll_loop(terminal: &mut Tui, config: &AppConfig) -> Result<()> {
    let layout = config.layout();
    let mut panel = TerminalPanel::new(layout.width, layout.height);
    let mut controller = GameController::new(layout.clone());
    controller.start(&mut panel);

    let tick = Duration::from_millis(*config.tick_ms());
    loop {
        let event = controller.step(&mut panel);
        if event != Event::Idle {
            debug!(?event, state = %controller.state(), "Controller event");
        }

        terminal.draw(|frame| panel.render(frame))?;

        if panel.quit_requested() {
            info!("Quit requested, leaving poll loop");
            return Ok(());
        }
        std::thread::sleep(tick);
    }
}
