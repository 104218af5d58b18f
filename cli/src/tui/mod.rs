pub mod app;
pub mod ui;

use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use milkvendor_core::{AttendanceRepository, AttendanceService};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::App;

pub fn run<R: AttendanceRepository>(service: AttendanceService<R>, currency: String) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(service, currency, Local::now().date_naive());
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    finish(res)
}

/// Event loop failures become the command's error, after the terminal is restored.
fn finish(res: io::Result<()>) -> Result<()> {
    res.context("Terminal session failed")
}

fn run_app<B: Backend, R: AttendanceRepository>(terminal: &mut Terminal<B>, app: &mut App<R>) -> io::Result<()> {
    loop {
        // The day may roll over while the calendar is open.
        app.today = Local::now().date_naive();

        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
                    KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
                    KeyCode::Up | KeyCode::Char('k') => app.move_selection(-7),
                    KeyCode::Down | KeyCode::Char('j') => app.move_selection(7),
                    KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::PageUp => app.previous_month(),
                    KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::PageDown => app.next_month(),
                    KeyCode::Char('t') => app.go_to_today(),
                    KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
                    _ => {}
                }
            }
        }
    }
}
