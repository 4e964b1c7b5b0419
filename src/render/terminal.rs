//! Crossterm/ratatui terminal backend
//!
//! Raw mode plus alternate screen for the lifetime of the renderer; the
//! original terminal state is restored on drop, including on error paths.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::text::Line;
use ratatui::widgets::block::{Position, Title};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;

use crate::core::error::Result;
use crate::engine::World;
use crate::render::{InputEvent, Render};

/// World shape that fills the current terminal
///
/// Cells are drawn two columns wide, and three rows are reserved for the
/// border and status line.
pub fn default_shape() -> Result<(usize, usize)> {
    let (cols, rows) = crossterm::terminal::size()?;
    Ok((
        (cols as usize / 2).saturating_sub(2),
        (rows as usize).saturating_sub(3),
    ))
}

/// Full-screen terminal renderer
pub struct TerminalRender {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalRender {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Render for TerminalRender {
    fn draw(&mut self, world: &World, status: &str) -> Result<()> {
        self.terminal.draw(|frame| {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(Title::from(" Conway's Game of Life "))
                .title(
                    Title::from(format!(" {status} "))
                        .position(Position::Bottom),
                );
            let lines: Vec<Line<'_>> = world
                .rows()
                .map(|row| {
                    let mut text = String::with_capacity(row.len() * 2);
                    for &cell in row {
                        text.push_str(if cell { "██" } else { "  " });
                    }
                    Line::from(text)
                })
                .collect();
            frame.render_widget(Paragraph::new(lines).block(block), frame.size());
        })?;
        Ok(())
    }

    fn poll_input(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let mapped = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => InputEvent::Quit,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    InputEvent::Quit
                }
                KeyCode::Char(' ') => InputEvent::TogglePause,
                _ => InputEvent::Other,
            },
            _ => InputEvent::Other,
        };
        Ok(Some(mapped))
    }

    fn wait_for_key(&mut self) -> Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl Drop for TerminalRender {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
