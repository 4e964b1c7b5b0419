//! Rendering and input seam
//!
//! The engine exposes read access to its grid and nothing else; everything
//! terminal-specific lives behind the `Render` trait so the driver loop can
//! run against the real terminal or headlessly.

mod terminal;

pub use terminal::{default_shape, TerminalRender};

use std::time::Duration;

use crate::core::error::Result;
use crate::engine::World;

/// Keyboard input relevant to the driver loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Quit the run (q, Esc, Ctrl-C)
    Quit,
    /// Toggle pause (space)
    TogglePause,
    /// Any other key or terminal event
    Other,
}

/// One frame of output plus input polling
pub trait Render {
    /// Draws the world and a status line
    fn draw(&mut self, world: &World, status: &str) -> Result<()>;

    /// Waits up to `timeout` for input
    ///
    /// Returning `None` means the timeout elapsed; the driver uses this as
    /// its frame pacing, so a backend with no input source should return
    /// immediately and let the run proceed unpaced.
    fn poll_input(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;

    /// Blocks until any key is pressed
    fn wait_for_key(&mut self) -> Result<()>;
}

/// No-op backend for headless runs and tests; never paces, never blocks
#[derive(Debug, Default)]
pub struct HeadlessRender;

impl Render for HeadlessRender {
    fn draw(&mut self, _world: &World, status: &str) -> Result<()> {
        tracing::trace!(%status, "frame");
        Ok(())
    }

    fn poll_input(&mut self, _timeout: Duration) -> Result<Option<InputEvent>> {
        Ok(None)
    }

    fn wait_for_key(&mut self) -> Result<()> {
        Ok(())
    }
}
