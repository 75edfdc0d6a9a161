//! Raw-mode terminal session and the interactive event loop.

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, ClearType},
};
use gridpath_board::Replay;
use gridpath_search::SearchResult;

use crate::app::{App, Effect};
use crate::input;
use crate::render;

/// Alternate screen in raw mode. Restored on drop.
pub struct Terminal<W: Write = Stdout> {
    out: W,
    mouse: bool,
    raw: bool,
}

impl Terminal {
    pub fn init(mouse: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Self::enter(io::stdout(), mouse, true)
    }
}

impl<W: Write> Terminal<W> {
    /// Switch `out` to the alternate screen. `raw` records that raw mode is
    /// on and must be turned off again on drop.
    fn enter(out: W, mouse: bool, raw: bool) -> io::Result<Self> {
        // Any early return below drops `term`, which undoes the setup.
        let mut term = Self { out, mouse, raw };
        execute!(
            term.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if mouse {
            execute!(term.out, EnableMouseCapture)?;
        }
        Ok(term)
    }

    /// Block on events until the user quits.
    pub fn run(&mut self, app: &mut App) -> io::Result<()> {
        render::draw(&mut self.out, app)?;
        loop {
            let ev = event::read()?;
            let Some(action) = input::action(&ev, app.board.dims()) else {
                continue;
            };
            match app.update(action) {
                Effect::None => {}
                Effect::Redraw => render::draw(&mut self.out, app)?,
                Effect::Animate(result) => self.animate(app, &result)?,
                Effect::Quit => return Ok(()),
            }
        }
    }

    fn animate(&mut self, app: &mut App, result: &SearchResult) -> io::Result<()> {
        render::draw(&mut self.out, app)?;
        for step in Replay::new(result) {
            if app.board.apply(step) {
                render::draw_cell(&mut self.out, app, step.cell())?;
            }
            if !app.delay.is_zero() {
                thread::sleep(app.delay);
            }
        }
        app.finish(result);
        // Keys pressed during the replay are dropped.
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        render::draw(&mut self.out, app)
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(self.out, DisableMouseCapture);
        }
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}
