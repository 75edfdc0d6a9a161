//! Drawing the board and status lines with crossterm.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use gridpath_board::CellState;
use gridpath_core::Cell;

use crate::app::App;
use crate::input::CELL_WIDTH;

const HELP: &str = "arrows/hjkl move  space/click apply  s/e start/end  1-4/tab algorithm  \
                    enter run  c clear  x reset  r maze  +/- speed  q quit";

/// Background color for a cell state.
pub fn color(state: CellState) -> Color {
    match state {
        CellState::Empty => Color::Reset,
        CellState::Wall => Color::Grey,
        CellState::Start => Color::Green,
        CellState::End => Color::Red,
        CellState::Visited => Color::DarkCyan,
        CellState::Path => Color::Yellow,
    }
}

/// The two characters drawn for a cell.
fn glyphs(state: CellState, cursor: bool) -> &'static str {
    match (cursor, state) {
        (true, _) => "[]",
        (false, CellState::Start) => "S ",
        (false, CellState::End) => "E ",
        _ => "  ",
    }
}

/// Text of the status area below the board.
pub fn status_lines(app: &App) -> [String; 3] {
    [
        format!(
            "Algorithm: {}  Mode: {}  Delay: {}ms",
            app.algorithm.label(),
            app.mode,
            app.delay.as_millis()
        ),
        app.status.clone(),
        String::from(HELP),
    ]
}

fn queue_cell(out: &mut impl Write, app: &App, c: Cell, state: CellState) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(c.col as u16 * CELL_WIDTH, c.row as u16),
        SetBackgroundColor(color(state)),
        SetForegroundColor(Color::Black),
        Print(glyphs(state, c == app.cursor)),
        ResetColor
    )
}

/// Redraw one cell.
pub fn draw_cell(out: &mut impl Write, app: &App, c: Cell) -> io::Result<()> {
    if let Some(state) = app.board.state(c) {
        queue_cell(out, app, c, state)?;
    }
    out.flush()
}

/// Redraw everything.
pub fn draw(out: &mut impl Write, app: &App) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;
    for (c, state) in app.board.iter() {
        queue_cell(out, app, c, state)?;
    }
    let top = app.board.dims().rows as u16;
    for (i, line) in status_lines(app).iter().enumerate() {
        queue!(
            out,
            cursor::MoveTo(0, top + i as u16),
            terminal::Clear(ClearType::CurrentLine),
            Print(line)
        )?;
    }
    out.flush()
}
