use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{bail, Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, poll, read};

use crate::config::{Config, Rgb};
use crate::geometry::{Grid, Rect};
use crate::input::{Command, InputFrame, InputSource};
use crate::render::Surface;
use crate::snake::Direction::*;

pub type TermInt = u16;

// Terminal characters are about twice as tall as they are wide.
const COLUMNS_PER_CELL: TermInt = 2;
const FILLED_CELL: &str = "[]";
const EMPTY_CELL: &str = "  ";
const TITLE: &str = "Snake";

#[derive(Copy, Clone, PartialEq, Eq)]
struct Paint {
    fill: Rgb,
    border: Option<Rgb>,
}

/// Owns the terminal while the game runs and draws the field on it.
pub struct TermManager {
    stdout: Stdout,
    grid: Grid,
    cell_size: u32,
    origin: (TermInt, TermInt),
    frame: Vec<Paint>,
    shown: Vec<Option<Paint>>,
}

impl TermManager {
    pub fn new(config: &Config) -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        let grid = config.grid;
        let needed = (grid.width as TermInt * COLUMNS_PER_CELL, grid.height as TermInt);

        if width < needed.0 || height < needed.1 {
            bail!(
                "terminal is {}x{}, the {}x{} field needs at least {}x{}",
                width, height, grid.width, grid.height, needed.0, needed.1
            );
        }

        let origin = ((width - needed.0) / 2, (height - needed.1) / 2);
        let blank = Paint { fill: config.background_color, border: None };

        Ok(TermManager {
            stdout: stdout(),
            grid,
            cell_size: config.cell_size,
            origin,
            frame: vec![blank; grid.area()],
            shown: vec![None; grid.area()],
        })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, terminal::SetTitle(TITLE), terminal::Clear(ClearType::All))
            .context("Error entering alt screen")?;
        self.set_raw_mode(true)?;
        self.set_cursor_visibility(false)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        self.set_raw_mode(false)?;
        self.set_cursor_visibility(true)?;
        execute!(self.stdout, style::ResetColor, LeaveAlternateScreen).context("Error leaving alt screen")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index_of(&self, rect: Rect) -> Option<usize> {
        let cell = ((rect.x / self.cell_size) as i32, (rect.y / self.cell_size) as i32);
        if self.grid.contains(cell) {
            Some(cell.1 as usize * self.grid.width as usize + cell.0 as usize)
        } else {
            None
        }
    }

    fn print_at(&mut self, index: usize, paint: Paint) -> Result<()> {
        let x = self.origin.0 + (index % self.grid.width as usize) as TermInt * COLUMNS_PER_CELL;
        let y = self.origin.1 + (index / self.grid.width as usize) as TermInt;
        let (text, fg) = match paint.border {
            Some(border) => (FILLED_CELL, border),
            None => (EMPTY_CELL, paint.fill),
        };

        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            style::SetBackgroundColor(to_color(paint.fill)),
            style::SetForegroundColor(to_color(fg)),
            style::Print(text)
        )
        .context("Error drawing cell")
    }

    fn set_raw_mode(&self, option: bool) -> Result<()> {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.context("Error setting raw mode")
    }

    fn set_cursor_visibility(&mut self, option: bool) -> Result<()> {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.context("Error setting cursor visibility")
    }
}

impl Surface for TermManager {
    fn clear(&mut self, color: Rgb) -> Result<()> {
        let blank = Paint { fill: color, border: None };
        self.frame.iter_mut().for_each(|paint| *paint = blank);
        Ok(())
    }

    fn draw_cell(&mut self, rect: Rect, fill: Rgb, border: Rgb) -> Result<()> {
        if let Some(index) = self.index_of(rect) {
            self.frame[index] = Paint { fill, border: Some(border) };
        }
        Ok(())
    }

    /// Only cells that differ from what is already on screen get written.
    fn present(&mut self) -> Result<()> {
        for index in 0..self.frame.len() {
            let paint = self.frame[index];
            if self.shown[index] != Some(paint) {
                self.print_at(index, paint)?;
                self.shown[index] = Some(paint);
            }
        }

        self.flush()
    }
}

/// Keyboard side of the terminal. Only meaningful while a `TermManager` is set up.
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0)).context("Error polling input")? {
            if let Event::Key(ev) = read().context("Error reading input")? {
                events.push(ev);
            }
        }

        Ok(events)
    }
}

impl InputSource for KeyboardInput {
    fn drain(&mut self) -> Result<InputFrame> {
        let events = self.read_key_events_queue()?;
        Ok(InputFrame::from_commands(events.iter().filter_map(command_for)))
    }
}

fn command_for(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

fn to_color(Rgb(r, g, b): Rgb) -> style::Color {
    style::Color::Rgb { r, g, b }
}
