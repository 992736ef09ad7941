//! Direction prompts
//!
//! Each turn blocks on exactly one answer. `Ok(None)` means the player walked
//! away (Esc, Ctrl+C, or end of input) and the game should stop.

use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use forest_core::Direction;

use crate::input::{KeyAction, key_to_action};

pub const QUESTION: &str = "Which way will you go?";

pub trait DirectionPrompt {
    fn prompt_direction(&mut self) -> io::Result<Option<Direction>>;
}

/// Raw mode for the lifetime of the guard only, so regular line output
/// between prompts keeps its newline handling.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Single-keypress prompt on the controlling terminal.
#[derive(Debug, Default)]
pub struct KeyPrompt;

impl KeyPrompt {
    pub fn new() -> Self {
        Self
    }

    fn read_action() -> io::Result<KeyAction> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()?
                && let Some(action) = key_to_action(key)
            {
                return Ok(action);
            }
        }
    }
}

impl DirectionPrompt for KeyPrompt {
    fn prompt_direction(&mut self) -> io::Result<Option<Direction>> {
        let mut stdout = io::stdout();
        write!(stdout, "{QUESTION} (arrows, wasd or hjkl; Esc quits) ")?;
        stdout.flush()?;

        match Self::read_action()? {
            KeyAction::Move(dir) => {
                writeln!(stdout, "{}", dir.label())?;
                Ok(Some(dir))
            }
            KeyAction::Quit => {
                writeln!(stdout)?;
                Ok(None)
            }
        }
    }
}

/// Line-at-a-time prompt for piped input and tests.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> DirectionPrompt for LinePrompt<R, W> {
    fn prompt_direction(&mut self) -> io::Result<Option<Direction>> {
        let mut line = String::new();
        loop {
            write!(self.output, "{QUESTION} [up/down/left/right] ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                log::debug!("prompt input closed");
                return Ok(None);
            }
            if let Some(dir) = Direction::parse_choice(&line) {
                return Ok(Some(dir));
            }
            if matches!(line.trim(), "q" | "quit") {
                return Ok(None);
            }
            writeln!(self.output, "Please choose Up, Down, Left or Right.")?;
        }
    }
}
