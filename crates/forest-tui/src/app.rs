//! Turn loop
//!
//! Render, ask, resolve, narrate, repeat. When the session reaches a terminal
//! state the loop returns instead of drawing the grid again.

use std::io::Write;

use forest_core::{RandomSource, Session, SessionState};

use crate::display::{render_events, render_grid, render_separator, render_status};
use crate::error::TuiError;
use crate::prompt::DirectionPrompt;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Escaped,
    Defeated,
    /// The prompt was closed before the game finished.
    Abandoned,
}

/// Drive `session` until it ends or the prompt gives up.
pub fn run<R, P, W>(session: &mut Session<R>, prompt: &mut P, out: &mut W) -> Result<Ending, TuiError>
where
    R: RandomSource,
    P: DirectionPrompt + ?Sized,
    W: Write,
{
    loop {
        render_status(session, out)?;
        render_grid(session, out)?;
        out.flush()?;

        let Some(dir) = prompt.prompt_direction()? else {
            log::info!("game abandoned after {} turns", session.turns());
            return Ok(Ending::Abandoned);
        };

        let report = session.take_turn(dir);
        render_events(&report.events, out)?;
        render_separator(out)?;

        match report.state {
            SessionState::AwaitingInput => {}
            SessionState::Escaped => return Ok(Ending::Escaped),
            SessionState::Defeated(_) => return Ok(Ending::Defeated),
        }
    }
}
