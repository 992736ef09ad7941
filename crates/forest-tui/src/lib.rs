//! forest-tui: Terminal frontend
//!
//! Line-oriented rendering, the per-turn direction prompt and the loop that
//! drives a [`forest_core::Session`] to its end.

pub mod app;
pub mod display;
pub mod error;
pub mod input;
pub mod prompt;

pub use app::{Ending, run};
pub use error::TuiError;
pub use prompt::{DirectionPrompt, KeyPrompt, LinePrompt};
