use std::io;

use forest_core::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid game setup: {0}")]
    Config(#[from] ConfigError),
}
