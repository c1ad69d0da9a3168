use std::io;

use thiserror::Error;

use crate::ui::loading::SequencerError;
use crate::ui::typewriter::TypewriterError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Sequencer(#[from] SequencerError),

    #[error(transparent)]
    Typewriter(#[from] TypewriterError),
}
