use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequencerError {
    #[error("loading sequence already started")]
    AlreadyStarted,

    #[error("loading sequence was torn down")]
    TornDown,

    #[error("loading sequence ended without completing")]
    Abandoned,
}
