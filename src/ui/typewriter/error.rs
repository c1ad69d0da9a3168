use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}
