use thiserror::Error;

/// Errors produced while turning card tokens into cards.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum ParseHandError {
    #[error("Card token {0:?} has an invalid length")]
    InvalidTokenLength(String),

    #[error("Unrecognized value token {0:?}")]
    UnrecognizedValueToken(String),

    #[error("Unrecognized suit character {0:?}")]
    UnrecognizedSuitChar(char),

    #[error("No card tokens in the input")]
    EmptyInput,
}

/// Errors produced while evaluating already-parsed cards.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum EvalError {
    #[error("Expected {expected} cards but got {got}")]
    InvalidHandSize { expected: usize, got: usize },
}

/// Umbrella error for operations that both parse and evaluate.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum HandError {
    #[error(transparent)]
    Parse(#[from] ParseHandError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
