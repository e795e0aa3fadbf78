use thiserror::Error;

/// Conditions that stop an entry point with a non-zero exit.
#[derive(Debug, Error)]
pub enum ZenError {
    #[error("Please provide {0} in .env file")]
    MissingEnv(&'static str),

    #[error("Wrong chain! Expected {expected}, got {got}")]
    ChainMismatch { expected: u64, got: u64 },

    #[error("invalid AMOUNT `{input}`: {reason}")]
    InvalidAmount { input: String, reason: String },

    #[error("PRIVATE_KEY did not contain a valid hex encoded secret")]
    InvalidPrivateKey,
}
