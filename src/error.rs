use thiserror::Error;

/// A broken algebraic law, with the offending operands rendered via `Debug`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LawViolation {
    #[error("associativity violated for a={a}, b={b}, c={c}: (a·b)·c = {left} but a·(b·c) = {right}")]
    Associativity {
        a: String,
        b: String,
        c: String,
        left: String,
        right: String,
    },

    #[error("left identity violated for a={a}: empty·a = {result}")]
    LeftIdentity { a: String, result: String },

    #[error("right identity violated for a={a}: a·empty = {result}")]
    RightIdentity { a: String, result: String },
}

#[derive(Error, Debug)]
pub enum MonoidalError {
    #[error("Law violation: {0}")]
    LawViolation(#[from] LawViolation),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Cannot parse {value:?} as {expected}")]
    Parse { value: String, expected: &'static str },
}

pub type Result<T> = std::result::Result<T, MonoidalError>;
