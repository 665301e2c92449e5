//! Error taxonomy for flag parsing.

use thiserror::Error;

use crate::flags::FlagKind;

/// Problems detected while parsing or setting flags.
///
/// In lenient mode these are collected into the [`ParseReport`](crate::ParseReport);
/// in strict mode the first one aborts the parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    /// A dash token whose name matches no registered flag.
    #[error("unknown flag '{token}'")]
    UnknownFlag { token: String },

    /// A flag given as `-name` that never received its value.
    #[error("flag '-{flag}' is missing a value")]
    MissingValue { flag: String },

    /// Numeric text that does not fit the flag's type.
    #[error("invalid {kind} value '{value}' for flag '-{flag}'")]
    InvalidNumericLiteral {
        flag: String,
        value: String,
        kind: FlagKind,
    },

    /// More than one flag registered under the same name.
    #[error("flag '-{name}' is registered more than once")]
    DuplicateName { name: String },

    /// Writing usage text failed.
    #[error("output error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FlagError {
    fn from(err: std::io::Error) -> Self {
        FlagError::Io(err.to_string())
    }
}
