//! Errors surfaced by the checked built-ins and the configuration layer
//!
//! The plain built-ins follow a contract-by-caller discipline and panic on a
//! violated precondition. The `try_*` variants report the same conditions
//! through `BuiltinError` instead.

use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, BuiltinError>;

#[derive(Debug)]
pub enum BuiltinError {
    /// `xrange` was given a step of zero
    ZeroStep,
    /// A reducer that needs at least one element received none
    EmptySequence { builtin: &'static str },
    /// A secondary source of `map`/`zip` ran out before the first one
    ShortSource { builtin: &'static str, position: usize },
    /// Malformed runtime configuration
    Config { message: String },
    Io(io::Error),
}

impl fmt::Display for BuiltinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroStep => write!(f, "xrange() arg 3 must not be zero"),
            Self::EmptySequence { builtin } => {
                write!(f, "{}() arg is an empty sequence", builtin)
            }
            Self::ShortSource { builtin, position } => {
                write!(f, "{}() argument {} is shorter than the first", builtin, position)
            }
            Self::Config { message } => write!(f, "invalid runtime configuration: {}", message),
            Self::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for BuiltinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for BuiltinError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<toml::de::Error> for BuiltinError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config { message: err.to_string() }
    }
}

impl BuiltinError {
    /// Panic with this error's message.
    ///
    /// Used by the unchecked built-ins, whose preconditions belong to the caller.
    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{}", self)
    }
}
