use std::{error::Error, fmt};

use backtrace::Backtrace;
use log::error;

/// The three ways an evaluation can fail.
///
/// They are kept apart so the caller can tell "bad configuration", "bad
/// data" and "broken evaluator" from each other.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// The requested mode/frame combination is not supported. Raised by
    /// setup, before any state exists.
    UnsupportedMode,

    /// A row carried a flag outside the two-valued discriminator. Fatal for
    /// the current partition only.
    InvalidFlag,

    /// The evaluator broke one of its own postconditions.
    InternalInvariant,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ErrorKind::UnsupportedMode => "unsupported mode",
            ErrorKind::InvalidFlag => "invalid flag",
            ErrorKind::InternalInvariant => "internal invariant violated",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub struct SmallError {
    kind: ErrorKind,
    details: String,
}

pub type SmallResult<T> = Result<T, SmallError>;

impl SmallError {
    pub fn new(kind: ErrorKind, msg: &str) -> SmallError {
        SmallError {
            kind,
            details: msg.to_string(),
        }
    }

    pub fn unsupported_mode(msg: &str) -> SmallError {
        Self::new(ErrorKind::UnsupportedMode, msg)
    }

    pub fn invalid_flag(msg: &str) -> SmallError {
        Self::new(ErrorKind::InvalidFlag, msg)
    }

    /// A defect in the evaluator itself. The backtrace is kept in the
    /// details so the report points at the faulty path.
    pub fn internal_invariant(msg: &str) -> SmallError {
        let bt = Backtrace::new();
        error!("msg: [{}], backtrace: {:?}", msg, bt);

        let details = format!("msg: [{}], backtrace: {:?}", msg, bt);
        Self::new(ErrorKind::InternalInvariant, &details)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

impl fmt::Display for SmallError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.details)
    }
}

impl Error for SmallError {}
