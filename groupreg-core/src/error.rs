//! Error types for bitmap and named-group operations

use alloc::string::String;
use thiserror::Error;

/// Outcome classification shared by every registry operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Operation completed
    Success,
    /// Caller passed an invalid argument
    BadArg,
    /// Allocation or resource failure
    Os,
    /// Name already bound to a different group
    Exists,
    /// Lookup found nothing
    Unknown,
}

impl Status {
    /// Classify any result
    pub fn of<T>(result: &Result<T>) -> Status {
        match result {
            Ok(_) => Status::Success,
            Err(err) => err.status(),
        }
    }

    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Status::Success => "success",
            Status::BadArg => "bad argument",
            Status::Os => "operating system error",
            Status::Exists => "already exists",
            Status::Unknown => "unknown",
        };
        write!(f, "{msg}")
    }
}

/// Errors that can occur during bitmap and registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// Invalid argument
    #[error("bad argument: {0}")]
    BadArg(&'static str),
    /// Allocation failure
    #[error("allocation failure: {0}")]
    Os(&'static str),
    /// Configured group limit reached
    #[error("group limit of {limit} reached")]
    CapacityExceeded { limit: usize },
    /// Name is already bound to another group index
    #[error("\"{name}\" is already bound to group {index}")]
    Exists { name: String, index: usize },
    /// No such group, name or item
    #[error("unknown: {0}")]
    Unknown(String),
}

impl GroupError {
    /// Status category for this error
    pub fn status(&self) -> Status {
        match self {
            GroupError::BadArg(_) => Status::BadArg,
            GroupError::Os(_) | GroupError::CapacityExceeded { .. } => Status::Os,
            GroupError::Exists { .. } => Status::Exists,
            GroupError::Unknown(_) => Status::Unknown,
        }
    }

    /// Lookup misses are routinely treated as "false" or "empty" by callers
    pub fn is_unknown(&self) -> bool {
        matches!(self, GroupError::Unknown(_))
    }

    /// Lookup miss naming what was not found
    pub fn unknown(what: impl Into<String>) -> Self {
        GroupError::Unknown(what.into())
    }
}

/// Result type for group registry operations
pub type Result<T> = core::result::Result<T, GroupError>;
