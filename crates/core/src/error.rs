//! Error types for termstore
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::field::Rejection;
use crate::payload::{RefexAccess, RefexKind};
use crate::types::{ComponentKind, Nid};
use std::io;
use thiserror::Error;

/// Result type alias for termstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for termstore
#[derive(Debug, Error)]
pub enum Error {
    /// A proposed field value or commit violates a validation rule
    #[error("Rejected edit: {0}")]
    RejectedEdit(Rejection),

    /// The analog was seeded from a version that is no longer the latest
    #[error("Stale basis for {nid}: analog seeded at generation {basis}, chronicle is at {current}")]
    StaleBasis {
        /// Component the commit targeted
        nid: Nid,
        /// History length the analog was seeded from
        basis: usize,
        /// History length at commit time
        current: usize,
    },

    /// A refex value was read or written through a slot its tag lacks
    #[error("Invalid slot access: requested {requested}, value is {actual}")]
    InvalidSlotAccess {
        /// What the caller asked for
        requested: RefexAccess,
        /// Actual tag of the value
        actual: RefexKind,
    },

    /// No chronicle of the requested kind exists for the identity
    #[error("Identity not found: {nid} (expected kind {kind:?})")]
    IdentityNotFound {
        /// Identity looked up
        nid: Nid,
        /// Kind the caller expected, if any
        kind: Option<ComponentKind>,
    },

    /// Configuration could not be parsed or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while loading configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Shorthand for a field-level `RejectedEdit`
    pub fn rejected(nid: Nid, field: crate::field::Field, reason: impl Into<String>) -> Self {
        Error::RejectedEdit(Rejection::field(nid, field, reason))
    }

    /// Whether the caller can recover by correcting input or re-seeding
    ///
    /// `InvalidSlotAccess` is a programming defect and is not recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::RejectedEdit(_) | Error::StaleBasis { .. })
    }

    /// The rejection carried by a `RejectedEdit`
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Error::RejectedEdit(r) => Some(r),
            _ => None,
        }
    }
}

impl From<Rejection> for Error {
    fn from(rejection: Rejection) -> Self {
        Error::RejectedEdit(rejection)
    }
}
