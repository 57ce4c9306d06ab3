//! # Faults
//!
//! Faults are first-class values: every computation body returns
//! `Result<_, Fault>` and combinators thread them through with `?`.
//!
//! There are exactly two kinds:
//!
//! - **Configuration**: a combinator was wired up wrong. The only way to
//!   trigger this at run time is a fault handler that yields no fallback.
//! - **Computation**: the wrapped body (or a `before`/`after` transform, or a
//!   fallback) failed while running.
//!
//! [`crate::capability::Recover::handle`] is the only place a fault is ever
//! intercepted, and it intercepts at most one per guarded call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A fault raised while building or running a callable.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fault {
    /// A combinator was configured with a missing operand.
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    /// The wrapped computation failed.
    #[error("Computation fault: {message}")]
    Computation { message: String },
}

impl Fault {
    /// Create a configuration fault.
    pub fn configuration(reason: impl Into<String>) -> Self {
        Fault::Configuration {
            reason: reason.into(),
        }
    }

    /// Create a computation fault.
    pub fn computation(message: impl Into<String>) -> Self {
        Fault::Computation {
            message: message.into(),
        }
    }

    /// Capture any error raised by user code as a computation fault.
    pub fn from_error<E: std::error::Error>(err: E) -> Self {
        Fault::computation(err.to_string())
    }

    /// The fault raised when a handler hands back no fallback.
    pub fn missing_fallback() -> Self {
        Fault::configuration("the fault handler produced no fallback")
    }

    /// True for faults caused by how the pipeline was assembled.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Fault::Configuration { .. })
    }

    /// True for faults raised while a body ran.
    pub fn is_computation(&self) -> bool {
        matches!(self, Fault::Computation { .. })
    }
}
