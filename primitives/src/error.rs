//! Error types for the commitment layer.

use alloc::string::String;

use alloy_primitives::U256;
use thiserror::Error;

/// Errors produced by the block-context codec and the cost estimator.
///
/// Every variant is fatal for the call that produced it: no partial bytes
/// or degraded estimates accompany an error, and nothing is retried —
/// these are deterministic function failures, not transient faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// The block number does not fit the fixed layout's 64-bit field.
    #[error("block number {0} is not a uint64")]
    NumberOverflow(U256),

    /// The block pops more L1 messages than the 16-bit count field can hold.
    #[error("number of L1 messages {0} exceeds the uint16 maximum")]
    TooManyL1Messages(u64),

    /// The combined transaction count exceeds the 16-bit count field.
    #[error("number of transactions {0} exceeds the uint16 maximum")]
    TooManyTransactions(u64),

    /// A transaction's boundary payload is not valid hex.
    #[error("transaction payload is not valid hex: {0}")]
    PayloadDecodeFailure(String),

    /// A block-context buffer is shorter than the fixed record length.
    #[error("block context needs {expected} bytes, got {got}")]
    ContextTooShort {
        /// The fixed record length.
        expected: usize,
        /// The length actually supplied.
        got: usize,
    },
}

/// Convenience result type for the commitment layer.
pub type CommitResult<T> = core::result::Result<T, CommitError>;
