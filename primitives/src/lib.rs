//! `capstan-primitives` — foundational types for the capstan commitment layer.
//!
//! This crate provides the block and transaction types consumed by the
//! block-context codec and the commit cost estimator, the closed
//! transaction-kind variant, the error types, and the versioned L1 gas
//! schedule.
//!
//! Supports `#![no_std]` (use `default-features = false`).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod block;
pub mod error;
pub mod gas;

// Re-export commonly used types at the crate root for convenience.
pub use block::{Block, BlockContext, BlockHeader, TransactionKind, TransactionRecord};
pub use error::{CommitError, CommitResult};
pub use gas::GasSchedule;
