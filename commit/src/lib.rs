//! `capstan-commit` — block-context codec and L1 commit cost estimation.
//!
//! This crate turns an L2 block into the fixed 60-byte commitment record
//! the L1 settlement contract consumes, and computes upper-bound estimates
//! of the calldata bytes and L1 gas a commit transaction will cost.
//!
//! ## Architecture
//!
//! - [`codec`] — the versioned block-context wire layout (encode + decode)
//! - [`tx`] — canonical legacy-transaction form for exact payload sizing
//! - [`estimate`] — calldata-size and commit-gas upper bounds
//!
//! Every operation is a pure function of `(block, counter)`. Nothing here
//! performs I/O or holds cross-call state, so concurrent calls need no
//! coordination.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod codec;
pub mod estimate;
pub mod tx;

// Re-export key operations for convenience.
pub use codec::{decode_block_context, encode_block_context, BLOCK_CONTEXT_BYTES};
pub use estimate::{estimate_commit_calldata_size, estimate_commit_gas};
pub use tx::LegacyTxPayload;
