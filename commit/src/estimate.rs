//! Upper-bound estimates of what committing a block costs on L1.
//!
//! Safety requires over-estimation, not accuracy: a caller that sizes an
//! L1 submission from these numbers must never find the real commit
//! transaction larger or more expensive than estimated. Every
//! approximation below therefore rounds up.

use capstan_primitives::{Block, CommitResult, GasSchedule, TransactionKind};

use crate::tx::LegacyTxPayload;

// Per-field over-estimate of an ordinary transaction's encoded overhead:
// a one-byte length prefix plus the maximum possible width of each field.
const NONCE_FIELD_MAX: u64 = 1 + 8;
const GAS_FIELD_MAX: u64 = 1 + 8;
const GAS_PRICE_FIELD_MAX: u64 = 1 + 32;
const VALUE_FIELD_MAX: u64 = 1 + 32;
const SIGNATURE_FIELD_MAX: u64 = 1 + 65; // v, r, s
const TO_FIELD_MAX: u64 = 1 + 20;
const CHAIN_ID_FIELD_MAX: u64 = 1 + 8;

/// Encoded-field overhead charged per ordinary transaction when sizing
/// calldata.
const TX_FIELDS_OVERHEAD: u64 = NONCE_FIELD_MAX
    + GAS_FIELD_MAX
    + GAS_PRICE_FIELD_MAX
    + VALUE_FIELD_MAX
    + SIGNATURE_FIELD_MAX
    + TO_FIELD_MAX
    + CHAIN_ID_FIELD_MAX;

/// The commit encoding writes one u32 length field per transaction.
const PER_TX_LENGTH_FIELD_BYTES: u64 = 4;

/// Upper bound on the calldata bytes this block occupies in an L1 commit
/// transaction.
///
/// Sums each ordinary transaction's boundary payload length plus a fixed
/// per-field over-estimate of the encoded overhead. The payload is counted
/// in its hex boundary form, which bounds the decoded byte length from
/// above. L1 messages contribute nothing: they are not re-submitted as
/// calldata.
pub fn estimate_commit_calldata_size(block: &Block) -> u64 {
    let mut size: u64 = 0;
    for tx in &block.transactions {
        if tx.kind == TransactionKind::L1Message {
            continue;
        }
        size += tx.data.len() as u64;
        size += TX_FIELDS_OVERHEAD;
    }
    size
}

/// Upper bound on the L1 gas a commit transaction consumes for this block.
///
/// Each ordinary transaction is re-serialized into its canonical legacy
/// form; its exact length `n` contributes calldata gas with every byte
/// priced as non-zero, one u32 length field, and the KECCAK256 gas of
/// hashing `n` bytes for the L2 transaction hash. Each L1 message adds one
/// cold storage read of the message queue plus one external call to the
/// queue contract and the warm-address surcharge for it.
///
/// A payload that fails to decode aborts the whole estimate with
/// [`PayloadDecodeFailure`](capstan_primitives::CommitError::PayloadDecodeFailure):
/// an estimate that silently dropped a transaction would understate the
/// real cost.
pub fn estimate_commit_gas(block: &Block, schedule: &GasSchedule) -> CommitResult<u64> {
    let mut total: u64 = 0;
    let mut num_l1_messages: u64 = 0;

    for tx in &block.transactions {
        if tx.kind == TransactionKind::L1Message {
            num_l1_messages += 1;
            continue;
        }

        let payload_length = LegacyTxPayload::from_record(tx)?.encoded_length();
        total += schedule.calldata_non_zero_byte_gas * payload_length;
        total += schedule.calldata_non_zero_byte_gas * PER_TX_LENGTH_FIELD_BYTES;
        total += schedule.keccak256_gas(payload_length); // l2 tx hash
    }

    // One queue read and one call per message the settlement contract pops.
    total += schedule.cold_sload_gas * num_l1_messages;
    total += schedule.call_gas * num_l1_messages;
    total += schedule.warm_access_gas * num_l1_messages;

    Ok(total)
}
