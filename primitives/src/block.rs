//! Block and transaction record types for the commitment layer.
//!
//! These are the externally-owned inputs: an execution/retrieval component
//! populates them and the codec and estimator only read them. Nothing here
//! is mutated in place; every operation downstream is a pure function of
//! `(block, counter)`.

use alloc::string::String;
use alloc::vec::Vec;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// The block header fields the commitment layer reads.
///
/// `number` is kept at the source field's full width and bounds-checked
/// against u64 at encoding time rather than assumed to fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    /// Block number.
    pub number: U256,
    /// Block timestamp in seconds.
    pub timestamp: u64,
    /// Block gas limit.
    pub gas_limit: u64,
}

/// An L2 block: header plus ordered transaction list.
///
/// Transaction order is significant — it determines which L1 message's
/// queue index is last — and must be preserved as produced by the
/// execution layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block header.
    pub header: BlockHeader,
    /// Ordered transactions of the block.
    pub transactions: Vec<TransactionRecord>,
}

/// The transaction kinds the chain distinguishes for commitment purposes.
///
/// A closed variant: the encoding and gas rules differ exhaustively per
/// kind, so a new kind is a deliberate protocol extension, not a subtype.
/// Any transaction encoding other than the designated L1-message type is
/// [`TransactionKind::OrdinaryL2`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// A synthetic transaction popped from the L1 message queue. Its
    /// `nonce` is the queue index assigned by the settlement layer.
    L1Message,
    /// An ordinary L2 transaction.
    OrdinaryL2,
}

/// One transaction as handed over the boundary.
///
/// `data` stays in its hex boundary form; the estimator decodes it, so a
/// malformed payload surfaces as
/// [`PayloadDecodeFailure`](crate::CommitError::PayloadDecodeFailure)
/// instead of being dropped upstream. The remaining fields are opaque to
/// the commitment layer except for canonical re-serialization of ordinary
/// transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Sender nonce, or the queue index for `L1Message` records.
    pub nonce: u64,
    /// Gas limit of the transaction.
    pub gas: u64,
    /// Gas price of the transaction.
    pub gas_price: U256,
    /// Recipient; `None` is contract creation.
    #[serde(default)]
    pub to: Option<Address>,
    /// Transferred value.
    pub value: U256,
    /// Raw payload, 0x-prefixed hex.
    pub data: String,
    /// Signature v component.
    pub v: U256,
    /// Signature r component.
    pub r: U256,
    /// Signature s component.
    pub s: U256,
}

impl TransactionRecord {
    /// Returns true if this record is an L1-originated message.
    pub fn is_l1_message(&self) -> bool {
        self.kind == TransactionKind::L1Message
    }
}

impl Block {
    /// Returns the number of L1 messages this block pops from the queue.
    ///
    /// This is the span from `total_l1_messages_popped_before` up to and
    /// including the queue index of the last `L1Message` transaction in the
    /// block, so it also counts messages the execution layer skipped but
    /// which still occupy a queue slot. Returns 0 when the block carries no
    /// L1 messages, regardless of the counter.
    ///
    /// The caller-supplied counter must equal the queue index of the last
    /// L1 message included by the previous block, plus one; under that
    /// invariant it never exceeds any queue index in this block.
    pub fn num_l1_messages(&self, total_l1_messages_popped_before: u64) -> u64 {
        let mut last_queue_index = None;
        for tx in &self.transactions {
            if tx.kind == TransactionKind::L1Message {
                last_queue_index = Some(tx.nonce);
            }
        }
        match last_queue_index {
            // note: the last queue index included before this block is
            // total_l1_messages_popped_before - 1
            Some(index) => index - total_l1_messages_popped_before + 1,
            None => 0,
        }
    }

    /// Returns the number of ordinary L2 transactions in this block.
    pub fn num_l2_transactions(&self) -> u64 {
        self.transactions
            .iter()
            .filter(|tx| tx.kind == TransactionKind::OrdinaryL2)
            .count() as u64
    }
}

/// The parsed form of the 60-byte block commitment record.
///
/// `base_fee` maps the reserved region at bytes [16,48); it decodes as
/// zero in the current layout version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockContext {
    /// Block number.
    pub number: u64,
    /// Block timestamp.
    pub timestamp: u64,
    /// Base fee; zero while the reserved region is unpopulated.
    pub base_fee: U256,
    /// Block gas limit.
    pub gas_limit: u64,
    /// Transaction count, including skipped L1 messages.
    pub num_transactions: u16,
    /// L1 message count, including skipped messages.
    pub num_l1_messages: u16,
}
