//! Canonical legacy-transaction form.
//!
//! Commit gas is priced off the exact serialized length of each ordinary
//! transaction as it will appear on L1. The boundary hands us the payload
//! in hex plus the remaining fields separately; this module reassembles
//! the canonical RLP list `[nonce, gas_price, gas, to, value, data, v, r, s]`
//! so that length can be measured without guessing at prefix sizes.

use alloc::string::ToString;

use alloy_primitives::{hex, Bytes, TxKind, U256};
use alloy_rlp::{Encodable, RlpEncodable};
use capstan_primitives::{CommitError, CommitResult, TransactionRecord};

/// A signed legacy transaction in its canonical field order.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable)]
pub struct LegacyTxPayload {
    /// Sender nonce.
    pub nonce: u64,
    /// Gas price.
    pub gas_price: U256,
    /// Gas limit.
    pub gas: u64,
    /// Recipient, or create.
    pub to: TxKind,
    /// Transferred value.
    pub value: U256,
    /// Call data.
    pub data: Bytes,
    /// Signature v component.
    pub v: U256,
    /// Signature r component.
    pub r: U256,
    /// Signature s component.
    pub s: U256,
}

impl LegacyTxPayload {
    /// Reassemble the canonical form from a boundary record.
    ///
    /// Fails with [`CommitError::PayloadDecodeFailure`] if the record's hex
    /// payload is malformed.
    pub fn from_record(record: &TransactionRecord) -> CommitResult<Self> {
        let data = hex::decode(&record.data)
            .map_err(|err| CommitError::PayloadDecodeFailure(err.to_string()))?;

        Ok(Self {
            nonce: record.nonce,
            gas_price: record.gas_price,
            gas: record.gas,
            to: record.to.into(),
            value: record.value,
            data: data.into(),
            v: record.v,
            r: record.r,
            s: record.s,
        })
    }

    /// Exact serialized byte length of this transaction.
    pub fn encoded_length(&self) -> u64 {
        Encodable::length(self) as u64
    }
}
