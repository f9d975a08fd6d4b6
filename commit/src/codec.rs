//! The block-context wire layout.
//!
//! A block commits to L1 as a fixed 60-byte big-endian record:
//!
//! ```text
//! [0,8)    block number
//! [8,16)   timestamp
//! [16,48)  base fee — reserved, must be zero in this layout version
//! [48,56)  gas limit
//! [56,58)  number of transactions (u16, includes skipped L1 messages)
//! [58,60)  number of L1 messages (u16, includes skipped messages)
//! ```
//!
//! The layout is a versioned wire contract shared with the settlement
//! contract: any change to a field width or offset is a breaking protocol
//! change, not an internal refactor.

use alloy_primitives::U256;
use capstan_primitives::{Block, BlockContext, CommitError, CommitResult};

/// Length of the encoded block context in bytes.
pub const BLOCK_CONTEXT_BYTES: usize = 60;

// Field offsets of the current layout.
const NUMBER_OFFSET: usize = 0;
const TIMESTAMP_OFFSET: usize = 8;
/// Start of the reserved base-fee region; must stay zero-filled until a
/// layout bump populates it.
const BASE_FEE_OFFSET: usize = 16;
const BASE_FEE_BYTES: usize = 32;
const GAS_LIMIT_OFFSET: usize = 48;
const NUM_TRANSACTIONS_OFFSET: usize = 56;
const NUM_L1_MESSAGES_OFFSET: usize = 58;

/// Encode a block into its 60-byte commitment record.
///
/// Fails with [`CommitError::NumberOverflow`] if the block number does not
/// fit in 64 bits, and with [`CommitError::TooManyL1Messages`] or
/// [`CommitError::TooManyTransactions`] if either count exceeds its 16-bit
/// field. On error no bytes are returned.
pub fn encode_block_context(
    block: &Block,
    total_l1_messages_popped_before: u64,
) -> CommitResult<[u8; BLOCK_CONTEXT_BYTES]> {
    let number: u64 = block
        .header
        .number
        .try_into()
        .map_err(|_| CommitError::NumberOverflow(block.header.number))?;

    // note: both counts include skipped L1 messages
    let num_l1_messages = block.num_l1_messages(total_l1_messages_popped_before);
    if num_l1_messages > u64::from(u16::MAX) {
        return Err(CommitError::TooManyL1Messages(num_l1_messages));
    }

    let num_transactions = num_l1_messages + block.num_l2_transactions();
    if num_transactions > u64::from(u16::MAX) {
        return Err(CommitError::TooManyTransactions(num_transactions));
    }

    let mut bytes = [0u8; BLOCK_CONTEXT_BYTES];
    bytes[NUMBER_OFFSET..NUMBER_OFFSET + 8].copy_from_slice(&number.to_be_bytes());
    bytes[TIMESTAMP_OFFSET..TIMESTAMP_OFFSET + 8]
        .copy_from_slice(&block.header.timestamp.to_be_bytes());
    // [16,48) stays zero: the base-fee slot is reserved while EIP-1559 is
    // disabled on the chain.
    bytes[GAS_LIMIT_OFFSET..GAS_LIMIT_OFFSET + 8]
        .copy_from_slice(&block.header.gas_limit.to_be_bytes());
    bytes[NUM_TRANSACTIONS_OFFSET..NUM_TRANSACTIONS_OFFSET + 2]
        .copy_from_slice(&(num_transactions as u16).to_be_bytes());
    bytes[NUM_L1_MESSAGES_OFFSET..NUM_L1_MESSAGES_OFFSET + 2]
        .copy_from_slice(&(num_l1_messages as u16).to_be_bytes());

    Ok(bytes)
}

/// Decode a commitment record back into a [`BlockContext`].
///
/// Reads the documented offsets; extra trailing bytes are ignored so a
/// record can be peeled off the front of a larger batch buffer. Fails with
/// [`CommitError::ContextTooShort`] if fewer than
/// [`BLOCK_CONTEXT_BYTES`] are supplied.
pub fn decode_block_context(buf: &[u8]) -> CommitResult<BlockContext> {
    if buf.len() < BLOCK_CONTEXT_BYTES {
        return Err(CommitError::ContextTooShort {
            expected: BLOCK_CONTEXT_BYTES,
            got: buf.len(),
        });
    }

    Ok(BlockContext {
        number: read_u64_be(buf, NUMBER_OFFSET),
        timestamp: read_u64_be(buf, TIMESTAMP_OFFSET),
        base_fee: U256::from_be_slice(&buf[BASE_FEE_OFFSET..BASE_FEE_OFFSET + BASE_FEE_BYTES]),
        gas_limit: read_u64_be(buf, GAS_LIMIT_OFFSET),
        num_transactions: read_u16_be(buf, NUM_TRANSACTIONS_OFFSET),
        num_l1_messages: read_u16_be(buf, NUM_L1_MESSAGES_OFFSET),
    })
}

fn read_u64_be(buf: &[u8], offset: usize) -> u64 {
    let mut out = [0u8; 8];
    out.copy_from_slice(&buf[offset..offset + 8]);
    u64::from_be_bytes(out)
}

fn read_u16_be(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([buf[offset], buf[offset + 1]])
}
