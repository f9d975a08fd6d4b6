//! The L1 gas schedule used by commit cost estimation.
//!
//! These constants mirror the settlement contract's actual gas-metering
//! rules. They are carried as a value ([`GasSchedule`]) and passed to the
//! estimator, so a protocol upgrade swaps the table without touching the
//! estimation algorithm.

/// Gas per non-zero calldata byte.
pub const CALLDATA_NON_ZERO_BYTE_GAS: u64 = 16;

/// Gas for a cold storage read.
pub const COLD_SLOAD_GAS: u64 = 2_100;

/// Gas for an external call.
pub const CALL_GAS: u64 = 100;

/// Gas surcharge for accessing a warm address.
pub const WARM_ACCESS_GAS: u64 = 100;

/// Base gas for a KECCAK256 operation.
pub const KECCAK256_BASE_GAS: u64 = 30;

/// Gas per 32-byte word hashed by KECCAK256.
pub const KECCAK256_WORD_GAS: u64 = 6;

/// The gas-metering table of the target L1 settlement contract.
///
/// The estimator reads every cost through this table rather than through
/// literals, so protocol-version-specific tables can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasSchedule {
    /// Per-byte calldata gas. The estimator prices every byte as non-zero.
    pub calldata_non_zero_byte_gas: u64,
    /// Cold storage read of the L1 message queue.
    pub cold_sload_gas: u64,
    /// External call to the message queue contract.
    pub call_gas: u64,
    /// Warm-address-access surcharge for that call.
    pub warm_access_gas: u64,
    /// KECCAK256 base cost.
    pub keccak256_base_gas: u64,
    /// KECCAK256 per-word cost.
    pub keccak256_word_gas: u64,
}

impl GasSchedule {
    /// The schedule in force since the Berlin cost revision (EIP-2929).
    pub const fn berlin() -> Self {
        Self {
            calldata_non_zero_byte_gas: CALLDATA_NON_ZERO_BYTE_GAS,
            cold_sload_gas: COLD_SLOAD_GAS,
            call_gas: CALL_GAS,
            warm_access_gas: WARM_ACCESS_GAS,
            keccak256_base_gas: KECCAK256_BASE_GAS,
            keccak256_word_gas: KECCAK256_WORD_GAS,
        }
    }

    /// KECCAK256 hashing gas for `size` input bytes.
    pub const fn keccak256_gas(&self, size: u64) -> u64 {
        self.keccak256_base_gas + self.keccak256_word_gas * size.div_ceil(32)
    }
}

impl Default for GasSchedule {
    fn default() -> Self {
        Self::berlin()
    }
}
