use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Per-claimant nonce account
 *
 * Counts the successful claims a claimant has made against a distributor.
 * The next claim must prove a leaf committed to `nonce + 1`.
 *
 * Derivation: ["nonce", distributor_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on the claimant's first claim (using init_if_needed), starting at 0
 * 2. Incremented by exactly one on each successful claim
 * 3. Never closed
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ClaimantNonce {
    /// Number of successful claims so far
    pub nonce: u64,
}

impl ClaimantNonce {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimantNonce>();

    /// Claim index the next leaf must commit to
    pub fn next_index(&self) -> Result<u64> {
        self.nonce
            .checked_add(1)
            .ok_or_else(|| error!(DistributorError::ArithmeticOverflow))
    }

    pub fn advance(&mut self) -> Result<u64> {
        self.nonce = self.next_index()?;
        Ok(self.nonce)
    }
}
