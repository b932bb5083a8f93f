use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Proof receipt account (replay guard entry)
 *
 * Marks one proof path as spent. The key is the hash of the full serialized
 * sibling path, so the same path can never be used twice against a
 * distributor, whoever submits it.
 *
 * Derivation: ["proof", distributor_key, proof_fingerprint]
 *
 * Lifecycle:
 * 1. Created on the first claim that uses the path (using init_if_needed)
 * 2. Marked consumed when that claim succeeds; a failed claim reverts the creation
 * 3. Never closed
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ProofReceipt {
    /// Hash of the proof path this receipt guards
    pub fingerprint: [u8; 32],

    /// Claimant whose successful claim consumed the path
    pub claimant: Pubkey,

    pub consumed: bool,
}

impl ProofReceipt {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ProofReceipt>();

    pub fn consume(&mut self, fingerprint: [u8; 32], claimant: Pubkey) -> Result<()> {
        require!(!self.consumed, DistributorError::AlreadyClaimed);
        self.fingerprint = fingerprint;
        self.claimant = claimant;
        self.consumed = true;
        Ok(())
    }
}
