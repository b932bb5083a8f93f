use anchor_lang::prelude::*;

declare_id!("2TBsmTSSoJ4XHBJewvKRVzMpoomzByZVzZJUrxc7mECY");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Claim Distributor Program
 *
 * Lets a fixed set of recipients, committed ahead of time as a merkle root,
 * each withdraw a pre-assigned amount of one token from a shared vault.
 *
 * Key Features:
 * - Sorted-pair merkle proofs over leaves hash(claimant ‖ amount ‖ claim index)
 * - Per-claimant nonces: every successful claim moves the claimant to the next index
 * - Replay guard keyed by the hash of the submitted proof path
 * - Per-claim fee in lamports, accrued on the distributor and withdrawable by the owner
 * - Owner-controlled activation gate that cannot open without a root
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Distributor PDA: root, fee, activation flag, owner; also holds collected fees
 * - Token Vault PDA: holds the claimable pool
 * - Claimant Nonce PDAs: successful claim count per claimant
 * - Proof Receipt PDAs: one per consumed proof path
 *
 * Workflow:
 * 1. Owner creates the distributor and funds the vault
 * 2. Owner sets the claim root and fee, then activates claims
 * 3. Claimants claim with their proofs, paying the fee
 * 4. Owner withdraws fees and, when needed, leftover tokens
 */
#[program]
pub mod claim_distributor {
    use super::*;

    /**
     * Creates a new claim distributor
     *
     * @param initial_deposit - Tokens moved from the owner into the vault, may be zero
     *
     * Access Control: Anyone; the signer becomes the owner
     */
    pub fn create_distributor(ctx: Context<CreateDistributor>, initial_deposit: u64) -> Result<()> {
        handle_create_distributor(ctx, initial_deposit)
    }

    /**
     * Replaces the merkle root claims are verified against
     *
     * Access Control: Owner only
     */
    pub fn set_claim_root(ctx: Context<SetClaimRoot>, claim_root: [u8; 32]) -> Result<()> {
        handle_set_claim_root(ctx, claim_root)
    }

    /**
     * Sets the lamports required with each claim
     *
     * Access Control: Owner only
     */
    pub fn set_fee(ctx: Context<SetFee>, fee: u64) -> Result<()> {
        handle_set_fee(ctx, fee)
    }

    /**
     * Opens or closes claims
     *
     * Access Control: Owner only
     * Note: Opening fails while the claim root is zero
     */
    pub fn toggle_active(ctx: Context<ToggleActive>) -> Result<()> {
        handle_toggle_active(ctx)
    }

    /**
     * Sends all accrued fee lamports to a recipient
     *
     * Access Control: Owner only
     */
    pub fn withdraw_native(ctx: Context<WithdrawNative>) -> Result<()> {
        handle_withdraw_native(ctx)
    }

    /**
     * Transfers tokens out of the vault
     *
     * Access Control: Owner only
     */
    pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
        handle_withdraw_tokens(ctx, amount)
    }

    /**
     * Hands administrative control to another key
     *
     * Access Control: Owner only
     */
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        handle_transfer_ownership(ctx, new_owner)
    }

    /**
     * Claims tokens with merkle proof verification
     *
     * @param amount - Token amount committed in the claimant's leaf
     * @param attached_value - Lamports paid with the claim, must cover the fee
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Any user with valid merkle proof
     */
    pub fn claim(
        ctx: Context<Claim>,
        amount: u64,
        attached_value: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, amount, attached_value, proof)
    }
}
