use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/**
 * Main distributor state account
 *
 * Holds the committed eligibility root, the activation gate, the per-claim
 * fee and the references to the asset being distributed. Fees collected from
 * claimants accrue as lamports on this same account.
 *
 * Derivation: ["distributor", token_mint, base]
 *
 * Lifecycle:
 * 1. Created during create_distributor with root = 0, fee = 0, active = false
 * 2. Updated by the owner through the administrative instructions
 * 3. Never closed; withdrawals leave the state in place
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ClaimDistributor {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Key that created the distributor
    /// - Part of the PDA seeds, fixed for the account's lifetime
    pub base: Pubkey,

    /// Owner of the distributor
    /// - The only key allowed to run administrative instructions
    /// - Replaced only through transfer_ownership
    pub owner: Pubkey,

    /// Token mint address
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - Derived from: ["vault", distributor_key]
    pub token_vault: Pubkey,

    /// Merkle root committing to the eligibility set
    /// - All zeros means no eligibility set is configured
    pub claim_root: [u8; 32],

    /// Lamports a claimant must attach to each claim
    pub fee: u64,

    /// Claims are accepted only while this is true
    /// - Can only become true while claim_root is non-zero
    pub active: bool,
}

impl ClaimDistributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimDistributor>();

    /// Authorization predicate shared by every administrative instruction
    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    pub fn has_claim_root(&self) -> bool {
        self.claim_root != [0; 32]
    }

    /// Replaces the claim root and returns the activation flag afterwards.
    ///
    /// A zero root also closes the gate, so an active distributor always has
    /// a root to verify against.
    pub fn set_claim_root(&mut self, claim_root: [u8; 32]) -> bool {
        self.claim_root = claim_root;
        if !self.has_claim_root() {
            self.active = false;
        }
        self.active
    }

    /// Flips the activation gate and returns the new value.
    ///
    /// Opening requires a committed root; closing is unconditional and keeps
    /// the root as is.
    pub fn toggle_active(&mut self) -> Result<bool> {
        if !self.active {
            require!(self.has_claim_root(), DistributorError::RootNotSet);
        }
        self.active = !self.active;
        Ok(self.active)
    }

    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> Result<Pubkey> {
        require!(new_owner != Pubkey::default(), DistributorError::InvalidOwner);
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }

    /// Seeds the distributor signs vault transfers with
    pub fn signer_seeds(&self) -> [&[u8]; 4] {
        [
            DISTRIBUTOR_SEED.as_bytes(),
            self.token_mint.as_ref(),
            self.base.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }
}

/// Lamports held above the rent-exempt floor, i.e. the accrued fee balance
pub fn withdrawable_lamports(lamports: u64, rent_floor: u64) -> u64 {
    lamports.saturating_sub(rent_floor)
}
