use anchor_lang::prelude::*;

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Owner of the distributor
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Tokens moved into the vault at creation
    pub initial_deposit: u64,
}

/// Event emitted when the claim root is replaced
#[event]
pub struct ClaimRootSet {
    pub distributor: Pubkey,
    pub claim_root: [u8; 32],
    /// Activation flag after the update; a zero root closes claims
    pub active: bool,
}

/// Event emitted when the claim fee changes
#[event]
pub struct FeeSet {
    pub distributor: Pubkey,
    pub fee: u64,
}

/// Event emitted when claims are opened or closed
#[event]
pub struct ActiveToggled {
    pub distributor: Pubkey,
    /// Flag value after the toggle
    pub active: bool,
}

/// Event emitted when tokens are claimed
#[event]
pub struct AirdropClaimed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount of tokens transferred to the claimant
    pub amount: u64,
}

/// Event emitted when accrued fees are withdrawn
#[event]
pub struct NativeWithdrawn {
    pub distributor: Pubkey,
    pub recipient: Pubkey,
    /// Lamports moved out of the distributor account
    pub amount: u64,
}

/// Event emitted when the owner pulls tokens from the vault
#[event]
pub struct TokensWithdrawn {
    pub distributor: Pubkey,
    pub recipient_token_account: Pubkey,
    pub amount: u64,
}

/// Event emitted when ownership moves to a new key
#[event]
pub struct OwnershipTransferred {
    pub distributor: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
