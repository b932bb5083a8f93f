use anchor_lang::prelude::*;

#[error_code]
pub enum DistributorError {
    // Access control errors
    #[msg("Only owner can perform this action")]
    Unauthorized,
    #[msg("New owner cannot be the default key")]
    InvalidOwner,

    // Activation errors
    #[msg("Claim root is not set")]
    RootNotSet,
    #[msg("Claims are not active")]
    NotActive,

    // Claim errors
    #[msg("Attached value is below the claim fee")]
    InsufficientFee,
    #[msg("Proof has already been used")]
    AlreadyClaimed,
    #[msg("Invalid merkle proof")]
    InvalidMerkleProof,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match distributor's token mint")]
    TokenMintMismatch,
}
