use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{claim_leaf, collect_fee, proof_fingerprint, transfer_token, verify};
use crate::event::*;

/**
 * Account context for claiming tokens
 *
 * Eligible claimants present a merkle proof for the leaf
 * hash(claimant ‖ amount ‖ nonce + 1) and attach at least the current fee.
 * The proof path itself is recorded as spent, so a given path works once.
 *
 * Access Control: Any user with a valid merkle proof can claim
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(amount: u64, attached_value: u64, proof: Vec<[u8; 32]>)]
pub struct Claim<'info> {
    /// The distributor being claimed from
    /// - Receives the attached fee as lamports
    #[account(mut)]
    pub distributor: Account<'info, ClaimDistributor>,

    /// Claim counter for this claimant
    /// - Derived from: ["nonce", distributor_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimantNonce::LEN,
        seeds = [NONCE_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claimant_nonce: Account<'info, ClaimantNonce>,

    /// Replay guard for the submitted proof path
    /// - Derived from: ["proof", distributor_key, hash(proof)]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ProofReceipt::LEN,
        seeds = [PROOF_SEED.as_bytes(), distributor.key().as_ref(), proof_fingerprint(&proof).as_ref()],
        bump
    )]
    pub proof_receipt: Account<'info, ProofReceipt>,

    /// Token vault holding the pool
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ DistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The claimant
    /// - Pays the fee and the rent for the nonce and receipt accounts
    #[account(mut)]
    pub claimant: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Inputs of a claim as seen by the validation phase
#[derive(Debug, Clone, Copy)]
pub struct ClaimAttempt<'a> {
    pub claimant: &'a Pubkey,
    pub amount: u64,
    pub attached_value: u64,
    pub proof: &'a [[u8; 32]],
}

/**
 * Runs the claim checks in order and stops at the first failure
 *
 * 1. Distributor is active
 * 2. Attached value covers the fee
 * 3. Proof path not consumed yet
 * 4. Proof verifies the leaf for the claimant's next claim index
 * 5. Vault holds at least `amount`
 *
 * Reads only; nothing is written before every check has passed.
 */
pub fn validate_claim(
    distributor: &ClaimDistributor,
    claimant_nonce: &ClaimantNonce,
    proof_receipt: &ProofReceipt,
    vault_balance: u64,
    attempt: &ClaimAttempt,
) -> Result<()> {
    require!(distributor.active, DistributorError::NotActive);

    require!(
        attempt.attached_value >= distributor.fee,
        DistributorError::InsufficientFee
    );

    require!(!proof_receipt.consumed, DistributorError::AlreadyClaimed);

    let leaf = claim_leaf(attempt.claimant, attempt.amount, claimant_nonce.next_index()?);
    require!(
        verify(attempt.proof, distributor.claim_root, leaf),
        DistributorError::InvalidMerkleProof
    );

    require!(
        vault_balance >= attempt.amount,
        DistributorError::InsufficientBalance
    );

    Ok(())
}

/**
 * Processes a token claim
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Token amount committed in the claimant's leaf
 * @param attached_value - Lamports paid with the claim, retained in full
 * @param proof - Sibling hashes from the leaf up to the root
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    amount: u64,
    attached_value: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let claimant_key = ctx.accounts.claimant.key();

    // ===== VALIDATION PHASE =====

    validate_claim(
        &ctx.accounts.distributor,
        &ctx.accounts.claimant_nonce,
        &ctx.accounts.proof_receipt,
        ctx.accounts.token_vault.amount,
        &ClaimAttempt {
            claimant: &claimant_key,
            amount,
            attached_value,
            proof: &proof,
        },
    )?;

    // ===== EFFECTS PHASE (State Updates) =====

    ctx.accounts
        .proof_receipt
        .consume(proof_fingerprint(&proof), claimant_key)?;
    ctx.accounts.claimant_nonce.advance()?;

    // ===== INTERACTIONS PHASE =====

    collect_fee(
        ctx.accounts.claimant.to_account_info(),
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        attached_value,
    )?;

    let distributor = &ctx.accounts.distributor;
    let seeds = distributor.signer_seeds();
    let signer = &[&seeds[..]];

    transfer_token(
        distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(AirdropClaimed {
        distributor: distributor.key(),
        claimant: claimant_key,
        amount,
    });

    Ok(())
}
