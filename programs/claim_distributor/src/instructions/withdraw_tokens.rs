use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for withdrawing tokens from the vault
 *
 * Access Control: Only the owner can withdraw
 *
 * Business Logic:
 * - Transfers an arbitrary amount to any token account of the distributor's mint
 * - Allowed while claims are active; there is no reserve for pending claims
 * - The vault balance is not pre-checked, so an oversized request fails with
 *   the token program's own insufficient-funds error
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawTokens<'info> {
    pub distributor: Account<'info, ClaimDistributor>,

    /// Token vault holding the pool
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Token account credited with the withdrawal
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ DistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(constraint = distributor.is_owner(&owner.key()) @ DistributorError::Unauthorized)]
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
    let distributor = &ctx.accounts.distributor;
    let seeds = distributor.signer_seeds();
    let signer = &[&seeds[..]];

    transfer_token(
        distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    msg!("Withdrew {} tokens from vault", amount);

    emit_cpi!(TokensWithdrawn {
        distributor: distributor.key(),
        recipient_token_account: ctx.accounts.recipient_token_account.key(),
        amount,
    });

    Ok(())
}
