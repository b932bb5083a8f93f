use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new claim distributor
 *
 * This instruction initializes a distributor for one token mint:
 * - Creates the distributor PDA with the signer as owner and base
 * - Creates a token vault PDA owned by the distributor
 * - Moves an initial deposit from the owner into the vault when it is non-zero
 *
 * The owner's token account is always required, even for a zero deposit.
 *
 * Claim root, fee and activation flag start at zero / false regardless of
 * the deposit.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDistributor<'info> {
    /// The main distributor account (PDA)
    /// - Derived from: ["distributor", token_mint, owner]
    #[account(
        init,
        payer = owner,
        space = ClaimDistributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref(),
        ],
        bump
    )]
    pub distributor: Account<'info, ClaimDistributor>,

    /// Token vault account (PDA) that holds the claimable pool
    /// - Controlled by the distributor PDA as token authority
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account funding the initial deposit
    /// - Required even when initial_deposit is zero; no transfer happens then
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The creator, recorded as both owner and base
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates a new claim distributor
 *
 * @param ctx - The account context containing all required accounts
 * @param initial_deposit - Tokens to move into the vault now, may be zero
 */
pub fn handle_create_distributor(
    ctx: Context<CreateDistributor>,
    initial_deposit: u64,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    distributor.bump = ctx.bumps.distributor;
    distributor.base = ctx.accounts.owner.key();
    distributor.owner = ctx.accounts.owner.key();
    distributor.token_mint = ctx.accounts.token_mint.key();
    distributor.token_vault = ctx.accounts.token_vault.key();
    // Note: claim_root, fee and active keep their default values

    if initial_deposit > 0 {
        transfer_token(
            ctx.accounts.owner.to_account_info(),
            ctx.accounts.owner_token_account.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            initial_deposit,
            ctx.accounts.token_mint.decimals,
            None, // Owner-signed transfer
        )?;
    }

    emit_cpi!(DistributorCreated {
        distributor: ctx.accounts.distributor.key(),
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        initial_deposit,
    });

    Ok(())
}
