use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for opening or closing claims
 *
 * Access Control: Only the owner can toggle the flag
 *
 * Business Logic:
 * - Inactive -> Active requires a non-zero claim root
 * - Active -> Inactive is always allowed
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ToggleActive<'info> {
    #[account(mut)]
    pub distributor: Account<'info, ClaimDistributor>,

    #[account(constraint = distributor.is_owner(&owner.key()) @ DistributorError::Unauthorized)]
    pub owner: Signer<'info>,
}

pub fn handle_toggle_active(ctx: Context<ToggleActive>) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let active = distributor.toggle_active()?;

    msg!("Claims {}", if active { "opened" } else { "closed" });

    emit_cpi!(ActiveToggled {
        distributor: distributor.key(),
        active,
    });

    Ok(())
}
