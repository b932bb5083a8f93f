use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/// Account context for changing the per-claim fee (owner only)
#[event_cpi]
#[derive(Accounts)]
pub struct SetFee<'info> {
    #[account(mut)]
    pub distributor: Account<'info, ClaimDistributor>,

    #[account(constraint = distributor.is_owner(&owner.key()) @ DistributorError::Unauthorized)]
    pub owner: Signer<'info>,
}

pub fn handle_set_fee(ctx: Context<SetFee>, fee: u64) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    distributor.fee = fee;

    emit_cpi!(FeeSet {
        distributor: distributor.key(),
        fee,
    });

    Ok(())
}
