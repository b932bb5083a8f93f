use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for handing the distributor to a new owner
 *
 * Access Control: Only the current owner
 *
 * The PDA seeds use the immutable `base` key, so the account address does not
 * change with ownership.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut)]
    pub distributor: Account<'info, ClaimDistributor>,

    #[account(constraint = distributor.is_owner(&owner.key()) @ DistributorError::Unauthorized)]
    pub owner: Signer<'info>,
}

pub fn handle_transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let previous_owner = distributor.transfer_ownership(new_owner)?;

    emit_cpi!(OwnershipTransferred {
        distributor: distributor.key(),
        previous_owner,
        new_owner,
    });

    Ok(())
}
