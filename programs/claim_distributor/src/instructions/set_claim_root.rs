use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for replacing the claim root
 *
 * Access Control: Only the owner can set the claim root
 *
 * Business Logic:
 * - Each leaf commits to (claimant, amount, claim index)
 * - The root may be replaced at any time, including while claims are active
 * - A zero root is accepted and closes the distributor, which then cannot be
 *   re-activated until a new root is set
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetClaimRoot<'info> {
    #[account(mut)]
    pub distributor: Account<'info, ClaimDistributor>,

    #[account(constraint = distributor.is_owner(&owner.key()) @ DistributorError::Unauthorized)]
    pub owner: Signer<'info>,
}

pub fn handle_set_claim_root(ctx: Context<SetClaimRoot>, claim_root: [u8; 32]) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let active = distributor.set_claim_root(claim_root);

    emit_cpi!(ClaimRootSet {
        distributor: distributor.key(),
        claim_root,
        active,
    });

    Ok(())
}
