use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;
use crate::utils::release_lamports;

/**
 * Account context for withdrawing accrued claim fees
 *
 * Access Control: Only the owner can withdraw
 *
 * Business Logic:
 * - Moves every lamport above the distributor's rent-exempt floor
 * - The distributor account and its state stay in place
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawNative<'info> {
    #[account(mut)]
    pub distributor: Account<'info, ClaimDistributor>,

    /// Account credited with the fees
    /// CHECK: Any writable account may receive lamports; a rejected credit fails the instruction
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    #[account(constraint = distributor.is_owner(&owner.key()) @ DistributorError::Unauthorized)]
    pub owner: Signer<'info>,
}

pub fn handle_withdraw_native(ctx: Context<WithdrawNative>) -> Result<()> {
    let distributor_info = ctx.accounts.distributor.to_account_info();
    let recipient_info = ctx.accounts.recipient.to_account_info();

    let rent_floor = Rent::get()?.minimum_balance(distributor_info.data_len());
    let amount = withdrawable_lamports(distributor_info.lamports(), rent_floor);

    release_lamports(&distributor_info, &recipient_info, amount)?;

    msg!("Withdrew {} lamports of fees", amount);

    emit_cpi!(NativeWithdrawn {
        distributor: ctx.accounts.distributor.key(),
        recipient: ctx.accounts.recipient.key(),
        amount,
    });

    Ok(())
}
