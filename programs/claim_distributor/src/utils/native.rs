use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

/// Moves the attached claim value from the claimant into the distributor
pub fn collect_fee<'a>(
    payer: AccountInfo<'a>,
    distributor: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = Transfer {
        from: payer,
        to: distributor,
    };

    transfer(CpiContext::new(system_program, cpi_accounts), amount)
}

/// Debits lamports from an account owned by this program
///
/// The system program cannot move lamports out of a program-owned account,
/// so the balances are adjusted directly.
pub fn release_lamports<'a>(
    from: &AccountInfo<'a>,
    to: &AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    from.sub_lamports(amount)?;
    to.add_lamports(amount)?;
    Ok(())
}
