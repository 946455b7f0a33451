// domain_registry/utils.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::errors::RegistryError;

pub fn current_timestamp() -> Result<u64> {
    // A clock before the unix epoch is reported as 0
    Ok(Clock::get()?.unix_timestamp.max(0) as u64)
}

/// Lamports an account can release while staying rent exempt.
pub fn withdrawable_lamports(balance: u64, rent_exempt_minimum: u64) -> u64 {
    balance.saturating_sub(rent_exempt_minimum)
}

/// Moves lamports out of an account owned by this program.
pub fn move_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let debited = from
        .lamports()
        .checked_sub(amount)
        .ok_or(RegistryError::TransferFailed)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(RegistryError::TransferFailed)?;

    **from.try_borrow_mut_lamports()? = debited;
    **to.try_borrow_mut_lamports()? = credited;

    Ok(())
}
