// domain_registry/instructions/admin/withdraw.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    errors::RegistryError,
    state::{Registry, REGISTRY_SEED},
    utils::{move_lamports, withdrawable_lamports},
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        has_one = owner @ RegistryError::NotOwner,
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let registry = ctx.accounts.registry.to_account_info();
    let owner = ctx.accounts.owner.to_account_info();

    // The registry keeps its rent exempt minimum so the account survives
    let rent_exempt_minimum = Rent::get()?.minimum_balance(registry.data_len());
    let amount = withdrawable_lamports(registry.lamports(), rent_exempt_minimum);

    move_lamports(&registry, &owner, amount)?;

    msg!("Withdrew {} lamports to {}", amount, owner.key);

    Ok(())
}
