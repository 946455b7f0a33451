// domain_registry/instructions/admin/update_registration_fee.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    errors::RegistryError,
    state::{Registry, REGISTRY_SEED},
};

#[derive(Accounts)]
pub struct UpdateRegistrationFee<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        has_one = owner @ RegistryError::NotOwner,
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

pub fn handler(ctx: Context<UpdateRegistrationFee>, new_fee: u64) -> Result<()> {
    let event = ctx.accounts.registry.set_registration_fee(new_fee);

    msg!("Set the registration fee to {} lamports", new_fee);

    emit!(event);

    Ok(())
}
