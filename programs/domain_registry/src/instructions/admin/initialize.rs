// domain_registry/instructions/admin/initialize.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    constants::{ANCHOR_DISCRIMINATOR_SIZE, DEFAULT_REGISTRATION_FEE},
    state::{Registry, REGISTRY_SEED},
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR_SIZE + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, registration_fee: Option<u64>) -> Result<()> {
    let registration_fee = registration_fee.unwrap_or(DEFAULT_REGISTRATION_FEE);

    ctx.accounts.registry.set_inner(Registry {
        owner: ctx.accounts.owner.key(),
        registration_fee,
        total_registered: 0,
        bump: ctx.bumps.registry,
    });

    msg!(
        "Initialized the registry for owner {} with a fee of {} lamports",
        ctx.accounts.owner.key(),
        registration_fee
    );

    Ok(())
}
