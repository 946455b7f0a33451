// domain_registry/instructions/views/read_registry.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::state::{Registry, REGISTRY_SEED};

/// Read-only access to the registry singleton, shared by the getters below.
#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

pub fn registration_fee_handler(ctx: Context<ReadRegistry>) -> Result<u64> {
    Ok(ctx.accounts.registry.registration_fee)
}

pub fn total_registered_handler(ctx: Context<ReadRegistry>) -> Result<u64> {
    Ok(ctx.accounts.registry.total_registered)
}
