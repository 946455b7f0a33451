// domain_registry/instructions/open/register_domain.rs

// external dependencies
use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    errors::RegistryError,
    state::{
        DomainEntry, DomainList, Registry, DOMAIN_ENTRY_SEED, DOMAIN_LIST_SEED, REGISTRY_SEED,
    },
    utils::current_timestamp,
    validation::is_valid_domain,
};

#[derive(Accounts)]
#[instruction(name: String)]
pub struct RegisterDomain<'info> {
    #[account(mut)]
    pub controller: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init_if_needed,
        payer = controller,
        space = ANCHOR_DISCRIMINATOR_SIZE + DomainList::INIT_SPACE,
        seeds = [DOMAIN_LIST_SEED, controller.key().as_ref()],
        bump
    )]
    pub domain_list: Account<'info, DomainList>,

    // One account per registration, indexed by the controller's running count
    #[account(
        init,
        payer = controller,
        space = DomainEntry::space(name.len()),
        seeds = [
            DOMAIN_ENTRY_SEED,
            controller.key().as_ref(),
            domain_list.count.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub domain_entry: Account<'info, DomainEntry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterDomain>, name: String, amount: u64) -> Result<()> {
    ctx.accounts.registry.ensure_fee_paid(amount)?;

    require!(is_valid_domain(&name), RegistryError::InvalidDomain);

    // Collect the full payment, anything above the fee is kept as well
    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.controller.to_account_info(),
                to: ctx.accounts.registry.to_account_info(),
            },
        ),
        amount,
    )?;

    let controller = ctx.accounts.controller.key();
    let timestamp = current_timestamp()?;

    let domain_list = &mut ctx.accounts.domain_list;
    domain_list.controller = controller;
    domain_list.bump = ctx.bumps.domain_list;
    let index = domain_list.claim_next_index()?;

    ctx.accounts.domain_entry.set_inner(DomainEntry {
        controller,
        name: name.clone(),
        registered_at: timestamp,
        bump: ctx.bumps.domain_entry,
    });

    let event = ctx
        .accounts
        .registry
        .record_registration(controller, name, timestamp)?;

    msg!(
        "Registered {} for {} at index {}, {} registered in total",
        event.domain,
        controller,
        index,
        event.total_registered
    );

    emit!(event);

    Ok(())
}
