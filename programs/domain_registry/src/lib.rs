// domain_registry/lib.rs - top-level program file

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;
pub mod validation;

use instructions::*;

// program
declare_id!("53oppF9i3ErT76gpwRg8YivjT9sgs8X5c5QxGSgSKLeJ");

#[program]
pub mod domain_registry {
    use super::*;

    // Admin instructions

    pub fn initialize(ctx: Context<Initialize>, registration_fee: Option<u64>) -> Result<()> {
        instructions::admin::initialize::handler(ctx, registration_fee)
    }

    pub fn update_registration_fee(
        ctx: Context<UpdateRegistrationFee>,
        new_fee: u64,
    ) -> Result<()> {
        instructions::admin::update_registration_fee::handler(ctx, new_fee)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::admin::withdraw::handler(ctx)
    }

    // Open instructions

    pub fn register_domain(ctx: Context<RegisterDomain>, name: String, amount: u64) -> Result<()> {
        instructions::open::register_domain::handler(ctx, name, amount)
    }

    // Views

    pub fn get_my_domains(ctx: Context<GetMyDomains>, offset: u32) -> Result<DomainPage> {
        instructions::views::get_my_domains::handler(ctx, offset)
    }

    pub fn get_my_domain_records(
        ctx: Context<GetMyDomains>,
        offset: u32,
    ) -> Result<DomainRecordPage> {
        instructions::views::get_my_domains::records_handler(ctx, offset)
    }

    pub fn get_registration_fee(ctx: Context<ReadRegistry>) -> Result<u64> {
        instructions::views::read_registry::registration_fee_handler(ctx)
    }

    pub fn get_total_registered(ctx: Context<ReadRegistry>) -> Result<u64> {
        instructions::views::read_registry::total_registered_handler(ctx)
    }
}
