// domain_registry/events.rs

use anchor_lang::prelude::*;

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct DomainRegistered {
    pub controller: Pubkey,
    pub domain: String,
    pub timestamp: u64,
    pub total_registered: u64,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct FeeUpdated {
    pub new_fee: u64,
}
