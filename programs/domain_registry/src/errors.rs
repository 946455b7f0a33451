// domain_registry/errors.rs

use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Payment is below the registration fee.")]
    InsufficientFee,
    #[msg("Domain name is not valid.")]
    InvalidDomain,
    #[msg("Signer is not the registry owner.")]
    NotOwner,
    #[msg("Lamport transfer could not be applied.")]
    TransferFailed,
    #[msg("Account does not match the expected domain entry.")]
    InvalidEntry,
}
