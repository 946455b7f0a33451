// domain_registry/state/registry.rs

use anchor_lang::prelude::*;

use crate::{
    errors::RegistryError,
    events::{DomainRegistered, FeeUpdated},
};

#[constant]
pub const REGISTRY_SEED: &[u8] = b"registry";

#[account]
#[derive(InitSpace)]
pub struct Registry {
    pub owner: Pubkey,          // can update the fee and withdraw collected lamports
    pub registration_fee: u64, // minimum payment per registration, in lamports
    pub total_registered: u64, // registrations accepted across all controllers
    pub bump: u8,
}

impl Registry {
    pub fn ensure_fee_paid(&self, amount: u64) -> Result<()> {
        if amount < self.registration_fee {
            return err!(RegistryError::InsufficientFee);
        }

        Ok(())
    }

    /// Counts one accepted registration and returns the event announcing it.
    pub fn record_registration(
        &mut self,
        controller: Pubkey,
        domain: String,
        timestamp: u64,
    ) -> Result<DomainRegistered> {
        self.total_registered = self
            .total_registered
            .checked_add(1)
            .ok_or(ProgramError::ArithmeticOverflow)?;

        Ok(DomainRegistered {
            controller,
            domain,
            timestamp,
            total_registered: self.total_registered,
        })
    }

    pub fn set_registration_fee(&mut self, new_fee: u64) -> FeeUpdated {
        self.registration_fee = new_fee;

        FeeUpdated { new_fee }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(fee: u64) -> Registry {
        Registry {
            owner: Pubkey::new_unique(),
            registration_fee: fee,
            total_registered: 0,
            bump: 255,
        }
    }

    #[test]
    fn fee_gate() {
        let registry = registry(1_000);

        assert_eq!(
            registry.ensure_fee_paid(999).unwrap_err(),
            anchor_lang::error::Error::from(RegistryError::InsufficientFee)
        );
        assert_eq!(
            registry.ensure_fee_paid(0).unwrap_err(),
            anchor_lang::error::Error::from(RegistryError::InsufficientFee)
        );
        assert!(registry.ensure_fee_paid(1_000).is_ok());
        assert!(registry.ensure_fee_paid(u64::MAX).is_ok());
    }

    #[test]
    fn zero_fee_accepts_any_payment() {
        assert!(registry(0).ensure_fee_paid(0).is_ok());
    }

    #[test]
    fn registration_event_carries_new_total() {
        let mut registry = registry(0);
        let controller = Pubkey::new_unique();

        let first = registry
            .record_registration(controller, "a.b".to_string(), 100)
            .unwrap();
        let second = registry
            .record_registration(controller, "c.d".to_string(), 101)
            .unwrap();

        assert_eq!(
            first,
            DomainRegistered {
                controller,
                domain: "a.b".to_string(),
                timestamp: 100,
                total_registered: 1,
            }
        );
        assert_eq!(second.total_registered, 2);
        assert_eq!(registry.total_registered, 2);
    }

    #[test]
    fn total_does_not_wrap() {
        let mut registry = registry(0);
        registry.total_registered = u64::MAX;

        assert!(registry
            .record_registration(Pubkey::new_unique(), "a.b".to_string(), 0)
            .is_err());
        assert_eq!(registry.total_registered, u64::MAX);
    }

    #[test]
    fn fee_update_is_unbounded() {
        let mut registry = registry(1_000);

        assert_eq!(registry.set_registration_fee(0), FeeUpdated { new_fee: 0 });
        assert_eq!(registry.registration_fee, 0);

        assert_eq!(
            registry.set_registration_fee(u64::MAX),
            FeeUpdated { new_fee: u64::MAX }
        );
        assert_eq!(
            registry.ensure_fee_paid(u64::MAX - 1).unwrap_err(),
            anchor_lang::error::Error::from(RegistryError::InsufficientFee)
        );
    }
}
