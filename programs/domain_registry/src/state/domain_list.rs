// domain_registry/state/domain_list.rs

use anchor_lang::prelude::*;

#[constant]
pub const DOMAIN_LIST_SEED: &[u8] = b"domains";

#[constant]
pub const DOMAIN_ENTRY_SEED: &[u8] = b"domain";

/// Per-controller counter; the n-th registration lives in the
/// `DomainEntry` PDA derived from `(controller, n)`.
#[account]
#[derive(InitSpace)]
pub struct DomainList {
    pub controller: Pubkey,
    pub count: u32, // entries created so far, also the next entry index
    pub bump: u8,
}

impl DomainList {
    /// Reserves the index for a new entry.
    pub fn claim_next_index(&mut self) -> Result<u32> {
        let index = self.count;
        self.count = index
            .checked_add(1)
            .ok_or(ProgramError::ArithmeticOverflow)?;

        Ok(index)
    }
}

#[account]
pub struct DomainEntry {
    pub controller: Pubkey,
    pub name: String,
    pub registered_at: u64, // unix timestamp of the registration
    pub bump: u8,
}

impl DomainEntry {
    pub fn space(name_len: usize) -> usize {
        8 + // discriminator
        32 + // controller
        4 + name_len + // name
        8 + // registered_at
        1 // bump
    }

    pub fn address(program_id: &Pubkey, controller: &Pubkey, index: u32) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[DOMAIN_ENTRY_SEED, controller.as_ref(), &index.to_le_bytes()],
            program_id,
        )
    }
}

/// A registration as returned by the views.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DomainRecord {
    pub name: String,
    pub registered_at: u64,
}

impl From<DomainEntry> for DomainRecord {
    fn from(entry: DomainEntry) -> Self {
        Self {
            name: entry.name,
            registered_at: entry.registered_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_are_handed_out_in_order() {
        let mut list = DomainList {
            controller: Pubkey::new_unique(),
            count: 0,
            bump: 254,
        };

        assert_eq!(list.claim_next_index().unwrap(), 0);
        assert_eq!(list.claim_next_index().unwrap(), 1);
        assert_eq!(list.claim_next_index().unwrap(), 2);
        assert_eq!(list.count, 3);
    }

    #[test]
    fn index_does_not_wrap() {
        let mut list = DomainList {
            controller: Pubkey::new_unique(),
            count: u32::MAX,
            bump: 254,
        };

        assert!(list.claim_next_index().is_err());
        assert_eq!(list.count, u32::MAX);
    }

    #[test]
    fn entry_space_matches_serialized_length() {
        let long_name = "a".repeat(249) + ".com";
        for name in ["a.b", "example.com", long_name.as_str()] {
            let entry = DomainEntry {
                controller: Pubkey::new_unique(),
                name: name.to_string(),
                registered_at: 1_700_000_000,
                bump: 250,
            };

            let mut data = Vec::new();
            entry.try_serialize(&mut data).unwrap();
            assert_eq!(data.len(), DomainEntry::space(name.len()));
        }
    }

    #[test]
    fn entry_addresses_differ_per_controller_and_index() {
        let (alice, bob) = (Pubkey::new_unique(), Pubkey::new_unique());

        let alice_0 = DomainEntry::address(&crate::ID, &alice, 0).0;
        let alice_1 = DomainEntry::address(&crate::ID, &alice, 1).0;
        let bob_0 = DomainEntry::address(&crate::ID, &bob, 0).0;

        assert_ne!(alice_0, alice_1);
        assert_ne!(alice_0, bob_0);
        assert_eq!(alice_0, DomainEntry::address(&crate::ID, &alice, 0).0);
    }
}
