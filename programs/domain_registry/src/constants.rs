// domain_registry/constants.rs

use solana_program::program::MAX_RETURN_DATA;

pub const ANCHOR_DISCRIMINATOR_SIZE: usize = 8;

// Longest name the registry accepts, in bytes
pub const MAX_DOMAIN_LENGTH: usize = 253;

pub const SEPARATOR: u8 = b'.';
pub const HYPHEN: u8 = b'-';

// Bytes a page of items may use in return data, after the vector length
// prefix (4) and the optional next offset (1 + 4)
pub const PAGE_ITEMS_BUDGET: usize = MAX_RETURN_DATA - 4 - 5;

// Fee charged per registration until the owner changes it (lamports)
cfg_if::cfg_if! {
    if #[cfg(any(feature = "devnet", feature = "testing"))] {
        pub const DEFAULT_REGISTRATION_FEE: u64 = 1_000_000; // 0.001 SOL
    } else {
        pub const DEFAULT_REGISTRATION_FEE: u64 = 10_000_000; // 0.01 SOL
    }
}
