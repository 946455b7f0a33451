// domain_registry/instructions/admin/mod.rs

pub mod initialize;
pub mod update_registration_fee;
pub mod withdraw;

pub use initialize::*;
pub use update_registration_fee::*;
pub use withdraw::*;
