// domain_registry/instructions/views/mod.rs

pub mod get_my_domains;
pub mod read_registry;

pub use get_my_domains::*;
pub use read_registry::*;
