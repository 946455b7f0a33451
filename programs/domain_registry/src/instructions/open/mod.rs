// domain_registry/instructions/open/mod.rs

pub mod register_domain;

pub use register_domain::*;
