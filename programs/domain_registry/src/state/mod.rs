// domain_registry/state/mod.rs

pub mod domain_list;
pub mod registry;

pub use domain_list::*;
pub use registry::*;
