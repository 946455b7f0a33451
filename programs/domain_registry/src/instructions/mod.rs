// domain_registry/instructions/mod.rs

pub mod admin;
pub mod open;
pub mod views;

pub use admin::*;
pub use open::*;
pub use views::*;
