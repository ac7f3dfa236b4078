//! Core types for pilltrack
//!
//! This crate contains domain types shared across all other crates.

mod constants;
mod env_config;
mod log;
mod pill;

pub use constants::*;
pub use env_config::*;
pub use log::*;
pub use pill::*;
