//! Domain types: grain constants, configuration, errors

pub mod config;
pub mod error;
pub mod grain;
