//! Core utilities shared by every module (macros must be declared first)

#[macro_use]
pub mod utils;
