//! Application logic for the mulbench binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
