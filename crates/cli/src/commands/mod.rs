//! Command implementations for carsimd

pub mod check_config;
pub mod run;
