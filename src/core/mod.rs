//! Core translation engine module

pub mod client;
pub mod config;
pub mod errors;
pub mod extract;
pub mod language;
pub mod models;
pub mod rate_limiter;

#[cfg(test)]
pub(crate) mod test_support;
