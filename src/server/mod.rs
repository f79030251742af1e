//! HTTP API for the translator

pub mod api;
