//! Core library components.
//!
//! Name parsing, secret collection, and credentials file output, plus the
//! store and authentication backends they run against.

pub mod auth;
pub mod collect;
pub mod config;
pub mod constants;
pub mod domain;
pub mod emit;
pub mod http;
pub mod naming;
pub mod store;
pub mod summary;
