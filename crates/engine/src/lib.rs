//! Terminology store engine
//!
//! This crate ties chronicles together into one store:
//! - `TerminologyStore`: native identity allocation, the chronicle registry,
//!   UUID and dependents indexes
//! - `StoreConfig`: `termstore.toml` configuration
//! - `Component`: kind-erased registry entry
//!
//! The engine is the only layer that logs. Install a `tracing` subscriber in
//! the host application to see its events (targets under `termstore::`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod component;
pub mod config;
pub mod store;

pub use component::{Component, StoredPayload};
pub use config::{StoreConfig, CONFIG_FILE_NAME};
pub use store::TerminologyStore;
