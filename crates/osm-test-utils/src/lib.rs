//! Shared test utilities for the Vault Settings Manager workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`vault`]: [`TestVault`] builder for settings-directory fixtures

pub mod vault;

pub use vault::{SETTINGS_TREE, TestVault};
