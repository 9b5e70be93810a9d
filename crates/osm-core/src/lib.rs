//! Core operations for Vault Settings Manager
//!
//! Everything here sits on top of the `osm-select` engine:
//!
//! - **Configuration**: the directive list and presentation policy, loaded
//!   from JSON, TOML or YAML, or the built-in default
//! - **Selection**: a source root paired with its parsed directives
//! - **SyncEngine**: copy the selected files into sibling vaults
//! - **DiffEngine**: report how sibling vaults differ from the source
//!
//! ```text
//!              osm-cli
//!                 |
//!              osm-core
//!                 |
//!             osm-select
//! ```
//!
//! Every operation resolves its complete selection before it writes or
//! deletes anything, so a bad directive or an unreadable directory stops
//! the run with the destination untouched.

pub mod checksum;
pub mod config;
pub mod diff;
pub mod error;
pub mod io;
pub mod selection;
pub mod sync;

pub use config::{ConfigFormat, OsmConfig};
pub use diff::{DiffEngine, DiffEntry, DiffReport, DiffStatus};
pub use error::{Error, Result};
pub use selection::Selection;
pub use sync::{ActionKind, SyncAction, SyncEngine, SyncOptions, SyncReport};
