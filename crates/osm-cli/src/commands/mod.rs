//! Command implementations for osm-cli

pub mod config;
pub mod diff;
pub mod select;
pub mod sync;

use std::path::Path;

use osm_core::OsmConfig;
use osm_select::DirectivePolicy;

use crate::error::Result;

pub use config::run_default_config;
pub use diff::run_diff;
pub use select::{SelectOutput, run_select};
pub use sync::run_sync;

/// Load the configuration named on the command line, or the built-in one.
///
/// `--tolerant` overrides whatever policy the file sets.
pub fn load_config(path: Option<&Path>, tolerant: bool) -> Result<OsmConfig> {
    let config = OsmConfig::load_or_default(path)?;
    Ok(if tolerant {
        config.with_policy(DirectivePolicy::Tolerant)
    } else {
        config
    })
}
