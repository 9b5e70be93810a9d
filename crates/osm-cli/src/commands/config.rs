//! The default-config command

use osm_core::{ConfigFormat, OsmConfig};

use crate::error::Result;

/// Print the built-in configuration, ready to save and edit.
pub fn run_default_config(format: ConfigFormat) -> Result<()> {
    let rendered = OsmConfig::default().render(format)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
