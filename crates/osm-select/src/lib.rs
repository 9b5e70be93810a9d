//! Directive-based file selection for Vault Settings Manager
//!
//! Turns an ordered list of include/exclude directives into the set of
//! files (relative to a root directory) that copy and diff operations act on.
//!
//! Each directive names a file, a directory, or a glob pattern. Directives
//! are applied strictly in order, so a later `Include` can carve a file back
//! out of an earlier bulk `Exclude` and vice versa.
//!
//! # Example
//!
//! ```no_run
//! use osm_select::{Directive, Resolver};
//!
//! let directives = vec![
//!     Directive::include("."),
//!     Directive::exclude("*.json"),
//!     Directive::include("snippets"),
//! ];
//!
//! let resolver = Resolver::new("/path/to/vault/.obsidian")?;
//! for path in resolver.resolve(&directives)?.sorted() {
//!     println!("{path}");
//! }
//! # Ok::<(), osm_select::Error>(())
//! ```

pub mod directive;
pub mod error;
pub mod expand;
pub mod observer;
pub mod parse;
pub mod path;
pub mod resolve;
pub mod result_set;

pub use directive::{Directive, Verb};
pub use error::{Error, Result};
pub use expand::{Expansion, ExpansionKind, expand};
pub use observer::{NoopObserver, ResolveObserver, TracingObserver};
pub use parse::{DirectivePolicy, DirectiveRecord, parse_line, parse_lines, parse_records};
pub use path::RelativePath;
pub use resolve::{Resolver, accumulate, resolve};
pub use result_set::{ResultSet, SortOrder};
