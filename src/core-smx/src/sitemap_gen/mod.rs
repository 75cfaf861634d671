//! Sitemap generation from declarative route trees.
//!
//! The pipeline runs producer to consumer, each stage a pure transformation
//! over an in-memory path list:
//!
//! 1. [`flatten_routes`]: route tree to canonical absolute paths, pre-order
//! 2. [`PathFilter`]: keep or drop paths by regex rule set
//! 3. [`expand_paths`]: substitute dynamic `:param` segments from bindings
//! 4. [`partition_paths`]: chunk the final list into sitemap-sized shards
//!
//! [`SitemapGenerator`] drives the whole pipeline and hands the shards to
//! the XML writers and the persistence layer.

// Module declarations
mod config;
mod errors;
mod expand;
mod filter;
mod flatten;
mod generator;
mod partition;
mod save;
mod xml;

// Public API re-exports
pub use config::{DEFAULT_LIMIT_COUNT_PATHS, DEFAULT_PUBLIC_PATH, SitemapOptions, SitemapOptionsBuilder};
pub use errors::{Result, SitemapGenError};
pub use generator::SitemapGenerator;
pub use partition::Shard;

// Additional exports for advanced usage
pub use expand::{BindingRecord, PARAM_MARKER, ParamBindings, ParamValue, expand_paths, path_params};
pub use filter::PathFilter;
pub use flatten::flatten_routes;
pub use partition::partition_paths;
pub use save::{save_shards, shard_file_name};
pub use xml::{SITEMAP_XMLNS, write_sitemap_index, write_urlset};
