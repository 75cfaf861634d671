//! # Route-tree Sitemap Generation Library
//!
//! A Rust library for generating sitemap XML files from declarative route
//! trees.
//!
//! This library flattens a nested route tree into canonical URL paths,
//! filters the paths with regex rules, expands dynamic `:param` segments
//! from a binding table, partitions the result into size-bounded shards,
//! and serializes each shard as a sitemaps.org `<urlset>` document (plus a
//! `<sitemapindex>` document when more than one shard exists).
//!
//! ## Features
//!
//! - Accept route input as a tree object or a route-configuration array
//! - Flatten nested routes with relative/absolute path composition
//! - Keep or drop paths with a regex rule set
//! - Expand dynamic segments, including multi-valued Cartesian products
//! - Shard large path lists at the sitemap URL-count limit
//! - Write single-file or sharded-plus-index sitemap layouts
//!
//! ## Examples
//!
//! ```
//! use core_smx::{SitemapGenerator, SitemapOptions};
//! use data_model_smx::routes::RouteNode;
//!
//! # fn main() -> core_smx::Result<()> {
//! let routes = vec![RouteNode::with_children(
//!     "/",
//!     vec![RouteNode::new("about"), RouteNode::new("contact")],
//! )];
//!
//! let options = SitemapOptions::builder()
//!     .hostname("https://example.com".to_string())
//!     .build();
//!
//! let generator = SitemapGenerator::from_routes(routes, options)?;
//! let shards = generator.build()?;
//! assert_eq!(shards.len(), 1);
//! assert_eq!(shards[0].paths, vec!["/", "/about", "/contact"]);
//! # Ok(())
//! # }
//! ```

// Module declarations
mod common;
pub mod sitemap_gen;

// Public API re-exports
pub use common::logging::setup_logging;
pub use sitemap_gen::{
    Result, Shard, SitemapGenError, SitemapGenerator, SitemapOptions, SitemapOptionsBuilder,
};
