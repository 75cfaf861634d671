//! Generator orchestration: the route-to-shard pipeline.

use std::path::Path;

use serde_json::Value;
use tracing::info;

use data_model_smx::routes::RouteNode;

use crate::common::hostname::validate_hostname;
use crate::sitemap_gen::config::SitemapOptions;
use crate::sitemap_gen::errors::{Result, SitemapGenError};
use crate::sitemap_gen::expand::expand_paths;
use crate::sitemap_gen::filter::PathFilter;
use crate::sitemap_gen::flatten::flatten_routes;
use crate::sitemap_gen::partition::{Shard, partition_paths};
use crate::sitemap_gen::save::save_shards;
use crate::sitemap_gen::xml::write_urlset;

/// Turns a declarative route tree into sitemap shards and documents.
///
/// Construction normalizes the route input and validates any configured
/// hostname, so an instance always holds a runnable pipeline. Every stage
/// afterwards is a pure transformation over the in-memory path list;
/// independent generators share nothing and may run concurrently.
#[derive(Debug, Clone)]
pub struct SitemapGenerator {
    routes: Vec<RouteNode>,
    options: SitemapOptions,
}

impl SitemapGenerator {
    /// Builds a generator from raw JSON route input.
    ///
    /// Accepts the two shapes routers export: a single route object (a
    /// tree) or an array of route objects (a route-configuration array).
    ///
    /// # Errors
    ///
    /// `InvalidInput` for any other JSON shape, `MalformedRoute` when a
    /// node inside fails validation, `InvalidHostname` when a configured
    /// hostname does not parse as an absolute URL.
    pub fn from_value(value: &Value, options: SitemapOptions) -> Result<Self> {
        let routes = RouteNode::forest_from_value(value)?;
        Self::from_routes(routes, options)
    }

    /// Builds a generator from typed route nodes.
    ///
    /// # Errors
    ///
    /// `InvalidHostname` when a configured hostname does not parse as an
    /// absolute URL.
    pub fn from_routes(routes: Vec<RouteNode>, options: SitemapOptions) -> Result<Self> {
        if let Some(hostname) = options.hostname.as_deref() {
            validate_hostname(hostname)?;
        }
        Ok(Self { routes, options })
    }

    /// Runs the path pipeline: flatten, filter, expand.
    ///
    /// # Errors
    ///
    /// `InvalidRule` for an uncompilable filter pattern,
    /// `UnresolvedParameter` for a dynamic segment without a complete
    /// binding.
    pub fn paths(&self) -> Result<Vec<String>> {
        let flattened = flatten_routes(&self.routes);
        info!("flattened {} root route(s) into {} path(s)", self.routes.len(), flattened.len());

        let filter = PathFilter::new(&self.options.rules, self.options.is_valid)?;
        let filtered = filter.apply(flattened);
        info!("{} path(s) after filtering", filtered.len());

        let expanded = expand_paths(filtered, &self.options.params)?;
        info!("{} path(s) after parameter expansion", expanded.len());

        Ok(expanded)
    }

    /// Partitions the final path list into sitemap-sized shards.
    pub fn build(&self) -> Result<Vec<Shard>> {
        let paths = self.paths()?;
        let shards = partition_paths(paths, self.options.limit_count_paths)?;
        info!(
            "partitioned into {} shard(s) at {} path(s) per shard",
            shards.len(),
            self.options.limit_count_paths
        );
        Ok(shards)
    }

    /// Serializes every shard into its own `<urlset>` document.
    ///
    /// # Errors
    ///
    /// `MissingHostname` when no hostname is configured, plus any pipeline
    /// error from [`SitemapGenerator::build`].
    pub fn to_xml(&self) -> Result<Vec<String>> {
        let hostname = self.hostname()?;
        self.build()?
            .iter()
            .map(|shard| write_urlset(hostname, &shard.paths))
            .collect()
    }

    /// Runs the pipeline and writes the sitemap file(s) at `dest`.
    ///
    /// One shard lands at `dest` directly; several land next to it with an
    /// index document at `dest`. A pipeline failure writes nothing.
    pub fn save(&self, dest: &Path) -> Result<()> {
        let hostname = self.hostname()?;
        let shards = self.build()?;
        save_shards(&shards, dest, hostname, &self.options.public_path)
    }

    fn hostname(&self) -> Result<&str> {
        self.options.hostname.as_deref().ok_or(SitemapGenError::MissingHostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_routes() -> Value {
        json!({
            "path": "/",
            "children": [
                { "path": "about" },
                { "path": "auth" },
            ],
        })
    }

    #[test]
    fn test_pipeline_without_hostname_derives_paths() {
        let generator = SitemapGenerator::from_value(&sample_routes(), SitemapOptions::default()).unwrap();

        assert_eq!(generator.paths().unwrap(), vec!["/", "/about", "/auth"]);
    }

    #[test]
    fn test_filter_rules_apply_before_partitioning() {
        let options = SitemapOptions::builder().rule("auth".to_string()).build();
        let generator = SitemapGenerator::from_value(&sample_routes(), options).unwrap();

        let shards = generator.build().unwrap();
        assert_eq!(shards.len(), 1);
        assert_eq!(shards[0].paths, vec!["/", "/about"]);
    }

    #[test]
    fn test_invalid_hostname_fails_at_construction() {
        let options = SitemapOptions::builder().hostname("not a url".to_string()).build();

        let err = SitemapGenerator::from_value(&sample_routes(), options).unwrap_err();
        assert!(matches!(err, SitemapGenError::InvalidHostname(_)));
    }

    #[test]
    fn test_to_xml_without_hostname_is_rejected() {
        let generator = SitemapGenerator::from_value(&sample_routes(), SitemapOptions::default()).unwrap();

        let err = generator.to_xml().unwrap_err();
        assert!(matches!(err, SitemapGenError::MissingHostname));
    }

    #[test]
    fn test_invalid_input_shape_fails_at_construction() {
        let err = SitemapGenerator::from_value(&json!("routes"), SitemapOptions::default()).unwrap_err();

        assert!(matches!(
            err,
            SitemapGenError::Route(data_model_smx::routes::RouteError::InvalidInput)
        ));
    }

    #[test]
    fn test_to_xml_produces_one_document_per_shard() {
        let options = SitemapOptions::builder()
            .hostname("https://example.com".to_string())
            .limit_count_paths(2)
            .build();
        let generator = SitemapGenerator::from_value(&sample_routes(), options).unwrap();

        let documents = generator.to_xml().unwrap();
        assert_eq!(documents.len(), 2);
        assert!(documents[0].contains("<loc>https://example.com/</loc>"));
        assert!(documents[1].contains("<loc>https://example.com/auth</loc>"));
    }
}
