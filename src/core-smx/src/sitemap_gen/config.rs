//! Configuration options for sitemap generation.

use crate::sitemap_gen::expand::{BindingRecord, ParamBindings};

/// Maximum number of URLs a single sitemap document may carry.
pub const DEFAULT_LIMIT_COUNT_PATHS: usize = 49_999;

/// Public path prefix used for shard locations in the index document.
pub const DEFAULT_PUBLIC_PATH: &str = "/";

/// Configuration options for the generator.
#[derive(Debug, Clone)]
pub struct SitemapOptions {
    /// Regex patterns tested against each canonical path
    pub rules: Vec<String>,
    /// Filter mode: `true` keeps only paths matching a rule, `false`
    /// (default) drops paths matching a rule
    pub is_valid: bool,
    /// Binding table for dynamic `:param` segments, keyed by canonical path
    pub params: ParamBindings,
    /// Maximum number of paths per shard (default: 49999)
    pub limit_count_paths: usize,
    /// Base URL the serializer prefixes to every path, e.g. `https://example.com`
    pub hostname: Option<String>,
    /// Public path prefix for shard file locations in the index document
    pub public_path: String,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            is_valid: false,
            params: ParamBindings::new(),
            limit_count_paths: DEFAULT_LIMIT_COUNT_PATHS,
            hostname: None,
            public_path: DEFAULT_PUBLIC_PATH.to_string(),
        }
    }
}

impl SitemapOptions {
    /// Creates a new builder for SitemapOptions.
    pub fn builder() -> SitemapOptionsBuilder {
        SitemapOptionsBuilder::default()
    }
}

/// Builder for SitemapOptions.
#[derive(Debug, Clone, Default)]
pub struct SitemapOptionsBuilder {
    rules: Vec<String>,
    is_valid: bool,
    params: ParamBindings,
    limit_count_paths: Option<usize>,
    hostname: Option<String>,
    public_path: Option<String>,
}

impl SitemapOptionsBuilder {
    /// Adds a filter rule (regex pattern).
    pub fn rule(mut self, pattern: String) -> Self {
        self.rules.push(pattern);
        self
    }

    /// Adds multiple filter rules.
    pub fn rules(mut self, patterns: Vec<String>) -> Self {
        self.rules.extend(patterns);
        self
    }

    /// Sets the filter mode: `true` keeps only matching paths, `false`
    /// drops matching paths.
    pub fn is_valid(mut self, is_valid: bool) -> Self {
        self.is_valid = is_valid;
        self
    }

    /// Adds the binding records for one dynamic path.
    pub fn param(mut self, path: String, records: Vec<BindingRecord>) -> Self {
        self.params.insert(path, records);
        self
    }

    /// Merges a whole binding table.
    pub fn params(mut self, params: ParamBindings) -> Self {
        self.params.extend(params);
        self
    }

    /// Sets the maximum number of paths per shard.
    pub fn limit_count_paths(mut self, limit: usize) -> Self {
        self.limit_count_paths = Some(limit);
        self
    }

    /// Sets the base URL prefixed to every path.
    pub fn hostname(mut self, hostname: String) -> Self {
        self.hostname = Some(hostname);
        self
    }

    /// Sets the public path prefix used by the index document.
    pub fn public_path(mut self, public_path: String) -> Self {
        self.public_path = Some(public_path);
        self
    }

    /// Builds the SitemapOptions.
    pub fn build(self) -> SitemapOptions {
        SitemapOptions {
            rules: self.rules,
            is_valid: self.is_valid,
            params: self.params,
            limit_count_paths: self.limit_count_paths.unwrap_or(DEFAULT_LIMIT_COUNT_PATHS),
            hostname: self.hostname,
            public_path: self.public_path.unwrap_or_else(|| DEFAULT_PUBLIC_PATH.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SitemapOptions::default();
        assert!(options.rules.is_empty());
        assert!(!options.is_valid);
        assert_eq!(options.limit_count_paths, 49_999);
        assert_eq!(options.hostname, None);
        assert_eq!(options.public_path, "/");
    }

    #[test]
    fn test_builder() {
        let options = SitemapOptions::builder()
            .rule("/auth".to_string())
            .rules(vec!["/admin".to_string()])
            .is_valid(true)
            .param("/child/:id".to_string(), Vec::new())
            .limit_count_paths(10)
            .hostname("https://example.com".to_string())
            .public_path("/static/".to_string())
            .build();

        assert_eq!(options.rules, vec!["/auth", "/admin"]);
        assert!(options.is_valid);
        assert!(options.params.contains_key("/child/:id"));
        assert_eq!(options.limit_count_paths, 10);
        assert_eq!(options.hostname.as_deref(), Some("https://example.com"));
        assert_eq!(options.public_path, "/static/");
    }
}
