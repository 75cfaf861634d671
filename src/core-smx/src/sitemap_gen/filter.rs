//! Rule-based path filtering.

use regex::Regex;

use crate::sitemap_gen::errors::Result;

/// A compiled rule set plus the inclusion mode.
///
/// Each rule is a regular expression searched anywhere in the path, so a
/// plain-text rule behaves as a substring test.
#[derive(Debug, Clone)]
pub struct PathFilter {
    rules: Vec<Regex>,
    is_valid: bool,
}

impl PathFilter {
    /// Compiles a rule set.
    ///
    /// With `is_valid` set, only paths matching at least one rule are kept;
    /// unset (the default mode), paths matching at least one rule are
    /// dropped and the rest kept.
    ///
    /// # Errors
    ///
    /// Returns an error when a pattern fails regex compilation.
    pub fn new(patterns: &[String], is_valid: bool) -> Result<Self> {
        let rules = patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { rules, is_valid })
    }

    /// True when any rule matches the path.
    pub fn matches(&self, path: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(path))
    }

    /// Applies the filter, preserving relative order and never adding paths.
    ///
    /// An empty rule set keeps every path in drop mode and no path in valid
    /// mode.
    pub fn apply(&self, paths: Vec<String>) -> Vec<String> {
        paths
            .into_iter()
            .filter(|path| self.matches(path) == self.is_valid)
            .collect()
    }
}
