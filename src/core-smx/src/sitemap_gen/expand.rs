//! Dynamic path segment expansion.

use std::collections::HashMap;

use serde::Deserialize;

use crate::sitemap_gen::errors::{Result, SitemapGenError};

/// Marker introducing a dynamic path segment.
pub const PARAM_MARKER: char = ':';

/// Value(s) bound to one parameter within a binding record.
///
/// Deserializes from either a JSON string or an array of strings, so a
/// binding file can say `{"id": "1"}` as well as `{"id": ["1", "2"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A single concrete value.
    One(String),
    /// Ordered values; each produces its own expanded path.
    Many(Vec<String>),
}

impl ParamValue {
    /// The bound values as a slice, regardless of arity.
    pub fn values(&self) -> &[String] {
        match self {
            ParamValue::One(value) => std::slice::from_ref(value),
            ParamValue::Many(values) => values,
        }
    }
}

/// One concrete assignment of values to a path's dynamic segments.
pub type BindingRecord = HashMap<String, ParamValue>;

/// Binding records keyed by the exact canonical path they expand.
pub type ParamBindings = HashMap<String, Vec<BindingRecord>>;

/// Extracts a path's dynamic parameter names, in order of first appearance.
///
/// A dynamic segment is a whole `/`-separated segment introduced by `:`.
/// Repeated names count once.
///
/// # Examples
///
/// ```
/// # use core_smx::sitemap_gen::path_params;
/// assert_eq!(path_params("/child/:id/grand-child"), vec!["id"]);
/// assert_eq!(path_params("/:a/:b"), vec!["a", "b"]);
/// assert!(path_params("/about").is_empty());
/// ```
pub fn path_params(path: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        if let Some(name) = segment.strip_prefix(PARAM_MARKER) {
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Replaces dynamic segments with concrete values from the binding table.
///
/// Paths without dynamic segments and without a table entry pass through
/// unchanged, in position. A bound path is replaced, in position, by one
/// expansion per binding record times the Cartesian product of any
/// multi-valued parameters in that record.
///
/// Expansion order is deterministic: binding records in declared order,
/// then the path's parameters left to right with the leftmost varying
/// slowest, then each parameter's values in declared order.
///
/// # Errors
///
/// [`SitemapGenError::UnresolvedParameter`] when a path carries a dynamic
/// segment but has no table entry, or a binding record lacks one of the
/// path's parameters. A literal `:token` never passes through silently.
pub fn expand_paths(paths: Vec<String>, bindings: &ParamBindings) -> Result<Vec<String>> {
    let mut expanded = Vec::with_capacity(paths.len());
    for path in paths {
        match bindings.get(&path) {
            Some(records) => {
                let names = path_params(&path);
                for record in records {
                    expand_record(&path, &names, record, &mut expanded)?;
                }
            }
            None => {
                let names = path_params(&path);
                if let Some(first) = names.first() {
                    let name = (*first).to_string();
                    return Err(SitemapGenError::UnresolvedParameter { path, name });
                }
                expanded.push(path);
            }
        }
    }
    Ok(expanded)
}

/// Expands one binding record into the Cartesian product of its values.
fn expand_record(path: &str, names: &[&str], record: &BindingRecord, out: &mut Vec<String>) -> Result<()> {
    let mut partials = vec![path.to_string()];
    for name in names {
        let values = record
            .get(*name)
            .ok_or_else(|| SitemapGenError::UnresolvedParameter {
                path: path.to_string(),
                name: (*name).to_string(),
            })?
            .values();

        let mut next = Vec::with_capacity(partials.len() * values.len());
        for partial in &partials {
            for value in values {
                next.push(substitute(partial, name, value));
            }
        }
        partials = next;
    }
    out.append(&mut partials);
    Ok(())
}

/// Substitutes every `:name` segment of `path` with `value`.
fn substitute(path: &str, name: &str, value: &str) -> String {
    path.split('/')
        .map(|segment| {
            if segment.strip_prefix(PARAM_MARKER) == Some(name) {
                value
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
