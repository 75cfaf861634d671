//! Route tree data model and input-shape normalization.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while normalizing route input into a [`RouteNode`] forest.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// Input was neither a route object nor an array of route objects.
    #[error("expected a route object or an array of route objects")]
    InvalidInput,

    /// A node failed structural validation.
    #[error("malformed route: {0}")]
    MalformedRoute(String),
}

/// Type alias for Result with RouteError
pub type Result<T> = std::result::Result<T, RouteError>;

/// One node of a declarative route tree.
///
/// Mirrors the shape client-side routers hand out: an optional `path`
/// (relative like `child/:id`, absolute like `/admin`, or absent for index
/// and layout routes), an optional `exact` matching marker, and ordered
/// children under either a `children` or a `routes` key.
///
/// Nodes never point at their parent; traversal passes parent context down.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RouteNode {
    /// Own path segment. Absent or empty for index/layout routes.
    #[serde(default)]
    pub path: Option<String>,
    /// Exact-match marker from the source router. Informational only.
    #[serde(default)]
    pub exact: bool,
    /// Child routes, in declaration order.
    #[serde(default, alias = "routes")]
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    /// Creates a leaf route with the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Creates a route with the given path and children.
    pub fn with_children(path: impl Into<String>, children: Vec<RouteNode>) -> Self {
        Self {
            path: Some(path.into()),
            exact: false,
            children,
        }
    }

    /// Creates a pathless layout route: it contributes no path segment of
    /// its own, only structure.
    pub fn layout(children: Vec<RouteNode>) -> Self {
        Self {
            path: None,
            exact: false,
            children,
        }
    }

    /// Normalizes arbitrary JSON route input into a forest.
    ///
    /// Accepts the two shapes routers export: a single route object (a
    /// tree) or an array of route objects (a route-configuration array).
    /// After this boundary step downstream code has exactly one input shape
    /// to deal with.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidInput`] for any other JSON shape;
    /// [`RouteError::MalformedRoute`] when a node inside fails validation.
    pub fn forest_from_value(value: &Value) -> Result<Vec<RouteNode>> {
        match value {
            Value::Object(_) => Ok(vec![Self::from_value(value)?]),
            Value::Array(items) => items.iter().map(Self::from_value).collect(),
            _ => Err(RouteError::InvalidInput),
        }
    }

    /// Converts a single JSON route object into a [`RouteNode`].
    ///
    /// # Errors
    ///
    /// [`RouteError::MalformedRoute`] when the value is not an object, its
    /// `path` is present but not a string, or its `children`/`routes` key
    /// is present but not an array.
    pub fn from_value(value: &Value) -> Result<RouteNode> {
        let object = value
            .as_object()
            .ok_or_else(|| RouteError::MalformedRoute(format!("route must be an object, got {value}")))?;

        let path = match object.get("path") {
            None | Some(Value::Null) => None,
            Some(Value::String(path)) => Some(path.clone()),
            Some(other) => {
                return Err(RouteError::MalformedRoute(format!(
                    "route `path` must be a string, got {other}"
                )));
            }
        };

        let exact = matches!(object.get("exact"), Some(Value::Bool(true)));

        let children = match object.get("children").or_else(|| object.get("routes")) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.iter().map(Self::from_value).collect::<Result<_>>()?,
            Some(other) => {
                return Err(RouteError::MalformedRoute(format!(
                    "route `children` must be an array, got {other}"
                )));
            }
        };

        Ok(RouteNode { path, exact, children })
    }
}
