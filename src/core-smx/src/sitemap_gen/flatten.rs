//! Route tree flattening into canonical URL paths.

use data_model_smx::routes::RouteNode;

/// Flattens a route forest into canonical absolute paths, pre-order.
///
/// Each node's own segment is composed onto the inherited base: an absolute
/// segment (leading `/`) replaces the base entirely, a relative segment
/// joins it with a single separator. Nodes without a path emit nothing and
/// hand the base to their children unchanged. Identical nodes at different
/// tree positions both emit; nothing is deduplicated.
///
/// # Examples
///
/// ```
/// # use core_smx::sitemap_gen::flatten_routes;
/// use data_model_smx::routes::RouteNode;
///
/// let routes = vec![RouteNode::with_children(
///     "/",
///     vec![
///         RouteNode::new("about"),
///         RouteNode::with_children("child/:id", vec![RouteNode::new("grand-child")]),
///     ],
/// )];
///
/// assert_eq!(
///     flatten_routes(&routes),
///     vec!["/", "/about", "/child/:id", "/child/:id/grand-child"]
/// );
/// ```
pub fn flatten_routes(routes: &[RouteNode]) -> Vec<String> {
    let mut paths = Vec::new();
    for route in routes {
        visit(route, "", &mut paths);
    }
    paths
}

fn visit(node: &RouteNode, base: &str, out: &mut Vec<String>) {
    let composed = match node.path.as_deref() {
        None | Some("") => base.to_string(),
        Some(segment) => compose(base, segment),
    };
    if matches!(node.path.as_deref(), Some(segment) if !segment.is_empty()) {
        out.push(composed.clone());
    }
    for child in &node.children {
        visit(child, &composed, out);
    }
}

/// Joins a base path and a node's own segment into one canonical path.
fn compose(base: &str, segment: &str) -> String {
    if segment.starts_with('/') {
        canonicalize(segment)
    } else {
        canonicalize(&format!("{base}/{segment}"))
    }
}

/// Normalizes separators: a single leading `/`, exactly one `/` between
/// segments, and no trailing `/` except for the root itself.
fn canonicalize(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattens_nested_tree_pre_order() {
        let routes = vec![RouteNode::with_children(
            "/",
            vec![
                RouteNode::new("about"),
                RouteNode::with_children("child/:id", vec![RouteNode::new("grand-child")]),
            ],
        )];

        assert_eq!(
            flatten_routes(&routes),
            vec!["/", "/about", "/child/:id", "/child/:id/grand-child"]
        );
    }

    #[test]
    fn test_empty_forest() {
        assert!(flatten_routes(&[]).is_empty());
    }

    #[test]
    fn test_pathless_node_propagates_base_without_emitting() {
        let routes = vec![RouteNode::with_children(
            "/app",
            vec![RouteNode::layout(vec![RouteNode::new("settings")])],
        )];

        assert_eq!(flatten_routes(&routes), vec!["/app", "/app/settings"]);
    }

    #[test]
    fn test_empty_path_behaves_like_no_path() {
        let routes = vec![RouteNode::with_children(
            "/app",
            vec![RouteNode::with_children("", vec![RouteNode::new("settings")])],
        )];

        assert_eq!(flatten_routes(&routes), vec!["/app", "/app/settings"]);
    }

    #[test]
    fn test_absolute_child_replaces_base() {
        let routes = vec![RouteNode::with_children(
            "/app",
            vec![RouteNode::new("/admin"), RouteNode::new("inner")],
        )];

        assert_eq!(flatten_routes(&routes), vec!["/app", "/admin", "/app/inner"]);
    }

    #[test]
    fn test_slash_normalization() {
        let routes = vec![RouteNode::with_children(
            "/",
            vec![RouteNode::new("about/"), RouteNode::new("docs//guide")],
        )];

        assert_eq!(flatten_routes(&routes), vec!["/", "/about", "/docs/guide"]);
    }

    #[test]
    fn test_relative_top_level_route_becomes_absolute() {
        let routes = vec![RouteNode::new("about")];

        assert_eq!(flatten_routes(&routes), vec!["/about"]);
    }

    #[test]
    fn test_duplicate_positions_both_emit() {
        let routes = vec![
            RouteNode::new("about"),
            RouteNode::layout(vec![RouteNode::new("about")]),
        ];

        assert_eq!(flatten_routes(&routes), vec!["/about", "/about"]);
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let routes = vec![RouteNode::with_children(
            "/",
            vec![RouteNode::new("a"), RouteNode::with_children("b", vec![RouteNode::new("c")])],
        )];

        assert_eq!(flatten_routes(&routes), flatten_routes(&routes));
    }
}
