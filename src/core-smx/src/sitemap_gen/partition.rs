//! Path list partitioning into size-bounded shards.

use crate::sitemap_gen::errors::{Result, SitemapGenError};

/// One contiguous, size-bounded slice of the final path list.
///
/// Shards map one-to-one onto output sitemap documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shard {
    /// Zero-based position of this shard in the output sequence.
    pub index: usize,
    /// The shard's paths, in original list order.
    pub paths: Vec<String>,
}

/// Splits a path list into contiguous shards of at most `limit` paths.
///
/// Shards fully cover the input in order with no duplication; only the last
/// shard may be short. An empty list yields no shards.
///
/// # Errors
///
/// [`SitemapGenError::InvalidLimit`] when `limit` is zero.
pub fn partition_paths(paths: Vec<String>, limit: usize) -> Result<Vec<Shard>> {
    if limit == 0 {
        return Err(SitemapGenError::InvalidLimit(limit));
    }
    Ok(paths
        .chunks(limit)
        .enumerate()
        .map(|(index, chunk)| Shard {
            index,
            paths: chunk.to_vec(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_paths(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("/page/{i}")).collect()
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let paths = numbered_paths(10);

        let shards = partition_paths(paths.clone(), 3).unwrap();
        let rejoined: Vec<String> = shards.iter().flat_map(|shard| shard.paths.clone()).collect();

        assert_eq!(rejoined, paths);
        assert_eq!(shards.iter().map(|shard| shard.index).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_only_last_shard_may_be_short() {
        let shards = partition_paths(numbered_paths(10), 3).unwrap();

        assert_eq!(shards.len(), 4);
        for shard in &shards[..3] {
            assert_eq!(shard.paths.len(), 3);
        }
        assert_eq!(shards[3].paths.len(), 1);
    }

    #[test]
    fn test_sitemap_limit_overflow_by_one() {
        let shards = partition_paths(numbered_paths(50_000), 49_999).unwrap();

        assert_eq!(shards.len(), 2);
        assert_eq!(shards[0].paths.len(), 49_999);
        assert_eq!(shards[1].paths.len(), 1);
    }

    #[test]
    fn test_exact_multiple_has_no_short_shard() {
        let shards = partition_paths(numbered_paths(6), 3).unwrap();

        assert_eq!(shards.len(), 2);
        assert!(shards.iter().all(|shard| shard.paths.len() == 3));
    }

    #[test]
    fn test_empty_input_yields_zero_shards() {
        assert!(partition_paths(Vec::new(), 3).unwrap().is_empty());
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let err = partition_paths(numbered_paths(1), 0).unwrap_err();

        assert!(matches!(err, SitemapGenError::InvalidLimit(0)));
    }
}
