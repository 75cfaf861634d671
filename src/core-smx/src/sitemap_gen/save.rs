//! Sitemap file persistence and on-disk layout.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::sitemap_gen::errors::Result;
use crate::sitemap_gen::partition::Shard;
use crate::sitemap_gen::xml::{write_sitemap_index, write_urlset};

/// File name for one shard of a sharded sitemap.
///
/// The destination's `.xml` name is used as a template: `sitemap.xml` with
/// shard index 2 becomes `sitemap-2.xml`.
///
/// # Examples
///
/// ```
/// # use core_smx::sitemap_gen::shard_file_name;
/// use std::path::Path;
///
/// assert_eq!(shard_file_name(Path::new("public/sitemap.xml"), 0), "sitemap-0.xml");
/// assert_eq!(shard_file_name(Path::new("out.xml"), 3), "out-3.xml");
/// ```
pub fn shard_file_name(dest: &Path, index: usize) -> String {
    let stem = dest.file_stem().and_then(|stem| stem.to_str()).unwrap_or("sitemap");
    format!("{stem}-{index}.xml")
}

/// Persists shards at `dest`.
///
/// Zero or one shard writes a single `<urlset>` document at `dest` (empty
/// when there are no paths at all) and no index. More than one shard writes
/// each shard under its [`shard_file_name`] next to `dest`, plus a
/// `<sitemapindex>` at `dest` listing every shard file in order.
///
/// # Errors
///
/// Serialization and write failures are fatal and surface immediately;
/// nothing is retried and already-written shard files are left in place.
pub fn save_shards(shards: &[Shard], dest: &Path, hostname: &str, public_path: &str) -> Result<()> {
    match shards {
        [] => {
            fs::write(dest, write_urlset(hostname, &[])?)?;
            info!("wrote empty sitemap to {}", dest.display());
        }
        [only] => {
            fs::write(dest, write_urlset(hostname, &only.paths)?)?;
            info!("wrote sitemap with {} path(s) to {}", only.paths.len(), dest.display());
        }
        many => {
            let mut file_names = Vec::with_capacity(many.len());
            for shard in many {
                let name = shard_file_name(dest, shard.index);
                let file = dest.with_file_name(&name);
                fs::write(&file, write_urlset(hostname, &shard.paths)?)?;
                info!(
                    "wrote sitemap shard {} with {} path(s) to {}",
                    shard.index,
                    shard.paths.len(),
                    file.display()
                );
                file_names.push(name);
            }
            fs::write(dest, write_sitemap_index(hostname, public_path, &file_names)?)?;
            info!("wrote sitemap index for {} shard(s) to {}", file_names.len(), dest.display());
        }
    }
    Ok(())
}
