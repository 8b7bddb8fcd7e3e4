//! Per-object metadata derivation: storage keys, content types and the
//! two-tier cache policy.
//!
//! The key space mirrors the build directory hierarchy. `index.html` at the
//! root of the key space is the mutable entry point and gets a short-lived
//! cache directive; every other object is assumed content-hashed or
//! versioned and is cached as immutable for about a year.

use std::path::Path;

use crate::error::DeployError;

/// The distinguished entry-point document at the root of the key space.
pub const INDEX_DOCUMENT: &str = "index.html";

/// Fallback MIME type for unrecognized extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// How long downstream caches may hold an object before revalidating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// A few minutes; applied only to the root index document so a fresh
    /// deploy is picked up promptly.
    ShortLived,
    /// Roughly one year, marked immutable.
    Immutable,
}

impl CachePolicy {
    /// Select the policy for a derived storage key. Exact match only: a
    /// nested `docs/index.html` is a regular asset.
    pub fn for_key(key: &str) -> Self {
        if key == INDEX_DOCUMENT {
            CachePolicy::ShortLived
        } else {
            CachePolicy::Immutable
        }
    }

    /// The `Cache-Control` header value for this policy.
    pub fn header_value(&self) -> &'static str {
        match self {
            CachePolicy::ShortLived => "public, max-age=600",
            CachePolicy::Immutable => "public, immutable, max-age=31557600",
        }
    }
}

/// Derive the storage key for a file: its path with the root prefix (and
/// one separator) removed, components joined with `/`.
pub fn storage_key(root: &Path, path: &Path) -> Result<String, DeployError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| DeployError::OutsideRoot {
            path: path.to_path_buf(),
        })?;
    let key = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    Ok(key)
}

/// Resolve the MIME type from the file extension, falling back to a generic
/// binary type when no mapping exists.
pub fn content_type(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(OCTET_STREAM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn key_strips_root_prefix_and_separator() {
        let root = PathBuf::from("/tmp/dist");
        let key = storage_key(&root, &root.join("assets/app.js")).unwrap();
        assert_eq!(key, "assets/app.js");
        assert!(!key.starts_with('/'));
    }

    #[test]
    fn key_for_top_level_file() {
        let root = PathBuf::from("/tmp/dist");
        let key = storage_key(&root, &root.join("index.html")).unwrap();
        assert_eq!(key, "index.html");
    }

    #[test]
    fn file_outside_root_is_rejected() {
        let root = PathBuf::from("/tmp/dist");
        let err = storage_key(&root, Path::new("/tmp/elsewhere/app.js")).unwrap_err();
        assert!(matches!(err, DeployError::OutsideRoot { .. }));
    }

    #[test]
    fn root_index_gets_short_cache() {
        assert_eq!(CachePolicy::for_key("index.html"), CachePolicy::ShortLived);
        assert_eq!(
            CachePolicy::for_key("index.html").header_value(),
            "public, max-age=600"
        );
    }

    #[test]
    fn everything_else_gets_immutable_cache() {
        assert_eq!(CachePolicy::for_key("assets/app.js"), CachePolicy::Immutable);
        // Exact-match rule: index documents below the root are regular assets.
        assert_eq!(
            CachePolicy::for_key("docs/index.html"),
            CachePolicy::Immutable
        );
        assert!(CachePolicy::for_key("assets/app.js")
            .header_value()
            .contains("immutable"));
    }

    #[test]
    fn javascript_resolves_to_javascript_mime() {
        assert!(content_type(Path::new("assets/app.js")).contains("javascript"));
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(content_type(Path::new("blob.xyz123")), OCTET_STREAM);
        assert_eq!(content_type(Path::new("no_extension")), OCTET_STREAM);
    }
}
