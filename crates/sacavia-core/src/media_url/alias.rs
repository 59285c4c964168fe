//! Rewrites for legacy host and path forms found in stored media references.

use std::borrow::Cow;

const HOST_ALIAS: &str = "www.sacavia.com";
const CANONICAL_HOST: &str = "sacavia.com";

const LEGACY_MEDIA_PATH: &str = "/api/media/";
pub(crate) const MEDIA_FILE_PATH: &str = "/api/media/file/";

/// Replaces every `www.sacavia.com` with `sacavia.com`.
///
/// Borrows when there is nothing to rewrite.
pub fn canonical_host_alias(url: &str) -> Cow<'_, str> {
    if url.contains(HOST_ALIAS) {
        Cow::Owned(url.replace(HOST_ALIAS, CANONICAL_HOST))
    } else {
        Cow::Borrowed(url)
    }
}

/// Rewrites `/api/media/` to `/api/media/file/` in a root-relative path.
///
/// Paths that already mention `/api/media/file/` anywhere are left alone,
/// otherwise every occurrence is rewritten.
pub fn canonical_media_path(path: &str) -> Cow<'_, str> {
    if path.contains(LEGACY_MEDIA_PATH) && !path.contains(MEDIA_FILE_PATH) {
        Cow::Owned(path.replace(LEGACY_MEDIA_PATH, MEDIA_FILE_PATH))
    } else {
        Cow::Borrowed(path)
    }
}
