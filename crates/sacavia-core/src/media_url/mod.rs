//! Media URL resolution.
//!
//! Stored media references come in several shapes: full URLs (sometimes on
//! the old `www.` host), root-relative API paths (sometimes in the pre-`file/`
//! layout) and bare file identifiers. Everything here turns them into one
//! absolute [`Url`] against a base API URL, or `None` when that is impossible.

mod alias;
mod error;

pub use alias::{canonical_host_alias, canonical_media_path};
pub use error::ResolveError;

use crate::config::EnvironmentConfig;
use url::Url;

/// Shape of a trimmed, non-empty media reference. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Starts with `http` (`http://` or `https://`).
    Absolute,
    /// Starts with `/`.
    RootRelative,
    /// Contains no `/` at all, e.g. `abc123` or `photo.jpg`.
    BareIdentifier,
    /// Has a `/` but not at the start, e.g. `uploads/a.png`.
    Relative,
}

impl ReferenceKind {
    pub fn classify(reference: &str) -> Self {
        if reference.starts_with("http") {
            ReferenceKind::Absolute
        } else if reference.starts_with('/') {
            ReferenceKind::RootRelative
        } else if !reference.contains('/') {
            ReferenceKind::BareIdentifier
        } else {
            ReferenceKind::Relative
        }
    }
}

/// Resolves `input` against `base_url`, keeping the reason on failure.
pub fn try_resolve_media_url(input: &str, base_url: &str) -> Result<Url, ResolveError> {
    let reference = input.trim();
    if reference.is_empty() {
        return Err(ResolveError::Empty);
    }

    let candidate = match ReferenceKind::classify(reference) {
        ReferenceKind::Absolute => canonical_host_alias(reference).into_owned(),
        ReferenceKind::RootRelative => {
            format!("{}{}", base_url, canonical_media_path(reference))
        }
        ReferenceKind::BareIdentifier => {
            format!("{}{}{}", base_url, alias::MEDIA_FILE_PATH, reference)
        }
        // Plain concatenation, no separator inserted.
        ReferenceKind::Relative => format!("{}{}", base_url, reference),
    };

    Url::parse(&candidate).map_err(|source| ResolveError::Malformed { candidate, source })
}

/// Resolves `input` against `base_url`; `None` means "no displayable media".
///
/// Emits no log events; use [`try_resolve_media_url`] for the failure reason.
///
/// # Examples
///
/// - `resolve_media_url("abc123", "https://sacavia.com")` → `https://sacavia.com/api/media/file/abc123`
/// - `resolve_media_url("http://www.sacavia.com/x", _)` → `http://sacavia.com/x`
/// - `resolve_media_url("  ", _)` → `None`
pub fn resolve_media_url(input: &str, base_url: &str) -> Option<Url> {
    try_resolve_media_url(input, base_url).ok()
}

/// Resolver bound to the base URL of one [`EnvironmentConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaResolver {
    base_url: String,
}

impl MediaResolver {
    pub fn new(env: &EnvironmentConfig) -> Self {
        Self::with_base_url(env.base_api_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn resolve(&self, input: &str) -> Option<Url> {
        resolve_media_url(input, &self.base_url)
    }

    pub fn try_resolve(&self, input: &str) -> Result<Url, ResolveError> {
        try_resolve_media_url(input, &self.base_url)
    }
}
