// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! URI templates for the upstream event-management API.
//!
//! A [`UriTemplate`] pairs a literal resource path (optionally containing a
//! single `{id}` placeholder) with a flag saying whether the application token
//! is appended as a query parameter. Resolution is plain string composition:
//! `endpoint + base path + substituted path [+ "?" + token param + "=" + token]`.
//! Literal characters are never re-encoded or escaped.

/// Versioned base path shared by every upstream resource.
pub const VERSION_SPEC: &str = "/EvtMgmt/api/v2.0";

/// Query-parameter name carrying the application token.
pub const TOKEN_PARAM: &str = "emApplicationtoken";

/// Placeholder substituted with a concrete event or sponsorship id.
const ID_PLACEHOLDER: &str = "{id}";

/// Published-events list. No id substitution.
pub const EVENTS: UriTemplate = UriTemplate::tokenized("/events/published");

/// Per-event speakers collection.
pub const SPEAKERS: UriTemplate = UriTemplate::tokenized("/events/{id}/speakers");

/// Per-event sponsorships collection.
pub const SPONSORSHIPS: UriTemplate = UriTemplate::tokenized("/events/{id}/sponsorships");

/// Per-sponsorship logo asset. Asset path only, no token.
pub const SPONSOR_LOGO: UriTemplate = UriTemplate::plain("/sponsorships/{id}/logo");

/// A templated resource path under [`VERSION_SPEC`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriTemplate {
    path: &'static str,
    with_token: bool,
}

impl UriTemplate {
    const fn tokenized(path: &'static str) -> Self {
        Self {
            path,
            with_token: true,
        }
    }

    const fn plain(path: &'static str) -> Self {
        Self {
            path,
            with_token: false,
        }
    }

    /// Expand this template into one absolute request URI.
    ///
    /// `endpoint` must already be normalized (no trailing slash, see
    /// [`crate::config::validate_connector_config`]). `id` replaces the
    /// `{id}` placeholder when present; templates without a placeholder
    /// ignore it.
    pub fn resolve(&self, endpoint: &str, token: &str, id: Option<&str>) -> String {
        let path = match id {
            Some(id) => self.path.replace(ID_PLACEHOLDER, id),
            None => self.path.to_string(),
        };

        if self.with_token {
            format!("{endpoint}{VERSION_SPEC}{path}?{TOKEN_PARAM}={token}")
        } else {
            format!("{endpoint}{VERSION_SPEC}{path}")
        }
    }
}

/// Build the absolute URL for a relative asset path in the upstream asset
/// namespace (speaker images are stored this way).
pub fn asset_url(endpoint: &str, relative_path: &str) -> String {
    let separator = if relative_path.starts_with('/') { "" } else { "/" };
    format!("{endpoint}{VERSION_SPEC}{separator}{relative_path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_template_has_no_placeholder() {
        let uri = EVENTS.resolve("https://api.test", "T", None);
        assert_eq!(
            uri,
            "https://api.test/EvtMgmt/api/v2.0/events/published?emApplicationtoken=T"
        );
    }

    #[test]
    fn test_speakers_template_substitutes_id() {
        let uri = SPEAKERS.resolve("https://api.test", "T", Some("42"));
        assert_eq!(
            uri,
            "https://api.test/EvtMgmt/api/v2.0/events/42/speakers?emApplicationtoken=T"
        );
    }

    #[test]
    fn test_sponsor_logo_template_carries_no_token() {
        let uri = SPONSOR_LOGO.resolve("https://api.test", "T", Some("p-9"));
        assert_eq!(uri, "https://api.test/EvtMgmt/api/v2.0/sponsorships/p-9/logo");
    }

    #[test]
    fn test_literal_characters_are_not_reencoded() {
        // Ids can contain characters that a URL encoder would escape; the
        // resolver must pass them through untouched.
        let uri = SPEAKERS.resolve("https://api.test", "a+b", Some("id with space"));
        assert_eq!(
            uri,
            "https://api.test/EvtMgmt/api/v2.0/events/id with space/speakers?emApplicationtoken=a+b"
        );
    }

    #[test]
    fn test_asset_url_joins_relative_paths() {
        assert_eq!(
            asset_url("https://api.test", "images/speaker-1.png"),
            "https://api.test/EvtMgmt/api/v2.0/images/speaker-1.png"
        );
        assert_eq!(
            asset_url("https://api.test", "/images/speaker-1.png"),
            "https://api.test/EvtMgmt/api/v2.0/images/speaker-1.png"
        );
    }
}
