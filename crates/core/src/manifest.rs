// ABOUTME: Remote release-manifest fetching for the update check.
// ABOUTME: Retrieves and parses the JSON document describing the latest application release.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Location of the release manifest for the hosting application.
pub const MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/tecwindow/WikiSearch/main/WikiSearch.json";

/// The release manifest published alongside the application.
///
/// `whats_new` defaults to an empty string when the field is absent;
/// the other fields stay `None` so callers can tell "missing" from
/// "empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(rename = "What's new", default)]
    pub whats_new: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Fetches the release manifest from the fixed [`MANIFEST_URL`].
///
/// A single GET with the fixed user-agent, bounded by `timeout`. Every
/// failure (network error, timeout, non-success status, malformed JSON)
/// propagates to the caller, which owns the user-facing "update check
/// failed" presentation. No retries, no caching.
pub fn fetch_manifest(timeout: Duration) -> Result<ReleaseManifest, Error> {
    fetch_manifest_from(MANIFEST_URL, timeout)
}

/// Fetches a release manifest from an explicit URL.
pub fn fetch_manifest_from(url: &str, timeout: Duration) -> Result<ReleaseManifest, Error> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(crate::USER_AGENT)
        .timeout(timeout)
        .build()?;
    let body = client.get(url).send()?.error_for_status()?.text()?;
    let manifest = serde_json::from_str(&body)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_full_manifest() {
        let manifest: ReleaseManifest = serde_json::from_str(
            r#"{
                "name": "WikiSearch",
                "version": "1.4",
                "What's new": "Bug fixes.",
                "url": "https://example.com/WikiSearch.zip"
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.name.as_deref(), Some("WikiSearch"));
        assert_eq!(manifest.version.as_deref(), Some("1.4"));
        assert_eq!(manifest.whats_new, "Bug fixes.");
        assert_eq!(
            manifest.url.as_deref(),
            Some("https://example.com/WikiSearch.zip")
        );
    }

    #[test]
    fn missing_changelog_defaults_to_empty() {
        let manifest: ReleaseManifest =
            serde_json::from_str(r#"{ "name": "WikiSearch", "version": "1.4" }"#).unwrap();

        assert_eq!(manifest.whats_new, "");
        assert_eq!(manifest.url, None);
    }

    #[test]
    fn empty_object_leaves_fields_absent() {
        let manifest: ReleaseManifest = serde_json::from_str("{}").unwrap();

        assert_eq!(manifest.name, None);
        assert_eq!(manifest.version, None);
        assert_eq!(manifest.whats_new, "");
        assert_eq!(manifest.url, None);
    }
}
