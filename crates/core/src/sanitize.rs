// ABOUTME: HTML link sanitizer for rendered article views.
// ABOUTME: Rewrites href attributes so anchors stay announced as links but no longer navigate.

use once_cell::sync::Lazy;
use regex::Regex;

static HREF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"href=".*?""#).unwrap());

/// Replacement attribute pair announcing a non-navigable link to
/// assistive technology.
const DISABLED_LINK_ATTRS: &str = r#"role="link" aria-disabled="false""#;

/// Disables navigation for every anchor in a block of HTML markup.
///
/// Each `href="..."` attribute is replaced by
/// `role="link" aria-disabled="false"`, so the element is still exposed
/// as a link by screen readers but no longer navigates anywhere. The
/// input is returned unchanged when it contains no `href` attributes.
pub fn disable_links(html: &str) -> String {
    HREF_RE.replace_all(html, DISABLED_LINK_ATTRS).into_owned()
}
