// ABOUTME: Wikipedia article URL parsing.
// ABOUTME: Decomposes an article URL into title, language display name, and language code.

use url::Url;

use crate::catalog::LanguageCatalog;
use crate::error::Error;

/// An article reference derived from a Wikipedia URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRef {
    /// Percent-decoded article title (the last path segment).
    pub title: String,
    /// Display name resolved through the language catalog.
    pub language_name: String,
    /// The subdomain language code, e.g. `en` from `en.wikipedia.org`.
    pub language_code: String,
}

/// Parses a Wikipedia article URL into an [`ArticleRef`].
///
/// The host's first dotted segment is taken as the language code and
/// the final path segment, percent-decoded, as the title. The display
/// name comes from the catalog's reverse view, so a code the catalog
/// does not know yields [`Error::UnknownLanguageCode`]. A URL without a
/// usable host or path yields [`Error::InvalidUrl`].
pub fn parse_article_url(raw: &str, catalog: &LanguageCatalog) -> Result<ArticleRef, Error> {
    let url = Url::parse(raw).map_err(|_| Error::InvalidUrl(raw.to_string()))?;

    let host = url
        .host_str()
        .ok_or_else(|| Error::InvalidUrl(raw.to_string()))?;
    let language_code = host.split('.').next().unwrap_or_default();
    if language_code.is_empty() {
        return Err(Error::InvalidUrl(raw.to_string()));
    }

    let last_segment = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
        .ok_or_else(|| Error::InvalidUrl(raw.to_string()))?;
    let title = match urlencoding::decode(last_segment) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => last_segment.to_string(),
    };

    let language_name = catalog.name_for_code(language_code)?.to_string();

    Ok(ArticleRef {
        title,
        language_name,
        language_code: language_code.to_string(),
    })
}
