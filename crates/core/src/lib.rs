// ABOUTME: Core helper library for the WikiSearch desktop utility.
// ABOUTME: Provides manifest fetching, table extraction, language catalogs, URL parsing, text statistics, and translation selection.

//! WikiSearch core helpers.
//!
//! A small collection of independent helper functions backing a desktop
//! Wikipedia-search application:
//!
//! - fetch the remote release manifest ([`fetch_manifest`])
//! - scrape the `<table>` text out of an article page ([`fetch_tables`])
//! - load the bundled language-code list ([`LanguageCatalog`])
//! - decompose an article URL into title and language ([`parse_article_url`])
//! - compute line/word/sentence counts ([`analyze`])
//! - disable navigation in rendered HTML ([`disable_links`])
//! - resolve the user's language setting to a [`Translator`]
//!
//! The functions do not coordinate with each other; each is called
//! directly by the hosting GUI. All network calls are blocking and are
//! attempted exactly once, bounded only by the caller-supplied timeout.

pub mod article;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod manifest;
pub mod sanitize;
pub mod stats;
pub mod tables;

pub use article::{parse_article_url, ArticleRef};
pub use catalog::{LanguageCatalog, LANGUAGE_CODES_FILE};
pub use error::Error;
pub use i18n::{
    select_translator, select_translator_in, Locale, Settings, Translator, CATALOG_NAME,
    LOCALE_DIR,
};
pub use manifest::{fetch_manifest, fetch_manifest_from, ReleaseManifest, MANIFEST_URL};
pub use sanitize::disable_links;
pub use stats::{analyze, TextStats};
pub use tables::{fetch_tables, remove_blank_lines, tables_from_html};

/// User-agent sent with every outgoing HTTP request.
///
/// Fixed string; some CDNs reject requests without one.
pub const USER_AGENT: &str = "WikiSearch/1.4 (Windows)";
