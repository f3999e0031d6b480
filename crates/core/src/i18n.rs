// ABOUTME: Translation selection for user-visible strings.
// ABOUTME: Resolves the language setting to a message catalog, falling back to an identity translator.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Directory holding the per-language message catalogs.
pub const LOCALE_DIR: &str = "languages";

/// Catalog identifier; each locale ships `<code>/wikisearch.json`.
pub const CATALOG_NAME: &str = "wikisearch";

/// The languages the application ships translations for.
///
/// A fixed set; the language-code catalog used for article URLs is a
/// separate, larger table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    English,
    Arabic,
    Spanish,
    French,
}

impl Locale {
    /// Folder code the locale's catalog lives under.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Arabic => "ar",
            Locale::Spanish => "es",
            Locale::French => "fr",
        }
    }

    /// Display name used in the application settings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Arabic => "Arabic",
            Locale::Spanish => "Spanish",
            Locale::French => "French",
        }
    }

    /// Resolves a settings display name to a supported locale.
    pub fn from_name(name: &str) -> Option<Locale> {
        match name {
            "English" => Some(Locale::English),
            "Arabic" => Some(Locale::Arabic),
            "Spanish" => Some(Locale::Spanish),
            "French" => Some(Locale::French),
            _ => None,
        }
    }

    /// All supported locales.
    pub fn all() -> &'static [Locale] {
        &[Locale::English, Locale::Arabic, Locale::Spanish, Locale::French]
    }
}

/// The slice of application settings the selector cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Language display name, e.g. `"Spanish"`.
    pub language: Option<String>,
}

/// A message translator handed down to every component that renders
/// user-visible strings.
///
/// Passed explicitly rather than installed as process-wide state, so
/// callers are always clear about which translator they use.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    strings: HashMap<String, String>,
}

impl Translator {
    /// The fallback translator: returns every message unchanged.
    pub fn identity() -> Self {
        Translator::default()
    }

    /// Builds a translator from an already-loaded catalog map.
    pub fn from_catalog(strings: HashMap<String, String>) -> Self {
        Translator { strings }
    }

    /// Translates a message, returning the input unchanged when the
    /// catalog has no entry for it.
    pub fn translate<'a>(&'a self, msg: &'a str) -> &'a str {
        self.strings.get(msg).map(String::as_str).unwrap_or(msg)
    }

    /// Whether this is the identity fallback (no catalog loaded).
    pub fn is_identity(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Resolves the language setting to a translator, reading catalogs from
/// the fixed [`LOCALE_DIR`].
///
/// A missing or unsupported setting, or any failure loading the
/// catalog file, falls back to the identity translator. Selection
/// never errors.
pub fn select_translator(settings: &Settings) -> Translator {
    select_translator_in(Path::new(LOCALE_DIR), settings)
}

/// Resolves the language setting against catalogs under `dir`.
pub fn select_translator_in(dir: &Path, settings: &Settings) -> Translator {
    let Some(name) = settings.language.as_deref() else {
        return Translator::identity();
    };
    let Some(locale) = Locale::from_name(name) else {
        tracing::debug!(language = name, "unsupported language setting, using fallback");
        return Translator::identity();
    };

    let path = dir
        .join(locale.code())
        .join(format!("{CATALOG_NAME}.json"));
    match load_catalog(&path) {
        Ok(strings) => Translator::from_catalog(strings),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "catalog load failed, using fallback");
            Translator::identity()
        }
    }
}

fn load_catalog(path: &Path) -> Result<HashMap<String, String>, crate::error::Error> {
    let bytes = fs::read(path).map_err(|err| crate::error::Error::Io {
        path: path.display().to_string(),
        source: err,
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}
