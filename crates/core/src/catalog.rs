// ABOUTME: Language catalog loaded from the bundled LanguageCodes.json asset.
// ABOUTME: Maps language display names to short codes with a reverse code-to-name view.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// Fixed relative name of the bundled language-code list.
pub const LANGUAGE_CODES_FILE: &str = "LanguageCodes.json";

#[derive(Debug, Deserialize)]
struct LanguageEntry {
    name: String,
    code: String,
}

/// The name/code lookup table for Wikipedia language editions.
///
/// Built once from the bundled JSON file and treated as immutable for
/// the process lifetime. Names and codes are one-to-one; on a duplicate
/// name or code the first entry wins.
#[derive(Debug, Clone, Default)]
pub struct LanguageCatalog {
    names: Vec<String>,
    codes_by_name: HashMap<String, String>,
    names_by_code: HashMap<String, String>,
}

impl LanguageCatalog {
    /// Loads the catalog from the fixed bundled path.
    ///
    /// An absent file yields [`Error::MissingAsset`]. The catalog backs
    /// nearly every text-facing feature, so the application treats that
    /// error as fatal; the library only reports it.
    pub fn load() -> Result<Self, Error> {
        Self::load_from(Path::new(LANGUAGE_CODES_FILE))
    }

    /// Loads the catalog from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let bytes = fs::read(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                Error::MissingAsset(path.display().to_string())
            } else {
                Error::Io {
                    path: path.display().to_string(),
                    source: err,
                }
            }
        })?;
        Self::from_slice(&bytes)
    }

    /// Builds the catalog from raw JSON: an array of
    /// `{ "name": ..., "code": ... }` objects.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let entries: Vec<LanguageEntry> = serde_json::from_slice(bytes)?;

        let mut catalog = LanguageCatalog::default();
        for entry in entries {
            if catalog.codes_by_name.contains_key(&entry.name)
                || catalog.names_by_code.contains_key(&entry.code)
            {
                continue;
            }
            catalog.names.push(entry.name.clone());
            catalog
                .names_by_code
                .insert(entry.code.clone(), entry.name.clone());
            catalog.codes_by_name.insert(entry.name, entry.code);
        }
        Ok(catalog)
    }

    /// Display names in file order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Short code for a display name.
    pub fn code_for_name(&self, name: &str) -> Option<&str> {
        self.codes_by_name.get(name).map(String::as_str)
    }

    /// Display name for a short code (reverse view).
    ///
    /// A code with no catalog entry yields
    /// [`Error::UnknownLanguageCode`] so callers get a distinct,
    /// guardable condition instead of an opaque crash.
    pub fn name_for_code(&self, code: &str) -> Result<&str, Error> {
        self.names_by_code
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownLanguageCode(code.to_string()))
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
