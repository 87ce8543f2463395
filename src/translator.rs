//! The `Translator`: configuration surface and the resolution pipeline.
//!
//! A `Translator` holds the configuration the original design kept in
//! process-wide static state (translations directory, allow-list, default
//! and current language) as an explicit value. Construct one per logical
//! configuration and pass it by reference; nothing here synchronizes, so a
//! concurrent host either shares it behind its own lock or clones one
//! translator per tenant.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::decode::{Decode, JsonDecoder, TranslationTable};
use crate::error::{Result, TranslateError};
use crate::fs::{DiskFilesystem, Filesystem};

/// Resolves text keys to localized strings from per-language JSON files.
///
/// Generic over its [`Filesystem`] and [`Decode`] collaborators so tests can
/// inject fakes; `Translator::new()` wires the production pair.
#[derive(Debug, Clone)]
pub struct Translator<F = DiskFilesystem, D = JsonDecoder> {
    directory_path: PathBuf,
    allowed_languages: Vec<String>,
    default_language: String,
    current_language: String,

    /// When true, `set_current_language` performs the same allow-list check
    /// as `set_default_language`. Off by default: the original validated
    /// only the default language, and callers may rely on that.
    strict_current_language: bool,

    /// When true (the default, matching the original), a decode failure on
    /// the default language is tolerated and resolution proceeds with an
    /// empty table instead of failing.
    lenient_default_decode: bool,

    fs: F,
    decoder: D,
}

impl Translator {
    /// Create a translator with the production collaborators (real disk,
    /// serde_json) and no configuration set.
    pub fn new() -> Self {
        Self::with_collaborators(DiskFilesystem, JsonDecoder)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Filesystem, D: Decode> Translator<F, D> {
    /// Create a translator over explicit collaborators.
    pub fn with_collaborators(fs: F, decoder: D) -> Self {
        Self {
            directory_path: PathBuf::new(),
            allowed_languages: Vec::new(),
            default_language: String::new(),
            current_language: String::new(),
            strict_current_language: false,
            lenient_default_decode: true,
            fs,
            decoder,
        }
    }

    /// Enforce the allow-list on `set_current_language` as well.
    pub fn with_strict_current_language(mut self, strict: bool) -> Self {
        self.strict_current_language = strict;
        self
    }

    /// Tolerate malformed JSON for the default language (on by default).
    ///
    /// With tolerance off, a malformed default-language file fails with
    /// `DecodeFailed` like any other language.
    pub fn with_lenient_default_decode(mut self, lenient: bool) -> Self {
        self.lenient_default_decode = lenient;
        self
    }

    // ==================== Configuration Surface ====================

    /// The configured translations directory (empty until set).
    pub fn directory_path(&self) -> &Path {
        &self.directory_path
    }

    /// Set the translations directory.
    ///
    /// # Arguments
    /// * `path` - Directory holding one `{language}.json` file per language
    /// * `force` - Create the directory if it does not exist
    ///
    /// # Errors
    /// `DirectoryNotFound` if the directory does not exist and `force` is
    /// false, or if `force` is true but creation fails.
    pub fn set_directory_path(&mut self, path: impl Into<PathBuf>, force: bool) -> Result<()> {
        let path = path.into();
        if !self.fs.dir_exists(&path) {
            if !force {
                return Err(TranslateError::DirectoryNotFound(path));
            }
            if let Err(error) = self.fs.create_dir_all(&path) {
                warn!(path = %path.display(), %error, "failed to create translations directory");
                return Err(TranslateError::DirectoryNotFound(path));
            }
        }
        self.directory_path = path;
        Ok(())
    }

    /// The language allow-list, in the order it was set.
    pub fn allowed_languages(&self) -> &[String] {
        &self.allowed_languages
    }

    /// Replace the allow-list.
    ///
    /// Previously set default/current languages are not re-validated; a
    /// shrink can leave them stale until the next resolve call rejects them.
    pub fn set_allowed_languages(&mut self, languages: Vec<String>) {
        self.allowed_languages = languages;
    }

    /// The fallback language used when no current language is set (empty
    /// until set).
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Set the default language.
    ///
    /// # Errors
    /// `LanguageNotAllowed` if `language` is not in the allow-list.
    pub fn set_default_language(&mut self, language: &str) -> Result<()> {
        if !self.is_allowed_language(language) {
            return Err(TranslateError::LanguageNotAllowed(language.to_string()));
        }
        self.default_language = language.to_string();
        Ok(())
    }

    /// The language preferred by resolve calls that pass no language (empty
    /// until set).
    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    /// Set the current language.
    ///
    /// # Errors
    /// `LanguageNotAllowed` only when strict mode is enabled via
    /// [`with_strict_current_language`](Self::with_strict_current_language);
    /// by default no membership check is performed.
    pub fn set_current_language(&mut self, language: &str) -> Result<()> {
        if self.strict_current_language && !self.is_allowed_language(language) {
            return Err(TranslateError::LanguageNotAllowed(language.to_string()));
        }
        self.current_language = language.to_string();
        Ok(())
    }

    /// Whether `language` is in the allow-list.
    pub fn is_allowed_language(&self, language: &str) -> bool {
        self.allowed_languages.iter().any(|l| l == language)
    }

    // ==================== Resolution ====================

    /// Resolve `key` to its localized string.
    ///
    /// Equivalent to [`resolve_with`](Self::resolve_with) with no
    /// replacements.
    pub fn resolve(&self, key: &str, language: Option<&str>) -> Result<String> {
        self.resolve_with(key, language, &[])
    }

    /// Resolve `key` to its localized string, substituting placeholders.
    ///
    /// # Arguments
    /// * `key` - Text key to look up; also the fallback display string when
    ///   the table has no usable entry
    /// * `language` - Target language; `None` (or empty) selects the current
    ///   language, falling back to the default language
    /// * `replacements` - Literal needle/value pairs substituted into the
    ///   template in a single simultaneous pass
    ///
    /// # Errors
    /// One of the six `TranslateError` kinds; every failure is terminal for
    /// the call.
    pub fn resolve_with(
        &self,
        key: &str,
        language: Option<&str>,
        replacements: &[(&str, &str)],
    ) -> Result<String> {
        let language = self.select_language(language)?;

        if !self.is_allowed_language(&language) {
            return Err(TranslateError::LanguageNotAllowed(language));
        }
        if !self.fs.dir_exists(&self.directory_path) {
            return Err(TranslateError::DirectoryNotFound(self.directory_path.clone()));
        }

        let table = self.load_table(&language)?;

        let template = match table.get(key) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => {
                debug!(key, %language, "no table entry, falling back to the key");
                key.to_string()
            }
        };

        if replacements.is_empty() {
            return Ok(template);
        }
        let resolved = substitute(&template, replacements);
        if resolved.is_empty() {
            return Ok(key.to_string());
        }
        Ok(resolved)
    }

    /// Apply the selection precedence: explicit language, else current,
    /// else default.
    fn select_language(&self, language: Option<&str>) -> Result<String> {
        match language {
            Some(language) if !language.is_empty() => Ok(language.to_string()),
            _ => {
                if self.current_language.is_empty() && self.default_language.is_empty() {
                    return Err(TranslateError::NoLanguageConfigured);
                }
                let selected = if !self.current_language.is_empty() {
                    &self.current_language
                } else {
                    &self.default_language
                };
                debug!(language = %selected, "selected configured language");
                Ok(selected.clone())
            }
        }
    }

    fn language_file_path(&self, language: &str) -> PathBuf {
        self.directory_path.join(format!("{language}.json"))
    }

    /// Check, read and decode the language file, fetching a fresh table on
    /// every call.
    fn load_table(&self, language: &str) -> Result<TranslationTable> {
        let path = self.language_file_path(language);
        if !self.fs.file_exists(&path) {
            return Err(TranslateError::FileNotFound(language.to_string()));
        }

        let raw = match self.fs.read_to_string(&path) {
            Ok(raw) if raw.is_empty() => {
                return Err(TranslateError::ReadFailed { path, source: None })
            }
            Ok(raw) => raw,
            Err(source) => {
                return Err(TranslateError::ReadFailed {
                    path,
                    source: Some(source),
                })
            }
        };

        match self.decoder.decode(&raw) {
            Ok(table) => Ok(table),
            Err(source) => {
                if self.lenient_default_decode && language == self.default_language {
                    warn!(
                        %language,
                        path = %path.display(),
                        %source,
                        "tolerating decode failure on the default language"
                    );
                    return Ok(TranslationTable::new());
                }
                Err(TranslateError::DecodeFailed { path, source })
            }
        }
    }
}

/// Simultaneous multi-needle literal substitution.
///
/// Single left-to-right pass over `template`: at each position the longest
/// matching needle wins, and replacement output is never re-scanned (the
/// semantics of PHP's `strtr`). Empty needles are skipped.
fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while !rest.is_empty() {
        let matched = replacements
            .iter()
            .filter(|(needle, _)| !needle.is_empty() && rest.starts_with(needle))
            .max_by_key(|(needle, _)| needle.len());
        match matched {
            Some((needle, value)) => {
                out.push_str(value);
                rest = &rest[needle.len()..];
            }
            None => {
                let mut chars = rest.chars();
                if let Some(ch) = chars.next() {
                    out.push(ch);
                }
                rest = chars.as_str();
            }
        }
    }
    out
}
