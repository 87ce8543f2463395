//! Error taxonomy for the translation resolution pipeline.
//!
//! Every failure is terminal for the call that raised it: the resolver
//! performs no retries and no partial recovery, so each variant maps to
//! exactly one decision point in the pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`Translator`](crate::Translator) operations.
///
/// The only failure that is ever swallowed instead of surfaced is a decode
/// failure on the default language while lenient decoding is enabled (see
/// [`Translator::with_lenient_default_decode`](crate::Translator::with_lenient_default_decode)).
#[derive(Debug, Error)]
pub enum TranslateError {
    /// No language was passed to `resolve` and neither a current nor a
    /// default language has been configured.
    #[error("the current language and the default language have not been set")]
    NoLanguageConfigured,

    /// The selected language is not in the allow-list.
    #[error("language '{0}' is not allowed")]
    LanguageNotAllowed(String),

    /// The configured translations directory does not exist (or could not be
    /// created under `force`).
    #[error("translations directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    /// No `{language}.json` file exists in the translations directory.
    #[error("language file for '{0}' does not exist")]
    FileNotFound(String),

    /// The language file exists but reading it failed or produced no content.
    #[error("failed to read language file '{}'", .path.display())]
    ReadFailed {
        path: PathBuf,
        /// `None` when the read succeeded but the file was empty.
        #[source]
        source: Option<std::io::Error>,
    },

    /// The language file content is not a flat JSON object of strings.
    #[error("language file '{}' could not be decoded", .path.display())]
    DecodeFailed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TranslateError>;
