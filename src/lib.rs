//! Static translation lookup from per-language JSON files.
//!
//! Given a text key, the [`Translator`] resolves a localized string from a
//! JSON file selected by a language code, with optional placeholder
//! substitution. One file per language lives at
//! `{directory}/{language}.json` and holds a flat object of text keys to
//! template strings. There is no caching and no pluralization: every
//! resolve call re-reads and re-decodes the file, and a key with no usable
//! entry resolves to itself.
//!
//! # Architecture
//!
//! - `translator`: configuration surface and the resolution pipeline
//! - `fs`: filesystem collaborator (swappable in tests)
//! - `decode`: JSON decoder collaborator and the `TranslationTable` type
//! - `error`: the six-kind error taxonomy, one kind per pipeline gate
//!
//! # Example
//!
//! ```rust,no_run
//! use multilang::Translator;
//!
//! # fn main() -> multilang::Result<()> {
//! let mut translator = Translator::new();
//! translator.set_directory_path("/srv/app/langs", false)?;
//! translator.set_allowed_languages(vec!["en".to_string(), "fr".to_string()]);
//! translator.set_default_language("en")?;
//! translator.set_current_language("fr")?;
//!
//! // Looks up "greeting" in /srv/app/langs/fr.json.
//! let greeting = translator.resolve("greeting", None)?;
//!
//! // Placeholder delimiters are a caller convention; substitution is
//! // literal string replacement.
//! let personal = translator.resolve_with("greeting", None, &[("{{name}}", "Ada")])?;
//! # Ok(())
//! # }
//! ```

mod decode;
mod error;
mod fs;
mod translator;

pub use decode::{Decode, JsonDecoder, TranslationTable};
pub use error::{Result, TranslateError};
pub use fs::{DiskFilesystem, Filesystem};
pub use translator::Translator;
