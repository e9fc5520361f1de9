#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Numeral formatting locales available to the Scry dashboard.
//!
//! The table mirrors the locale set shipped with the client-side numeral
//! formatting library. The `en` fallback locale is deliberately absent:
//! consumers that need it (the settings registry) inject it themselves so the
//! fallback keeps its fixed label even when this table changes.

use serde::{Deserialize, Serialize};

/// One numeral formatting locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumeralLanguage {
    /// Locale identifier, e.g. `fr-ca`.
    pub id: String,
    /// English display name, e.g. `French (Canada)`.
    pub name: String,
}

const LANGUAGES: &[(&str, &str)] = &[
    ("bg", "Bulgarian"),
    ("chs", "Chinese (Simplified)"),
    ("cs", "Czech"),
    ("da-dk", "Danish"),
    ("de", "German"),
    ("de-ch", "German (Switzerland)"),
    ("en-gb", "English (United Kingdom)"),
    ("es", "Spanish"),
    ("es-es", "Spanish (Spain)"),
    ("et", "Estonian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("fr-ca", "French (Canada)"),
    ("fr-ch", "French (Switzerland)"),
    ("hu", "Hungarian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("nl-nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt-br", "Portuguese (Brazil)"),
    ("pt-pt", "Portuguese (Portugal)"),
    ("ru", "Russian"),
    ("ru-ua", "Russian (Ukraine)"),
    ("sk", "Slovak"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk-ua", "Ukrainian"),
    ("vi", "Vietnamese"),
];

/// All bundled numeral formatting locales, in identifier order.
#[must_use]
pub fn languages() -> Vec<NumeralLanguage> {
    LANGUAGES
        .iter()
        .map(|(id, name)| NumeralLanguage {
            id: (*id).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_unique_and_sorted() {
        let languages = languages();
        for window in languages.windows(2) {
            assert!(
                window[0].id < window[1].id,
                "'{}' must sort before '{}'",
                window[0].id,
                window[1].id
            );
        }
    }

    #[test]
    fn records_are_complete() {
        for language in languages() {
            assert!(!language.id.is_empty());
            assert!(!language.name.is_empty());
        }
    }

    #[test]
    fn fallback_locale_is_not_bundled() {
        assert!(languages().iter().all(|language| language.id != "en"));
    }
}
