//! Registry construction and lookup.
//!
//! # Design
//! - Construction succeeds completely or fails atomically: every invariant
//!   (unique keys, compiling validators, valid defaults, select membership)
//!   is checked before the registry is handed out.
//! - Output is allocated fresh per call; nothing is shared or cached.

use indexmap::IndexMap;
use scry_numerals::NumeralLanguage;
use serde::Serialize;
use tracing::debug;

use crate::definitions;
use crate::error::{SettingsError, SettingsResult};
use crate::i18n::{DefaultMessages, Translator};
use crate::keys::SettingKey;
use crate::model::SettingDefinition;
use crate::scope::RegistryFlags;

/// Ordered mapping from setting key to definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SettingsRegistry {
    entries: IndexMap<SettingKey, SettingDefinition>,
}

impl SettingsRegistry {
    /// Look up a definition by key.
    #[must_use]
    pub fn get(&self, key: SettingKey) -> Option<&SettingDefinition> {
        self.entries.get(&key)
    }

    /// Look up a definition by its wire string.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKey` when the string does not name a registry entry.
    pub fn lookup(&self, key: &str) -> SettingsResult<&SettingDefinition> {
        let parsed = key.parse::<SettingKey>()?;
        self.entries
            .get(&parsed)
            .ok_or_else(|| SettingsError::UnknownKey {
                key: key.to_string(),
            })
    }

    /// Whether the registry contains `key`.
    #[must_use]
    pub fn contains(&self, key: SettingKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SettingKey, &SettingDefinition)> {
        self.entries.iter().map(|(key, definition)| (*key, definition))
    }

    /// Iterate keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = SettingKey> + '_ {
        self.entries.keys().copied()
    }
}

/// Build the registry from environment flags, a locale list, and a
/// translator.
///
/// Pure and deterministic: identical inputs yield structurally identical
/// output, and repeated calls share no state.
///
/// # Errors
///
/// Returns an error when the locale list contains a malformed record, a key
/// is declared twice, a validator fails to compile, or a default value fails
/// its own validator. No partial registry is exposed on failure.
pub fn build_registry(
    flags: RegistryFlags,
    languages: &[NumeralLanguage],
    translator: &dyn Translator,
) -> SettingsResult<SettingsRegistry> {
    let mut entries = IndexMap::new();
    for definition in definitions::all(flags, languages, translator)? {
        definition.validate_default()?;
        let key = definition.key;
        if entries.insert(key, definition).is_some() {
            return Err(SettingsError::DuplicateKey { key });
        }
    }

    debug!(
        entries = entries.len(),
        workspace_enabled = flags.workspace_enabled,
        "settings registry built"
    );
    Ok(SettingsRegistry { entries })
}

/// Build the registry with the bundled numeral locales and passthrough
/// translations. This is the single call a host settings service makes.
///
/// # Errors
///
/// Propagates any construction failure from [`build_registry`].
pub fn default_registry(flags: RegistryFlags) -> SettingsResult<SettingsRegistry> {
    build_registry(flags, &scry_numerals::languages(), &DefaultMessages)
}
