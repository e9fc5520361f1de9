//! In-memory settings service consuming the registry.
//!
//! Overrides are validated against each definition before acceptance and
//! stored in the partition named by the definition's scope. Persistence
//! backends live in the host; this store is the reference consumption
//! surface for the registry contract.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::error::SettingsResult;
use crate::keys::SettingKey;
use crate::registry::SettingsRegistry;
use crate::scope::SettingScope;

/// Host-side settings service: validated overrides keyed by setting key,
/// partitioned by each setting's declared scope.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    registry: SettingsRegistry,
    global: BTreeMap<SettingKey, Value>,
    workspace: BTreeMap<SettingKey, Value>,
}

impl SettingsStore {
    /// Create an empty store over a built registry.
    #[must_use]
    pub const fn new(registry: SettingsRegistry) -> Self {
        Self {
            registry,
            global: BTreeMap::new(),
            workspace: BTreeMap::new(),
        }
    }

    /// The registry this store serves.
    #[must_use]
    pub const fn registry(&self) -> &SettingsRegistry {
        &self.registry
    }

    /// Store an override for `key` after validating it.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKey` when `key` names no registry entry and
    /// `ValidationRejected` when the value fails the entry's validator.
    pub fn set(&mut self, key: &str, value: Value) -> SettingsResult<()> {
        let (setting_key, scope) = {
            let definition = self.registry.lookup(key)?;
            definition.validate_candidate(&value)?;
            (definition.key, definition.scope)
        };

        match scope {
            SettingScope::Global => self.global.insert(setting_key, value),
            SettingScope::Workspace => self.workspace.insert(setting_key, value),
        };
        debug!(key = %setting_key, scope = scope.as_str(), "setting override stored");
        Ok(())
    }

    /// Effective value for `key`: the stored override when present, the
    /// registry default otherwise.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKey` when `key` names no registry entry.
    pub fn get(&self, key: &str) -> SettingsResult<Value> {
        let definition = self.registry.lookup(key)?;
        let stored = match definition.scope {
            SettingScope::Global => self.global.get(&definition.key),
            SettingScope::Workspace => self.workspace.get(&definition.key),
        };
        Ok(stored.cloned().unwrap_or_else(|| definition.default_value.clone()))
    }

    /// Whether an override is stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKey` when `key` names no registry entry.
    pub fn is_overridden(&self, key: &str) -> SettingsResult<bool> {
        let definition = self.registry.lookup(key)?;
        Ok(match definition.scope {
            SettingScope::Global => self.global.contains_key(&definition.key),
            SettingScope::Workspace => self.workspace.contains_key(&definition.key),
        })
    }

    /// Drop the override for `key`, returning whether one was stored.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKey` when `key` names no registry entry.
    pub fn reset(&mut self, key: &str) -> SettingsResult<bool> {
        let (setting_key, scope) = {
            let definition = self.registry.lookup(key)?;
            (definition.key, definition.scope)
        };
        let removed = match scope {
            SettingScope::Global => self.global.remove(&setting_key),
            SettingScope::Workspace => self.workspace.remove(&setting_key),
        };
        Ok(removed.is_some())
    }

    /// Overrides stored in the given scope partition.
    #[must_use]
    pub const fn overrides(&self, scope: SettingScope) -> &BTreeMap<SettingKey, Value> {
        match scope {
            SettingScope::Global => &self.global,
            SettingScope::Workspace => &self.workspace,
        }
    }
}
