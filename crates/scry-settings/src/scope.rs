//! Storage scope for settings and the conditional scope resolution rule.

use serde::Serialize;

/// Granularity at which a setting value is stored and overridden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingScope {
    /// Single value shared by the whole deployment.
    #[default]
    Global,
    /// Value stored per workspace, shadowing the global default.
    Workspace,
}

impl SettingScope {
    /// Render the scope as its lowercase string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Workspace => "workspace",
        }
    }
}

/// Environment flags supplied at registry construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryFlags {
    /// Whether the workspace feature is enabled for this deployment.
    pub workspace_enabled: bool,
}

/// Resolve the scope of the default-index entry from the workspace flag.
///
/// The default index is the only entry whose scope depends on runtime flags:
/// with workspaces enabled, each workspace picks its own default index.
#[must_use]
pub const fn resolve_default_index_scope(workspace_enabled: bool) -> SettingScope {
    if workspace_enabled {
        SettingScope::Workspace
    } else {
        SettingScope::Global
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_follows_workspace_flag() {
        assert_eq!(resolve_default_index_scope(true), SettingScope::Workspace);
        assert_eq!(resolve_default_index_scope(false), SettingScope::Global);
    }

    #[test]
    fn scope_renders_lowercase() {
        assert_eq!(SettingScope::Global.as_str(), "global");
        assert_eq!(SettingScope::Workspace.as_str(), "workspace");
    }
}
