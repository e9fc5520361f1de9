use scry_numerals::NumeralLanguage;
use scry_settings::{
    DefaultMessages, RegistryFlags, SettingKey, SettingScope, SettingsError, SettingsStore,
    ValueType, build_registry, default_registry,
};
use serde_json::{Value, json};

fn registry(workspace_enabled: bool) -> scry_settings::SettingsRegistry {
    default_registry(RegistryFlags { workspace_enabled }).expect("registry builds")
}

fn language(id: &str, name: &str) -> NumeralLanguage {
    NumeralLanguage {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn construction_is_deterministic() {
    let flags = RegistryFlags {
        workspace_enabled: true,
    };
    let first = default_registry(flags).expect("registry builds");
    let second = default_registry(flags).expect("registry builds");
    assert_eq!(first, second);
}

#[test]
fn keys_are_pairwise_unique_and_complete() {
    let registry = registry(false);
    assert_eq!(registry.len(), SettingKey::ALL.len());
    for key in SettingKey::ALL.iter().copied() {
        assert!(registry.contains(key), "missing {key}");
    }
}

#[test]
fn default_index_scope_follows_the_workspace_flag() {
    let global = registry(false);
    let workspace = registry(true);

    assert_eq!(
        global.get(SettingKey::DefaultIndex).unwrap().scope,
        SettingScope::Global
    );
    assert_eq!(
        workspace.get(SettingKey::DefaultIndex).unwrap().scope,
        SettingScope::Workspace
    );

    // No other entry changes scope with the flag.
    for (key, definition) in global.iter() {
        if key == SettingKey::DefaultIndex {
            continue;
        }
        assert_eq!(
            definition.scope,
            workspace.get(key).unwrap().scope,
            "scope of {key} must not depend on the workspace flag"
        );
    }
}

#[test]
fn select_defaults_are_members_of_their_options() {
    let registry = registry(false);
    for (key, definition) in registry.iter() {
        if let Some(options) = &definition.allowed_options {
            let default = definition
                .default_value
                .as_str()
                .unwrap_or_else(|| panic!("select default of {key} must be a string"));
            assert!(
                options.iter().any(|option| option == default),
                "default of {key} must be an allowed option"
            );
            let labels = definition
                .option_labels
                .as_ref()
                .unwrap_or_else(|| panic!("select entry {key} must carry option labels"));
            for option in options {
                assert!(labels.contains_key(option), "{key} lacks a label for {option}");
            }
        }
    }
}

#[test]
fn json_defaults_parse_and_validate_against_their_own_schema() {
    let registry = registry(false);
    let mut json_entries = 0;
    for (key, definition) in registry.iter() {
        if definition.effective_value_type() != ValueType::Json {
            continue;
        }
        json_entries += 1;
        let raw = definition
            .default_value
            .as_str()
            .unwrap_or_else(|| panic!("JSON default of {key} must be serialized text"));
        let parsed: Value = serde_json::from_str(raw)
            .unwrap_or_else(|err| panic!("JSON default of {key} must parse: {err}"));
        assert!(!parsed.is_null());
        definition
            .validate_candidate(&definition.default_value)
            .unwrap_or_else(|err| panic!("JSON default of {key} must validate: {err}"));
    }
    assert!(json_entries >= 5, "expected the JSON-typed entries to be present");
}

#[test]
fn fallback_locale_is_always_present_exactly_once() {
    let registry = registry(false);
    let definition = registry.get(SettingKey::FormatNumberLocale).unwrap();
    let options = definition.allowed_options.as_ref().unwrap();
    let labels = definition.option_labels.as_ref().unwrap();

    assert_eq!(options.iter().filter(|option| option.as_str() == "en").count(), 1);
    assert_eq!(options.first().map(String::as_str), Some("en"));
    assert_eq!(labels["en"], "English");
    assert_eq!(options.len(), scry_numerals::languages().len() + 1);
}

#[test]
fn supplied_fallback_locale_is_deduplicated_with_fixed_label() {
    let supplied = [language("fr", "French"), language("en", "English (dup)")];
    let registry = build_registry(RegistryFlags::default(), &supplied, &DefaultMessages)
        .expect("registry builds");

    let definition = registry.get(SettingKey::FormatNumberLocale).unwrap();
    let options = definition.allowed_options.as_ref().unwrap();
    let labels = definition.option_labels.as_ref().unwrap();

    assert_eq!(options.iter().filter(|option| option.as_str() == "en").count(), 1);
    assert!(options.contains(&"fr".to_string()));
    assert_eq!(labels["en"], "English");
    assert_eq!(labels["fr"], "French");
}

#[test]
fn malformed_locale_records_fail_construction() {
    for supplied in [
        vec![language("", "Nameless")],
        vec![language("fr", "")],
        vec![language("fr", "French"), language("fr", "Encore")],
    ] {
        let err = build_registry(RegistryFlags::default(), &supplied, &DefaultMessages)
            .unwrap_err();
        assert!(matches!(err, SettingsError::MalformedLocale { .. }));
    }
}

#[test]
fn max_concurrent_shard_requests_accepts_zero_and_positive_integers() {
    let registry = registry(false);
    let definition = registry
        .get(SettingKey::FetchMaxConcurrentShardRequests)
        .unwrap();

    assert_eq!(definition.default_value, json!(0));
    assert!(definition.validate_candidate(&json!(0)).is_ok());
    assert!(definition.validate_candidate(&json!(32)).is_ok());
    assert!(definition.validate_candidate(&json!(-1)).is_err());
    assert!(definition.validate_candidate(&json!(2.5)).is_err());
    assert!(definition.validate_candidate(&json!("3")).is_err());
}

#[test]
fn store_round_trips_overrides_through_the_registry_contract() {
    let mut store = SettingsStore::new(registry(true));

    // Workspace-scoped entry lands in the workspace partition.
    store.set("defaultIndex", json!("logs-*")).unwrap();
    assert!(store
        .overrides(SettingScope::Workspace)
        .contains_key(&SettingKey::DefaultIndex));
    assert_eq!(store.get("defaultIndex").unwrap(), json!("logs-*"));

    // Global entry keeps its own partition and default fallback.
    assert_eq!(store.get("history:limit").unwrap(), json!(10));
    store.set("history:limit", json!(25)).unwrap();
    assert!(store
        .overrides(SettingScope::Global)
        .contains_key(&SettingKey::HistoryLimit));

    // JSON-typed entries validate the serialized payload on write.
    store
        .set(
            "timefilter:timeDefaults",
            json!("{ \"from\": \"now-1h\", \"to\": \"now\" }"),
        )
        .unwrap();
    let err = store
        .set("timefilter:timeDefaults", json!("{ \"from\": \"now-1h\" }"))
        .unwrap_err();
    assert!(matches!(err, SettingsError::ValidationRejected { .. }));

    // Select entries reject values outside their option set.
    let err = store
        .set("format:number:defaultLocale", json!("tlh"))
        .unwrap_err();
    assert!(matches!(err, SettingsError::ValidationRejected { .. }));
    store.set("format:number:defaultLocale", json!("fr")).unwrap();
}
