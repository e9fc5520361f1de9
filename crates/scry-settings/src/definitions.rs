//! The settings payload: every entry served by the registry.
//!
//! Entries are declared in presentation order, grouped the way the settings
//! UI groups them. Construction is pure: the locale list and translator are
//! supplied by the caller, and nothing is computed at module load time.

use std::collections::BTreeMap;

use scry_numerals::NumeralLanguage;
use serde_json::json;
use tracing::warn;

use crate::defaults::{
    DEFAULT_QUERY_LANGUAGE, FALLBACK_NUMERAL_LOCALE, FALLBACK_NUMERAL_LOCALE_LABEL,
};
use crate::error::{SettingsError, SettingsResult};
use crate::i18n::{Message, Translator};
use crate::keys::SettingKey;
use crate::model::{SettingDefinition, ValueType};
use crate::schema;
use crate::scope::{RegistryFlags, resolve_default_index_scope};

/// Assemble every setting definition, in declaration order.
pub(crate) fn all(
    flags: RegistryFlags,
    languages: &[NumeralLanguage],
    translator: &dyn Translator,
) -> SettingsResult<Vec<SettingDefinition>> {
    let mut entries = search_entries(translator);
    entries.extend(query_entries(translator));
    entries.extend(enhancement_entries(translator));
    entries.extend(fetch_entries(translator));
    entries.extend(discover_entries(translator));
    entries.extend(index_entries(flags, translator));
    entries.extend(format_entries(languages, translator)?);
    entries.extend(timefilter_entries(translator)?);
    Ok(entries)
}

fn search_entries(translator: &dyn Translator) -> Vec<SettingDefinition> {
    vec![
        SettingDefinition::new(
            SettingKey::MetaFields,
            translator.translate(&Message::new("settings.search.metaFieldsTitle", "Meta fields")),
            json!(["_source", "_id", "_type", "_index", "_score"]),
            schema::array_of(schema::string()),
        )
        .with_description(translator.translate(&Message::new(
            "settings.search.metaFieldsText",
            "Fields that exist outside of _source to merge into a document when displaying it",
        ))),
        SettingDefinition::new(
            SettingKey::DocTableHighlight,
            translator.translate(&Message::new(
                "settings.discover.docTableHighlightTitle",
                "Highlight results",
            )),
            json!(true),
            schema::boolean(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.discover.docTableHighlightText",
            "Highlight results in Discover and saved-search panels. \
             Highlighting slows requests down when working on big documents.",
        )))
        .with_group_tags(&["discover"]),
        SettingDefinition::new(
            SettingKey::ShortDotsEnable,
            translator.translate(&Message::new(
                "settings.search.shortenFieldsTitle",
                "Shorten fields",
            )),
            json!(false),
            schema::boolean(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.search.shortenFieldsText",
            "Shorten long field paths, for example show f.b.baz instead of foo.bar.baz",
        ))),
        SettingDefinition::new(
            SettingKey::SearchIncludeFrozen,
            "Search in frozen indices",
            json!(false),
            schema::boolean(),
        )
        .with_description(
            "Include frozen indices in results when enabled. \
             Searching through frozen indices can increase search time.",
        )
        .with_group_tags(&["search"]),
        SettingDefinition::new(
            SettingKey::SearchIncludeAllFields,
            translator.translate(&Message::new(
                "settings.search.includeAllFieldsTitle",
                "Include all fields in search request",
            )),
            json!(false),
            schema::boolean(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.search.includeAllFieldsText",
            "Experimental: adds the \"fields\": [\"*\"] property to search request bodies",
        )))
        .with_group_tags(&["search"]),
        SettingDefinition::new(
            SettingKey::SearchMaxRecentDatasets,
            translator.translate(&Message::new(
                "settings.search.maxRecentDatasetsTitle",
                "Maximum datasets in recents list",
            )),
            json!(4),
            schema::number(),
        )
        .with_value_type(ValueType::Number)
        .with_group_tags(&["search"]),
        SettingDefinition::new(
            SettingKey::HistoryLimit,
            translator.translate(&Message::new("settings.search.historyLimitTitle", "History limit")),
            json!(10),
            schema::number(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.search.historyLimitText",
            "In fields that have history, such as query inputs, show this many recent values",
        ))),
    ]
}

fn query_entries(translator: &dyn Translator) -> Vec<SettingDefinition> {
    let lucene_label =
        translator.translate(&Message::new("settings.query.languageLucene", "Lucene"));
    let language_title =
        translator.translate(&Message::new("settings.query.languageTitle", "Query language"));

    let language_labels: BTreeMap<String, String> = [
        ("lucene".to_string(), lucene_label.clone()),
        (
            "dql".to_string(),
            translator.translate(&Message::new("settings.query.languageDql", "DQL")),
        ),
    ]
    .into_iter()
    .collect();

    vec![
        SettingDefinition::new(
            SettingKey::QueryStringOptions,
            translator.translate(&Message::new(
                "settings.query.queryStringOptionsTitle",
                "Query string options",
            )),
            json!("{ \"analyze_wildcard\": true }"),
            schema::object(&[("analyze_wildcard", schema::boolean())]),
        )
        .with_description(translator.translate(
            &Message::new(
                "settings.query.queryStringOptionsText",
                "Options for the lucene query string parser. \
                 Only used when \"{languageSetting}\" is set to {lucene}.",
            )
            .with_value("languageSetting", language_title.clone())
            .with_value("lucene", lucene_label),
        ))
        .with_value_type(ValueType::Json),
        SettingDefinition::new(
            SettingKey::QueryAllowLeadingWildcards,
            translator.translate(&Message::new(
                "settings.query.allowWildcardsTitle",
                "Allow leading wildcards in query",
            )),
            json!(true),
            schema::boolean(),
        )
        .with_description(translator.translate(
            &Message::new(
                "settings.query.allowWildcardsText",
                "When set, * is allowed as the first character in a query clause. \
                 To disallow leading wildcards in basic lucene queries, use {queryStringOptions}.",
            )
            .with_value("queryStringOptions", SettingKey::QueryStringOptions.as_str()),
        )),
        SettingDefinition::new(
            SettingKey::SearchQueryLanguage,
            language_title,
            json!(DEFAULT_QUERY_LANGUAGE),
            schema::string(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.query.languageText",
            "Query language used by the query bar. \
             DQL is a language built specifically for Scry.",
        )))
        .with_value_type(ValueType::Select)
        .with_options(
            vec!["lucene".to_string(), "dql".to_string()],
            language_labels,
        ),
        SettingDefinition::new(
            SettingKey::QueryLanguageBlocklist,
            translator.translate(&Message::new(
                "settings.query.languageBlocklistTitle",
                "Additional query languages blocklist",
            )),
            json!(["none"]),
            schema::array_of(schema::string()),
        )
        .with_description(translator.translate(&Message::new(
            "settings.query.languageBlocklistText",
            "Additional languages blocked from the query editor. \
             DQL and Lucene stay available even if listed.",
        ))),
    ]
}

fn enhancement_entries(translator: &dyn Translator) -> Vec<SettingDefinition> {
    let strategy_labels: BTreeMap<String, String> = [
        (
            "perSource".to_string(),
            translator.translate(&Message::new(
                "settings.query.schemaRefreshPerSource",
                "On data source change",
            )),
        ),
        (
            "perQuery".to_string(),
            translator.translate(&Message::new(
                "settings.query.schemaRefreshPerQuery",
                "Per query",
            )),
        ),
    ]
    .into_iter()
    .collect();

    vec![
        SettingDefinition::new(
            SettingKey::QueryEnhancementsEnabled,
            translator.translate(&Message::new(
                "settings.query.enhancementsEnableTitle",
                "Enable query enhancements",
            )),
            json!(false),
            schema::boolean(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.query.enhancementsEnableText",
            "Experimental: allows querying data using enhancements where available. \
             When disabled, only production-ready query languages are offered.",
        )))
        .with_group_tags(&["search"])
        .with_reload_required(),
        SettingDefinition::new(
            SettingKey::QueryEnhancementsSuggestValues,
            translator.translate(&Message::new(
                "settings.query.enhancementsSuggestValuesTitle",
                "Allow value suggestions through the enhancements APIs",
            )),
            json!(true),
            schema::boolean(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.query.enhancementsSuggestValuesText",
            "Experimental: value suggestions are fetched through the enhancements APIs, \
             sorted by the most frequent options. Requires query enhancements enabled.",
        )))
        .with_group_tags(&["search"])
        .with_reload_required(),
        SettingDefinition::new(
            SettingKey::QueryEnhancementsSuggestValuesLimit,
            translator.translate(&Message::new(
                "settings.query.enhancementsSuggestValuesLimitTitle",
                "Enhancements value suggestion limit",
            )),
            json!(200),
            schema::number(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.query.enhancementsSuggestValuesLimitText",
            "Experimental: the limit on the number of suggested values fetched. \
             Requires query enhancements enabled.",
        )))
        .with_group_tags(&["search"])
        .with_reload_required(),
        SettingDefinition::new(
            SettingKey::SchemaRefreshStrategy,
            translator.translate(&Message::new(
                "settings.query.schemaRefreshStrategyTitle",
                "Schema refresh strategy",
            )),
            json!("perSource"),
            schema::string(),
        )
        .with_description(translator.translate(
            &Message::new(
                "settings.query.schemaRefreshStrategyText",
                "How often the result-set schema is refreshed. \
                 {perSource} refreshes it when the data source changes; \
                 {perQuery} refreshes it on every query, which is more expensive \
                 but keeps the schema aligned with the result set. \
                 Experimental: requires query enhancements enabled.",
            )
            .with_value("perSource", strategy_labels["perSource"].clone())
            .with_value("perQuery", strategy_labels["perQuery"].clone()),
        ))
        .with_value_type(ValueType::Select)
        .with_options(
            vec!["perSource".to_string(), "perQuery".to_string()],
            strategy_labels,
        )
        .with_group_tags(&["search"]),
    ]
}

fn fetch_entries(translator: &dyn Translator) -> Vec<SettingDefinition> {
    let preference_labels: BTreeMap<String, String> = [
        (
            "sessionId".to_string(),
            translator.translate(&Message::new(
                "settings.fetch.requestPreferenceSessionId",
                "Session ID",
            )),
        ),
        (
            "custom".to_string(),
            translator.translate(&Message::new("settings.fetch.requestPreferenceCustom", "Custom")),
        ),
        (
            "none".to_string(),
            translator.translate(&Message::new("settings.fetch.requestPreferenceNone", "None")),
        ),
    ]
    .into_iter()
    .collect();

    vec![
        SettingDefinition::new(
            SettingKey::FetchIgnoreUnmappedFilters,
            translator.translate(&Message::new("settings.fetch.ignoreFilterTitle", "Ignore filters")),
            json!(false),
            schema::boolean(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.fetch.ignoreFilterText",
            "Improves dashboards that mix panels over dissimilar indices. \
             When enabled, a filter is skipped for a panel whose index does not \
             contain the filtering field; when disabled, all filters apply to all panels.",
        )))
        .with_group_tags(&["search"]),
        SettingDefinition::new(
            SettingKey::FetchRequestPreference,
            translator.translate(&Message::new(
                "settings.fetch.requestPreferenceTitle",
                "Request preference",
            )),
            json!("sessionId"),
            schema::string(),
        )
        .with_description(translator.translate(
            &Message::new(
                "settings.fetch.requestPreferenceText",
                "Which shards handle search requests. \
                 {sessionId} pins all requests of a session to the same shards so their \
                 caches are reused; {custom} routes with the value of \
                 {customPreferenceSetting}; {none} lets requests spread over all shard \
                 copies, which may be faster but can return inconsistent results while \
                 shards refresh.",
            )
            .with_value("sessionId", preference_labels["sessionId"].clone())
            .with_value("custom", preference_labels["custom"].clone())
            .with_value("none", preference_labels["none"].clone())
            .with_value(
                "customPreferenceSetting",
                SettingKey::FetchCustomRequestPreference.as_str(),
            ),
        ))
        .with_value_type(ValueType::Select)
        .with_options(
            vec![
                "sessionId".to_string(),
                "custom".to_string(),
                "none".to_string(),
            ],
            preference_labels,
        )
        .with_group_tags(&["search"]),
        SettingDefinition::new(
            SettingKey::FetchCustomRequestPreference,
            translator.translate(&Message::new(
                "settings.fetch.customRequestPreferenceTitle",
                "Custom request preference",
            )),
            json!("_local"),
            schema::string(),
        )
        .with_description(translator.translate(
            &Message::new(
                "settings.fetch.customRequestPreferenceText",
                "Preference value used when {requestPreferenceSetting} is set to \"custom\".",
            )
            .with_value(
                "requestPreferenceSetting",
                SettingKey::FetchRequestPreference.as_str(),
            ),
        ))
        .with_value_type(ValueType::String)
        .with_group_tags(&["search"]),
        SettingDefinition::new(
            SettingKey::FetchMaxConcurrentShardRequests,
            translator.translate(&Message::new(
                "settings.fetch.maxConcurrentShardRequestsTitle",
                "Max concurrent shard requests",
            )),
            json!(0),
            schema::unsigned_integer(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.fetch.maxConcurrentShardRequestsText",
            "Cap on concurrent shard requests for multi-search requests sent by Scry. \
             Set to 0 to disable this cap and use the cluster default.",
        )))
        .with_value_type(ValueType::Number)
        .with_group_tags(&["search"]),
        SettingDefinition::new(
            SettingKey::FetchBatchSearches,
            translator.translate(&Message::new(
                "settings.fetch.batchSearchesTitle",
                "Batch concurrent searches",
            )),
            json!(false),
            schema::boolean(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.fetch.batchSearchesText",
            "When disabled, dashboard panels load individually and searches stop when \
             users navigate away or change the query. When enabled, panels load together \
             once all data is fetched and searches run to completion.",
        )))
        .with_value_type(ValueType::Boolean)
        .with_group_tags(&["search"]),
    ]
}

fn discover_entries(translator: &dyn Translator) -> Vec<SettingDefinition> {
    vec![
        SettingDefinition::new(
            SettingKey::SortOptions,
            translator.translate(&Message::new("settings.discover.sortOptionsTitle", "Sort options")),
            json!("{ \"unmapped_type\": \"boolean\" }"),
            schema::object(&[("unmapped_type", schema::string())]),
        )
        .with_description(translator.translate(&Message::new(
            "settings.discover.sortOptionsText",
            "Options passed to the sort parameter of search requests",
        )))
        .with_value_type(ValueType::Json),
        SettingDefinition::new(
            SettingKey::HistogramBarTarget,
            translator.translate(&Message::new(
                "settings.histogram.barTargetTitle",
                "Target bars",
            )),
            json!(50),
            schema::number(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.histogram.barTargetText",
            "Attempt to generate around this many bars when using \"auto\" interval in date histograms",
        ))),
        SettingDefinition::new(
            SettingKey::HistogramMaxBars,
            translator.translate(&Message::new(
                "settings.histogram.maxBarsTitle",
                "Maximum bars",
            )),
            json!(100),
            schema::number(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.histogram.maxBarsText",
            "Never show more than this many bars in date histograms; scale values if needed",
        ))),
        SettingDefinition::new(
            SettingKey::FilterEditorSuggestValues,
            translator.translate(&Message::new(
                "settings.filters.editorSuggestValuesTitle",
                "Filter editor suggest values",
            )),
            json!(true),
            schema::boolean(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.filters.editorSuggestValuesText",
            "Set to false to prevent the filter editor from suggesting values for fields",
        ))),
        SettingDefinition::new(
            SettingKey::FiltersPinnedByDefault,
            translator.translate(&Message::new(
                "settings.filters.pinnedByDefaultTitle",
                "Pin filters by default",
            )),
            json!(false),
            schema::boolean(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.filters.pinnedByDefaultText",
            "Whether filters should have a global state (be pinned) by default",
        ))),
    ]
}

fn index_entries(flags: RegistryFlags, translator: &dyn Translator) -> Vec<SettingDefinition> {
    vec![
        SettingDefinition::new(
            SettingKey::DefaultIndex,
            translator.translate(&Message::new("settings.index.defaultIndexTitle", "Default index")),
            serde_json::Value::Null,
            schema::nullable_string(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.index.defaultIndexText",
            "The index to access if no index is set",
        )))
        .with_value_type(ValueType::String)
        .scoped(resolve_default_index_scope(flags.workspace_enabled)),
        SettingDefinition::new(
            SettingKey::IndexPatternPlaceholder,
            translator.translate(&Message::new(
                "settings.index.patternPlaceholderTitle",
                "Index pattern placeholder",
            )),
            json!(""),
            schema::string(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.index.patternPlaceholderText",
            "The placeholder for the \"Index pattern name\" field on the index pattern creation form",
        ))),
    ]
}

fn format_entries(
    languages: &[NumeralLanguage],
    translator: &dyn Translator,
) -> SettingsResult<Vec<SettingDefinition>> {
    let (locale_options, locale_labels) = numeral_locale_options(languages)?;

    let mut entries = vec![
        SettingDefinition::new(
            SettingKey::FormatDefaultTypeMap,
            translator.translate(&Message::new(
                "settings.format.defaultTypeMapTitle",
                "Field type format name",
            )),
            json!("{\n  \"ip\": { \"id\": \"ip\", \"params\": {} },\n  \"date\": { \"id\": \"date\", \"params\": {} },\n  \"date_nanos\": { \"id\": \"date_nanos\", \"params\": {} },\n  \"number\": { \"id\": \"number\", \"params\": {} },\n  \"boolean\": { \"id\": \"boolean\", \"params\": {} },\n  \"_source\": { \"id\": \"_source\", \"params\": {} },\n  \"_default_\": { \"id\": \"string\", \"params\": {} }\n}"),
            field_format_map_schema(),
        )
        .with_description(translator.translate(
            &Message::new(
                "settings.format.defaultTypeMapText",
                "Map of the format name to use by default for each field type. \
                 {defaultFormat} is used if the field type is not mentioned explicitly.",
            )
            .with_value("defaultFormat", "\"_default_\""),
        ))
        .with_value_type(ValueType::Json),
    ];

    for (key, title_id, title, format_name, pattern) in [
        (
            SettingKey::FormatNumberPattern,
            "settings.format.numberPatternTitle",
            "Number format",
            "number",
            "0,0.[000]",
        ),
        (
            SettingKey::FormatPercentPattern,
            "settings.format.percentPatternTitle",
            "Percent format",
            "percent",
            "0,0.[000]%",
        ),
        (
            SettingKey::FormatBytesPattern,
            "settings.format.bytesPatternTitle",
            "Bytes format",
            "bytes",
            "0,0.[0]b",
        ),
        (
            SettingKey::FormatCurrencyPattern,
            "settings.format.currencyPatternTitle",
            "Currency format",
            "currency",
            "($0,0.[00])",
        ),
    ] {
        entries.push(
            SettingDefinition::new(
                key,
                translator.translate(&Message::new(title_id, title)),
                json!(pattern),
                schema::string(),
            )
            .with_description(translator.translate(
                &Message::new(
                    "settings.format.patternText",
                    "Default numeral pattern for the \"{format}\" format",
                )
                .with_value("format", format_name),
            ))
            .with_value_type(ValueType::String),
        );
    }

    entries.push(
        SettingDefinition::new(
            SettingKey::FormatNumberLocale,
            translator.translate(&Message::new(
                "settings.format.formattingLocaleTitle",
                "Formatting locale",
            )),
            json!(FALLBACK_NUMERAL_LOCALE),
            schema::string(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.format.formattingLocaleText",
            "Numeral language locale used when rendering number patterns",
        )))
        .with_value_type(ValueType::Select)
        .with_options(locale_options, locale_labels),
    );

    entries.push(
        SettingDefinition::new(
            SettingKey::LongNumerals,
            translator.translate(&Message::new(
                "settings.data.withLongNumeralsTitle",
                "Extend numeric precision",
            )),
            json!(true),
            schema::boolean(),
        )
        .with_description(translator.translate(&Message::new(
            "settings.data.withLongNumeralsText",
            "Turn on for precise handling of extremely large numbers. \
             Turn off to optimize performance when high precision for large values is not required.",
        ))),
    );

    Ok(entries)
}

fn field_format_map_schema() -> serde_json::Value {
    let format_entry = || schema::object(&[("id", schema::string()), ("params", schema::any_object())]);
    schema::object(&[
        ("ip", format_entry()),
        ("date", format_entry()),
        ("date_nanos", format_entry()),
        ("number", format_entry()),
        ("boolean", format_entry()),
        ("_source", format_entry()),
        ("_default_", format_entry()),
    ])
}

fn timefilter_entries(translator: &dyn Translator) -> SettingsResult<Vec<SettingDefinition>> {
    let quick_ranges = json!([
        { "from": "now/d", "to": "now/d",
          "display": translator.translate(&Message::new("settings.timefilter.today", "Today")) },
        { "from": "now/w", "to": "now/w",
          "display": translator.translate(&Message::new("settings.timefilter.thisWeek", "This week")) },
        { "from": "now-15m", "to": "now",
          "display": translator.translate(&Message::new("settings.timefilter.last15Minutes", "Last 15 minutes")) },
        { "from": "now-30m", "to": "now",
          "display": translator.translate(&Message::new("settings.timefilter.last30Minutes", "Last 30 minutes")) },
        { "from": "now-1h", "to": "now",
          "display": translator.translate(&Message::new("settings.timefilter.last1Hour", "Last 1 hour")) },
        { "from": "now-24h", "to": "now",
          "display": translator.translate(&Message::new("settings.timefilter.last24Hours", "Last 24 hours")) },
        { "from": "now-7d", "to": "now",
          "display": translator.translate(&Message::new("settings.timefilter.last7Days", "Last 7 days")) },
        { "from": "now-30d", "to": "now",
          "display": translator.translate(&Message::new("settings.timefilter.last30Days", "Last 30 days")) },
        { "from": "now-90d", "to": "now",
          "display": translator.translate(&Message::new("settings.timefilter.last90Days", "Last 90 days")) },
        { "from": "now-1y", "to": "now",
          "display": translator.translate(&Message::new("settings.timefilter.last1Year", "Last 1 year")) },
    ]);
    let quick_ranges_text = serde_json::to_string_pretty(&quick_ranges).map_err(|err| {
        SettingsError::SerializeDefault {
            key: SettingKey::TimefilterQuickRanges,
            detail: err.to_string(),
        }
    })?;

    Ok(vec![
        SettingDefinition::new(
            SettingKey::TimefilterRefreshIntervalDefaults,
            translator.translate(&Message::new(
                "settings.timefilter.refreshIntervalDefaultsTitle",
                "Time filter refresh interval",
            )),
            json!("{\n  \"pause\": false,\n  \"value\": 0\n}"),
            schema::object(&[("pause", schema::boolean()), ("value", schema::number())]),
        )
        .with_description(translator.translate(&Message::new(
            "settings.timefilter.refreshIntervalDefaultsText",
            "The time filter's default refresh interval. \
             The \"value\" needs to be specified in milliseconds.",
        )))
        .with_value_type(ValueType::Json)
        .with_reload_required(),
        SettingDefinition::new(
            SettingKey::TimefilterTimeDefaults,
            translator.translate(&Message::new(
                "settings.timefilter.timeDefaultsTitle",
                "Time filter defaults",
            )),
            json!("{\n  \"from\": \"now-15m\",\n  \"to\": \"now\"\n}"),
            schema::object(&[("from", schema::string()), ("to", schema::string())]),
        )
        .with_description(translator.translate(&Message::new(
            "settings.timefilter.timeDefaultsText",
            "The time filter selection to use when Scry is started without one",
        )))
        .with_value_type(ValueType::Json)
        .with_reload_required(),
        SettingDefinition::new(
            SettingKey::TimefilterQuickRanges,
            translator.translate(&Message::new(
                "settings.timefilter.quickRangesTitle",
                "Time filter quick ranges",
            )),
            json!(quick_ranges_text),
            schema::array_of(schema::object(&[
                ("from", schema::string()),
                ("to", schema::string()),
                ("display", schema::string()),
            ])),
        )
        .with_description(translator.translate(&Message::new(
            "settings.timefilter.quickRangesText",
            "The list of ranges to show in the Quick section of the time filter. \
             This should be an array of objects, each containing \"from\", \"to\" \
             and \"display\" (the title to show).",
        )))
        .with_value_type(ValueType::Json),
    ])
}

/// Assemble the option set and labels for the formatting-locale selector.
///
/// The fallback locale leads the option list with its fixed label, exactly
/// once; a supplied record that repeats it is dropped. Malformed records
/// abort construction: no partial registry is ever exposed.
fn numeral_locale_options(
    languages: &[NumeralLanguage],
) -> SettingsResult<(Vec<String>, BTreeMap<String, String>)> {
    let mut options = Vec::with_capacity(languages.len() + 1);
    let mut labels = BTreeMap::new();
    options.push(FALLBACK_NUMERAL_LOCALE.to_string());
    labels.insert(
        FALLBACK_NUMERAL_LOCALE.to_string(),
        FALLBACK_NUMERAL_LOCALE_LABEL.to_string(),
    );

    for language in languages {
        if language.id.is_empty() {
            return Err(SettingsError::MalformedLocale {
                id: language.id.clone(),
                reason: "identifier must not be empty",
            });
        }
        if language.name.is_empty() {
            return Err(SettingsError::MalformedLocale {
                id: language.id.clone(),
                reason: "display name must not be empty",
            });
        }
        if language.id == FALLBACK_NUMERAL_LOCALE {
            warn!(id = %language.id, "locale list repeats the fallback locale; keeping the fixed label");
            continue;
        }
        if labels.contains_key(&language.id) {
            return Err(SettingsError::MalformedLocale {
                id: language.id.clone(),
                reason: "duplicate identifier",
            });
        }
        options.push(language.id.clone());
        labels.insert(language.id.clone(), language.name.clone());
    }

    Ok((options, labels))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn language(id: &str, name: &str) -> NumeralLanguage {
        NumeralLanguage {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn fallback_locale_leads_the_options() {
        let (options, labels) =
            numeral_locale_options(&[language("fr", "French")]).expect("options build");
        assert_eq!(options, vec!["en".to_string(), "fr".to_string()]);
        assert_eq!(labels["en"], "English");
        assert_eq!(labels["fr"], "French");
    }

    #[test]
    fn supplied_fallback_is_deduplicated_with_fixed_label() {
        let supplied = [language("fr", "French"), language("en", "English (dup)")];
        let (options, labels) = numeral_locale_options(&supplied).expect("options build");
        assert_eq!(
            options.iter().filter(|option| option.as_str() == "en").count(),
            1
        );
        assert_eq!(labels["en"], "English");
        assert!(options.contains(&"fr".to_string()));
    }

    #[test]
    fn malformed_records_fail_construction() {
        let empty_id = numeral_locale_options(&[language("", "Nameless")]).unwrap_err();
        assert!(matches!(empty_id, SettingsError::MalformedLocale { .. }));

        let empty_name = numeral_locale_options(&[language("fr", "")]).unwrap_err();
        assert!(matches!(empty_name, SettingsError::MalformedLocale { .. }));

        let duplicate =
            numeral_locale_options(&[language("fr", "French"), language("fr", "Encore")])
                .unwrap_err();
        assert!(matches!(
            duplicate,
            SettingsError::MalformedLocale {
                reason: "duplicate identifier",
                ..
            }
        ));
    }
}
