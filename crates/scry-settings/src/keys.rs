//! Stable identifiers for every user-configurable UI setting.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::SettingsError;

/// Enumerates every setting key known to the registry.
///
/// The wire string (used for lookup and persistence) is stable across
/// releases; the enum gives the registry and its consumers compile-time
/// exhaustiveness instead of runtime string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingKey {
    /// Fields merged into a document from outside `_source` when rendering it.
    MetaFields,
    /// Highlight matching terms in Discover result tables.
    DocTableHighlight,
    /// Shorten long field paths in result tables.
    ShortDotsEnable,
    /// Include frozen indices in search results.
    SearchIncludeFrozen,
    /// Request every field (`"fields": ["*"]`) in search request bodies.
    SearchIncludeAllFields,
    /// Number of datasets kept in the recents list.
    SearchMaxRecentDatasets,
    /// Number of recent values remembered by inputs with history.
    HistoryLimit,
    /// Options forwarded to the lucene query string parser.
    QueryStringOptions,
    /// Allow `*` as the first character of a query clause.
    QueryAllowLeadingWildcards,
    /// Language used by the query bar.
    SearchQueryLanguage,
    /// Additional query languages blocked from the query editor.
    QueryLanguageBlocklist,
    /// Enable experimental query enhancements.
    QueryEnhancementsEnabled,
    /// Offer value suggestions through the enhancements APIs.
    QueryEnhancementsSuggestValues,
    /// Cap on the number of suggested values fetched.
    QueryEnhancementsSuggestValuesLimit,
    /// How often the result-set schema is refreshed.
    SchemaRefreshStrategy,
    /// Skip filters whose field is missing from a panel's index.
    FetchIgnoreUnmappedFilters,
    /// Shard routing preference applied to search requests.
    FetchRequestPreference,
    /// Custom preference value used when routing is set to `custom`.
    FetchCustomRequestPreference,
    /// Concurrent shard request cap for multi-search requests.
    FetchMaxConcurrentShardRequests,
    /// Batch dashboard panel searches into combined requests.
    FetchBatchSearches,
    /// Options forwarded to the sort parameter.
    SortOptions,
    /// Target number of bars for auto-interval date histograms.
    HistogramBarTarget,
    /// Hard ceiling on bars shown in date histograms.
    HistogramMaxBars,
    /// Suggest field values inside the filter editor.
    FilterEditorSuggestValues,
    /// Pin newly created filters globally by default.
    FiltersPinnedByDefault,
    /// Index accessed when no index is selected.
    DefaultIndex,
    /// Placeholder text for the index pattern creation form.
    IndexPatternPlaceholder,
    /// Default display format per field type.
    FormatDefaultTypeMap,
    /// Default numeral pattern for the `number` format.
    FormatNumberPattern,
    /// Default numeral pattern for the `percent` format.
    FormatPercentPattern,
    /// Default numeral pattern for the `bytes` format.
    FormatBytesPattern,
    /// Default numeral pattern for the `currency` format.
    FormatCurrencyPattern,
    /// Locale used when rendering numeral patterns.
    FormatNumberLocale,
    /// Precise handling of numbers beyond double precision.
    LongNumerals,
    /// Default refresh interval for the time filter.
    TimefilterRefreshIntervalDefaults,
    /// Time range selected when the dashboard starts without one.
    TimefilterTimeDefaults,
    /// Ranges listed in the time filter's quick section.
    TimefilterQuickRanges,
}

impl SettingKey {
    /// Every key, in registry declaration order.
    pub const ALL: &'static [Self] = &[
        Self::MetaFields,
        Self::DocTableHighlight,
        Self::ShortDotsEnable,
        Self::SearchIncludeFrozen,
        Self::SearchIncludeAllFields,
        Self::SearchMaxRecentDatasets,
        Self::HistoryLimit,
        Self::QueryStringOptions,
        Self::QueryAllowLeadingWildcards,
        Self::SearchQueryLanguage,
        Self::QueryLanguageBlocklist,
        Self::QueryEnhancementsEnabled,
        Self::QueryEnhancementsSuggestValues,
        Self::QueryEnhancementsSuggestValuesLimit,
        Self::SchemaRefreshStrategy,
        Self::FetchIgnoreUnmappedFilters,
        Self::FetchRequestPreference,
        Self::FetchCustomRequestPreference,
        Self::FetchMaxConcurrentShardRequests,
        Self::FetchBatchSearches,
        Self::SortOptions,
        Self::HistogramBarTarget,
        Self::HistogramMaxBars,
        Self::FilterEditorSuggestValues,
        Self::FiltersPinnedByDefault,
        Self::DefaultIndex,
        Self::IndexPatternPlaceholder,
        Self::FormatDefaultTypeMap,
        Self::FormatNumberPattern,
        Self::FormatPercentPattern,
        Self::FormatBytesPattern,
        Self::FormatCurrencyPattern,
        Self::FormatNumberLocale,
        Self::LongNumerals,
        Self::TimefilterRefreshIntervalDefaults,
        Self::TimefilterTimeDefaults,
        Self::TimefilterQuickRanges,
    ];

    /// Stable wire identifier for this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MetaFields => "metaFields",
            Self::DocTableHighlight => "docTable:highlight",
            Self::ShortDotsEnable => "shortDots:enable",
            Self::SearchIncludeFrozen => "search:includeFrozen",
            Self::SearchIncludeAllFields => "search:includeAllFields",
            Self::SearchMaxRecentDatasets => "search:maxRecentDatasets",
            Self::HistoryLimit => "history:limit",
            Self::QueryStringOptions => "query:queryString:options",
            Self::QueryAllowLeadingWildcards => "query:allowLeadingWildcards",
            Self::SearchQueryLanguage => "search:queryLanguage",
            Self::QueryLanguageBlocklist => "query:languageBlocklist",
            Self::QueryEnhancementsEnabled => "query:enhancements:enabled",
            Self::QueryEnhancementsSuggestValues => "query:enhancements:suggestValues",
            Self::QueryEnhancementsSuggestValuesLimit => "query:enhancements:suggestValuesLimit",
            Self::SchemaRefreshStrategy => "query:schemaRefreshStrategy",
            Self::FetchIgnoreUnmappedFilters => "fetch:ignoreFilterIfFieldNotInIndex",
            Self::FetchRequestPreference => "fetch:requestPreference",
            Self::FetchCustomRequestPreference => "fetch:customRequestPreference",
            Self::FetchMaxConcurrentShardRequests => "fetch:maxConcurrentShardRequests",
            Self::FetchBatchSearches => "fetch:batchSearches",
            Self::SortOptions => "sort:options",
            Self::HistogramBarTarget => "histogram:barTarget",
            Self::HistogramMaxBars => "histogram:maxBars",
            Self::FilterEditorSuggestValues => "filterEditor:suggestValues",
            Self::FiltersPinnedByDefault => "filters:pinnedByDefault",
            Self::DefaultIndex => "defaultIndex",
            Self::IndexPatternPlaceholder => "indexPattern:placeholder",
            Self::FormatDefaultTypeMap => "format:defaultTypeMap",
            Self::FormatNumberPattern => "format:number:defaultPattern",
            Self::FormatPercentPattern => "format:percent:defaultPattern",
            Self::FormatBytesPattern => "format:bytes:defaultPattern",
            Self::FormatCurrencyPattern => "format:currency:defaultPattern",
            Self::FormatNumberLocale => "format:number:defaultLocale",
            Self::LongNumerals => "data:withLongNumerals",
            Self::TimefilterRefreshIntervalDefaults => "timefilter:refreshIntervalDefaults",
            Self::TimefilterTimeDefaults => "timefilter:timeDefaults",
            Self::TimefilterQuickRanges => "timefilter:quickRanges",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SettingsError::UnknownKey { key: s.to_string() })
    }
}

impl Serialize for SettingKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_are_unique() {
        for (index, key) in SettingKey::ALL.iter().enumerate() {
            for other in &SettingKey::ALL[index + 1..] {
                assert_ne!(key.as_str(), other.as_str(), "{key:?} collides with {other:?}");
            }
        }
    }

    #[test]
    fn wire_strings_round_trip() {
        for key in SettingKey::ALL.iter().copied() {
            assert_eq!(key.as_str().parse::<SettingKey>().unwrap(), key);
        }
    }

    #[test]
    fn unknown_strings_are_rejected() {
        let err = "nope:definitelyNot".parse::<SettingKey>().unwrap_err();
        assert!(matches!(err, SettingsError::UnknownKey { .. }));
    }
}
