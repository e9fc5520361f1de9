//! Fixed identifiers shared between the registry payload and its tests.

/// Query language selected for fresh deployments.
pub(crate) const DEFAULT_QUERY_LANGUAGE: &str = "dql";
/// Fallback numeral locale always present in the locale selector.
pub(crate) const FALLBACK_NUMERAL_LOCALE: &str = "en";
/// Fixed display label for the fallback numeral locale.
pub(crate) const FALLBACK_NUMERAL_LOCALE_LABEL: &str = "English";
