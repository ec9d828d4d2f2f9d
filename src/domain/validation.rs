//! Field-level validation rules.
//!
//! Every rule takes an optional string and answers whether it satisfies one
//! constraint. `None` and blank input never satisfy a rule.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Conversation languages accepted in `language.conversation_language`.
pub const SUPPORTED_LANGUAGES: [&str; 4] = ["es", "en", "pt", "fr"];

static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[0-9]+\.[0-9]+\.[0-9]+",
        r"(-[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*)?",
        r"(\+[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*)?$",
    ))
    .expect("semver pattern is valid")
});

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// `MAJOR.MINOR.PATCH` with optional `-prerelease` and `+build` suffixes.
pub fn is_valid_semver(value: Option<&str>) -> bool {
    non_blank(value).is_some_and(|v| SEMVER.is_match(v))
}

/// Strict `YYYY-MM-DD` that also names a real calendar day in years 1 to 9999.
pub fn is_valid_date(value: Option<&str>) -> bool {
    non_blank(value).is_some_and(|v| {
        ISO_DATE.is_match(v)
            && NaiveDate::parse_from_str(v, "%Y-%m-%d").is_ok_and(|d| d.year() >= 1)
    })
}

/// Letters, digits, `.`, `_` and `-` only.
pub fn is_valid_name(value: Option<&str>) -> bool {
    non_blank(value).is_some_and(|v| {
        v.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    })
}

/// Case-insensitive membership in [`SUPPORTED_LANGUAGES`].
pub fn is_supported_language(value: Option<&str>) -> bool {
    non_blank(value).is_some_and(|v| {
        let lowered = v.to_lowercase();
        SUPPORTED_LANGUAGES.contains(&lowered.as_str())
    })
}
