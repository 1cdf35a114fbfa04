//! Metafield normalization and derived release flags.
//!
//! A record's custom attributes ("metafields") arrive in one of four wire
//! shapes: a flat array (with nulls for unmatched identifiers), an
//! edge-wrapped connection, a node-wrapped connection, or not at all. This
//! module reconciles them into a flat list and derives the release-window
//! flags the storefront keys on.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::connection::flatten;
use crate::raw::RawMetafields;

/// Namespace holding the release-window metafields.
pub const RELEASE_NAMESPACE: &str = "release";

/// Key of the release date entry.
pub const RELEASE_DATE_KEY: &str = "release_date";

/// Key of the vaulted flag entry.
pub const VAULTED_KEY: &str = "vaulted";

/// A namespaced custom attribute attached to a catalog record.
///
/// The value stays a raw JSON value: the vaulted flag in particular shows
/// up both as the string `"true"` and as a boolean, and resolution has to
/// see which one it got.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Metafield {
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Release-window state derived from a record's metafields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArchiveFlags {
    /// Raw release date string, when present.
    pub release_date: Option<String>,
    /// Whether the record is vaulted (restricted, not orderable).
    pub is_vaulted: bool,
    /// Whether the release date lies strictly after the evaluation instant.
    pub is_upcoming: bool,
}

/// Normalize a `metafields` property into a flat entry list.
///
/// Absent or unrecognized input yields an empty list; null entries inside a
/// flat array are dropped.
pub fn flatten_metafields(metafields: Option<RawMetafields>) -> Vec<Metafield> {
    match metafields {
        None => Vec::new(),
        Some(RawMetafields::Flat(entries)) => entries.into_iter().flatten().collect(),
        Some(RawMetafields::Connection(connection)) => flatten(Some(connection)),
    }
}

/// Derive the release-window flags from normalized metafields.
///
/// `now` is the single evaluation-time clock reading for the whole mapping
/// call; callers sample it once so the result is deterministic. The date
/// comparison is strict: a release timestamp equal to `now` is not
/// upcoming, and a malformed release date resolves to not-upcoming rather
/// than an error.
#[must_use]
pub fn resolve_archive_flags(metafields: &[Metafield], now: DateTime<Utc>) -> ArchiveFlags {
    let entry = |key: &str| {
        metafields
            .iter()
            .find(|m| m.namespace == RELEASE_NAMESPACE && m.key == key)
    };

    let release_date = entry(RELEASE_DATE_KEY)
        .and_then(|m| m.value.as_str())
        .map(ToOwned::to_owned);

    let is_vaulted = entry(VAULTED_KEY).is_some_and(|m| match &m.value {
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::String(text) => text == "true",
        _ => false,
    });

    let is_upcoming = release_date
        .as_deref()
        .and_then(parse_release_instant)
        .is_some_and(|instant| instant > now);

    ArchiveFlags {
        release_date,
        is_vaulted,
        is_upcoming,
    }
}

/// Parse a release date as RFC 3339, or as a bare date at UTC midnight.
fn parse_release_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    raw.parse::<NaiveDate>()
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
