//! Shared utility functions.

use chrono::{DateTime, Utc};
use url::Url;

/// Query parameter used to defeat intermediary caches.
pub const CACHE_BUST_PARAM: &str = "t";

/// Returns the current Unix epoch in milliseconds.
pub fn epoch_millis() -> i64 {
    epoch_millis_at(Utc::now())
}

/// Returns the Unix epoch in milliseconds for the given instant.
pub fn epoch_millis_at(timestamp: DateTime<Utc>) -> i64 {
    timestamp.timestamp_millis()
}

/// Sets the cache-busting parameter on `url`, replacing any previous value.
///
/// Other query parameters are kept in their original order.
pub fn with_cache_buster(url: &Url, millis: i64) -> Url {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != CACHE_BUST_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut busted = url.clone();
    {
        let mut pairs = busted.query_pairs_mut();
        pairs.clear();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(CACHE_BUST_PARAM, &millis.to_string());
    }
    busted
}

/// Joins an absolute path like `/api/languages` onto a base URL.
pub fn join_path(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    base.join(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_epoch_millis_at() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(epoch_millis_at(timestamp), 1_704_067_200_000);
    }

    #[test]
    fn test_with_cache_buster_appends() {
        let url = Url::parse("http://localhost:3000/assets/json/locales.json").unwrap();
        let busted = with_cache_buster(&url, 42);
        assert_eq!(
            busted.as_str(),
            "http://localhost:3000/assets/json/locales.json?t=42"
        );
    }

    #[test]
    fn test_with_cache_buster_replaces_previous_value() {
        let url = Url::parse("http://localhost/recap/2024/?view=grid&t=1").unwrap();
        let busted = with_cache_buster(&url, 99);
        assert_eq!(busted.as_str(), "http://localhost/recap/2024/?view=grid&t=99");
    }

    #[test]
    fn test_join_path_replaces_base_path() {
        let base = Url::parse("http://localhost:3000/recap/").unwrap();
        let joined = join_path(&base, "/api/languages").unwrap();
        assert_eq!(joined.as_str(), "http://localhost:3000/api/languages");
    }
}
