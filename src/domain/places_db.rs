use std::sync::LazyLock;

use regex::Regex;

/// The page embeds the station database as a single-quoted js string literal.
static PLACES_DB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"var NEXTBIKE_PLACES_DB = '(.*?)'").expect("places db pattern is valid")
});

/// Returns the json text of the first `NEXTBIKE_PLACES_DB` assignment in the page.
pub fn extract_payload(page_source: &str) -> Option<&str> {
    PLACES_DB_PATTERN
        .captures(page_source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
