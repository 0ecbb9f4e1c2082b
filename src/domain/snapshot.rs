use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};

use super::PollError;

const INDENT: &[u8] = b"    ";

/// Parses `raw_json` and writes it back with sorted keys and a 4-space indent.
pub fn parse_and_rewrite(raw_json: &str) -> Result<String, PollError> {
    let document: Value = serde_json::from_str(raw_json)?;
    let sorted = sort_keys(document);

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    sorted.serialize(&mut serializer)?;

    // serde_json only emits utf-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// Rebuilds every object with its keys inserted in order, so the output is
// sorted whether or not serde_json preserves insertion order.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));

            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k, sort_keys(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::parse_and_rewrite;
    use crate::domain::PollError;

    const PLACES: &str = r#"{"countries":[{"name":"MEVO","cities":[{"uid":210,"places":[{"uid":1,"name":"Gdansk Glowny","lat":54.355,"bikes":3,"bike_numbers":["1001","1002"]}]}]}],"available":true}"#;

    #[test]
    fn parse_and_rewrite_roundtrips_to_equal_document() {
        let pretty = parse_and_rewrite(PLACES).unwrap();

        let reparsed: Value = serde_json::from_str(&pretty).unwrap();
        let original: Value = serde_json::from_str(PLACES).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn parse_and_rewrite_sorts_keys_at_every_level() {
        let pretty = parse_and_rewrite(r#"{"b":{"z":1,"a":2},"a":[{"y":1,"x":2}]}"#).unwrap();

        let expected = r#"{
    "a": [
        {
            "x": 2,
            "y": 1
        }
    ],
    "b": {
        "a": 2,
        "z": 1
    }
}"#;
        assert_eq!(pretty, expected);
    }

    #[test]
    fn parse_and_rewrite_keeps_empty_containers_and_unicode() {
        let pretty = parse_and_rewrite(r#"{"name":"Sopot Plac Przyjaciół","tags":[],"meta":{}}"#)
            .unwrap();

        let expected = "{\n    \"meta\": {},\n    \"name\": \"Sopot Plac Przyjaciół\",\n    \"tags\": []\n}";
        assert_eq!(pretty, expected);
    }

    #[test]
    fn parse_and_rewrite_rejects_malformed_json() {
        let result = parse_and_rewrite(r#"{"countries": [}"#);

        assert!(matches!(result, Err(PollError::Parse(_))));
    }

    #[test]
    fn parse_and_rewrite_keeps_large_numbers_exact() {
        let pretty =
            parse_and_rewrite(r#"{"uid":123456789012345678901234567890,"lat":54.35500000000000001,"huge":1e400}"#)
                .unwrap();

        let expected = "{\n    \"huge\": 1e400,\n    \"lat\": 54.35500000000000001,\n    \"uid\": 123456789012345678901234567890\n}";
        assert_eq!(pretty, expected);
    }
}
