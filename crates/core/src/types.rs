use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (publish dates, posting dates) carry no time zone.
pub type Date = chrono::NaiveDate;

/// Deserialize an optional id that may arrive as a JSON number or a numeric string.
///
/// The admin forms send ids back exactly as they received them, which is not
/// always a number. Anything that is neither (including `null`) becomes `None`.
pub fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

/// Deserialize a free-text column from any JSON scalar.
///
/// Strings pass through; numbers and booleans keep their JSON spelling, so
/// `3` becomes `"3"`. Arrays and objects are stored as their JSON text.
pub fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }))
}

/// Deserialize a decimal from a JSON number or a numeric string.
/// Anything else is treated as absent.
pub fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

/// Deserialize a counter from a JSON integer or an integer string.
/// Values outside `i32` and anything non-numeric are treated as absent.
pub fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

/// Deserialize a flag the way form posts send it: `true`, `1`, `"1"` and
/// `"true"` are set; `false`, `0`, `""`, `"0"` and `"false"` are clear.
pub fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Bool(b) => Some(b),
        Value::Number(n) => Some(n.as_f64() != Some(0.0)),
        Value::String(s) => Some(!matches!(s.trim(), "" | "0" | "false")),
        _ => None,
    }))
}

/// Parse an id taken from a query string.
///
/// Returns `None` for an absent or blank value.
pub fn parse_query_id(raw: Option<&str>) -> Option<Result<DbId, String>> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    Some(raw.parse::<DbId>().map_err(|_| raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "deserialize_lenient_id")]
        id: Option<DbId>,
    }

    fn id_of(json: &str) -> Option<DbId> {
        serde_json::from_str::<Body>(json).unwrap().id
    }

    #[test]
    fn lenient_id_accepts_numbers_and_numeric_strings() {
        assert_eq!(id_of(r#"{"id": 7}"#), Some(7));
        assert_eq!(id_of(r#"{"id": "12"}"#), Some(12));
    }

    #[test]
    fn lenient_id_treats_junk_as_missing() {
        assert_eq!(id_of(r#"{}"#), None);
        assert_eq!(id_of(r#"{"id": null}"#), None);
        assert_eq!(id_of(r#"{"id": "abc"}"#), None);
        assert_eq!(id_of(r#"{"id": true}"#), None);
    }

    #[derive(Deserialize)]
    struct Scalars {
        #[serde(default, deserialize_with = "deserialize_lenient_text")]
        text: Option<String>,
        #[serde(default, deserialize_with = "deserialize_lenient_f64")]
        rating: Option<f64>,
        #[serde(default, deserialize_with = "deserialize_lenient_i32")]
        views: Option<i32>,
        #[serde(default, deserialize_with = "deserialize_lenient_bool")]
        featured: Option<bool>,
    }

    fn scalars(json: &str) -> Scalars {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn lenient_text_keeps_scalar_spelling() {
        assert_eq!(scalars(r#"{"text": "3 BHK"}"#).text.as_deref(), Some("3 BHK"));
        assert_eq!(scalars(r#"{"text": 3}"#).text.as_deref(), Some("3"));
        assert_eq!(scalars(r#"{"text": 1450.5}"#).text.as_deref(), Some("1450.5"));
        assert_eq!(scalars(r#"{"text": true}"#).text.as_deref(), Some("true"));
        assert_eq!(scalars(r#"{"text": null}"#).text, None);
        assert_eq!(scalars(r#"{}"#).text, None);
    }

    #[test]
    fn lenient_numbers_accept_numeric_strings() {
        let s = scalars(r#"{"rating": "4.5", "views": "12"}"#);
        assert_eq!(s.rating, Some(4.5));
        assert_eq!(s.views, Some(12));

        let s = scalars(r#"{"rating": 3, "views": 7}"#);
        assert_eq!(s.rating, Some(3.0));
        assert_eq!(s.views, Some(7));

        let s = scalars(r#"{"rating": "high", "views": 99999999999}"#);
        assert_eq!(s.rating, None);
        assert_eq!(s.views, None);
    }

    #[test]
    fn lenient_bool_follows_form_truthiness() {
        assert_eq!(scalars(r#"{"featured": true}"#).featured, Some(true));
        assert_eq!(scalars(r#"{"featured": 1}"#).featured, Some(true));
        assert_eq!(scalars(r#"{"featured": "1"}"#).featured, Some(true));
        assert_eq!(scalars(r#"{"featured": 0}"#).featured, Some(false));
        assert_eq!(scalars(r#"{"featured": "0"}"#).featured, Some(false));
        assert_eq!(scalars(r#"{"featured": ""}"#).featured, Some(false));
        assert_eq!(scalars(r#"{"featured": null}"#).featured, None);
    }

    #[test]
    fn query_id_parsing() {
        assert_eq!(parse_query_id(None), None);
        assert_eq!(parse_query_id(Some("  ")), None);
        assert_eq!(parse_query_id(Some("42")), Some(Ok(42)));
        assert_eq!(parse_query_id(Some("x1")), Some(Err("x1".to_string())));
    }
}
