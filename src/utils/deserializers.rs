use serde::{Deserialize, Deserializer};

// browser forms post select values as strings, so ids and difficulty may
// arrive either as `2` or as `"2"`
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Number, numeric string or null. Any other string is an error.
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(value)) => Ok(Some(value)),
        Some(IntOrString::Str(value)) => value
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| {
                serde::de::Error::custom(format!("Wrong value {value}, can not parse to i64"))
            }),
    }
}

/// Like [`deserialize_optional_i64`], but a non-numeric string becomes `None`.
pub fn deserialize_loose_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(value)) => Ok(Some(value)),
        Some(IntOrString::Str(value)) => Ok(value.trim().parse::<i64>().ok()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Strict {
        #[serde(default, deserialize_with = "deserialize_optional_i64")]
        value: Option<i64>,
    }

    #[derive(Deserialize)]
    struct Loose {
        #[serde(default, deserialize_with = "deserialize_loose_i64")]
        value: Option<i64>,
    }

    #[test]
    fn strict_accepts_numbers_and_numeric_strings() {
        let parsed: Strict = serde_json::from_str(r#"{"value": 4}"#).unwrap();
        assert_eq!(parsed.value, Some(4));

        let parsed: Strict = serde_json::from_str(r#"{"value": " 7 "}"#).unwrap();
        assert_eq!(parsed.value, Some(7));

        let parsed: Strict = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.value, None);

        assert!(serde_json::from_str::<Strict>(r#"{"value": "seven"}"#).is_err());
    }

    #[test]
    fn loose_drops_garbage() {
        let parsed: Loose = serde_json::from_str(r#"{"value": "click"}"#).unwrap();
        assert_eq!(parsed.value, None);

        let parsed: Loose = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(parsed.value, None);
    }
}
