use url::form_urlencoded;

/// Encode GET query parameters in insertion order.
///
/// Entries with a `None` value are dropped entirely rather than serialized
/// with an empty value. Keys and values are percent-encoded.
pub fn encode_get_params<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = (&'a str, Option<String>)>,
{
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        if let Some(value) = value {
            ser.append_pair(key, &value);
        }
    }
    ser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_get_params_preserves_insertion_order() {
        let q = encode_get_params([
            ("limit", Some("10".to_string())),
            ("page", Some("2".to_string())),
            ("onlyActiveTags", Some("true".to_string())),
        ]);
        assert_eq!(q, "limit=10&page=2&onlyActiveTags=true");
    }

    #[test]
    fn encode_get_params_drops_missing_values() {
        let q = encode_get_params([
            ("limit", None),
            ("page", None),
            ("onlyActiveTags", Some("true".to_string())),
        ]);
        assert_eq!(q, "onlyActiveTags=true");
    }

    #[test]
    fn encode_get_params_escapes_keys_and_values() {
        let q = encode_get_params([("filter tag", Some("sha256:abc/def".to_string()))]);
        assert_eq!(q, "filter+tag=sha256%3Aabc%2Fdef");
    }

    #[test]
    fn encode_get_params_of_nothing_is_empty() {
        let none: [(&str, Option<String>); 0] = [];
        assert_eq!(encode_get_params(none), "");
    }
}
