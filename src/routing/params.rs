use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Named parameters bound by a matched pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, returning `self` for chaining.
    pub fn with<K, V>(mut self, name: K, value: V) -> Self
    where
        K: ToString,
        V: ToString,
    {
        self.insert(name, value);
        self
    }

    pub fn insert<K, V>(&mut self, name: K, value: V)
    where
        K: ToString,
        V: ToString,
    {
        self.values.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    /// Parses the parameter `name` into `T`. Returns `None` if the parameter is missing or
    /// not a valid `T`.
    pub fn parse<T>(&self, name: &str) -> Option<T>
    where
        T: FromStr,
    {
        self.get(name)?.parse().ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: ToString,
    V: ToString,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }

        params
    }
}

/// Percent-decodes a single path segment. Invalid UTF-8 keeps the raw segment.
pub(super) fn decode(segment: &str) -> Cow<'_, str> {
    match urlencoding::decode(segment) {
        Ok(value) => value,
        Err(_) => {
            log::debug!("Keeping undecodable segment {:?} verbatim", segment);
            Cow::Borrowed(segment)
        }
    }
}

pub(super) fn encode(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, Params};

    #[test]
    fn test_params_get() {
        let params = Params::new().with("competition_id", "1a2b").with("page", 3);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("competition_id"), Some("1a2b"));
        assert_eq!(params.get("page"), Some("3"));
        assert_eq!(params.get("player_id"), None);
    }

    #[test]
    fn test_params_parse() {
        let params: Params = [("player_id", "7"), ("name", "alice")].into_iter().collect();

        assert_eq!(params.parse::<u64>("player_id"), Some(7));
        assert_eq!(params.parse::<u64>("name"), None);
        assert_eq!(params.parse::<u64>("missing"), None);
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("plain"), "plain");
        assert_eq!(decode("a%20b"), "a b");
        assert_eq!(decode("%E3%81%82"), "\u{3042}");
        assert_eq!(decode("%FF"), "%FF");
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode("plain-id_1"), "plain-id_1");
        assert_eq!(encode("a b"), "a%20b");
        assert_eq!(encode("a/b"), "a%2Fb");
    }
}
