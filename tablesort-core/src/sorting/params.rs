//! Ordered query parameter list
//!
//! Keeps every pair in the order it arrived so generated links preserve the
//! relative order of parameters they pass through untouched.

use url::form_urlencoded;

/// Query parameters as `(key, value)` pairs in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// An empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw `application/x-www-form-urlencoded` query string
    /// (without the leading `?`).
    pub fn parse(query: &str) -> Self {
        form_urlencoded::parse(query.as_bytes()).collect()
    }

    /// Last value for `key`, matching how form decoders resolve repeats.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Add a pair after every existing one.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Copy of the list with every pair named in `keys` dropped.
    pub fn without(&self, keys: &[&str]) -> Self {
        self.iter().filter(|(k, _)| !keys.contains(k)).collect()
    }

    /// True when the query carried no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize back to a form-encoded query string, pairs joined by `&`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_arrival_order() {
        let params = QueryParams::parse("page=2&sort=name&q=red+car&dir=asc");
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();

        assert_eq!(keys, vec!["page", "sort", "q", "dir"]);
        assert_eq!(params.get("q"), Some("red car"));
    }

    #[test]
    fn test_parse_decodes_percent_escapes() {
        let params = QueryParams::parse("sort=year%2Ctitle&flag");

        assert_eq!(params.get("sort"), Some("year,title"));
        assert_eq!(params.get("flag"), Some(""));
    }

    #[test]
    fn test_repeated_keys_resolve_to_last_value() {
        let params = QueryParams::parse("dir=asc&dir=desc&page=1");
        assert_eq!(params.get("dir"), Some("desc"));

        let rest = params.without(&["dir"]);
        assert_eq!(rest.get("dir"), None);
        assert_eq!(rest.encode(), "page=1");
    }

    #[test]
    fn test_invalid_utf8_escape_is_replaced_not_dropped() {
        let params = QueryParams::parse("q=%FF&page=2");

        assert_eq!(params.get("q"), Some("\u{FFFD}"));
        assert_eq!(params.get("page"), Some("2"));
    }

    #[test]
    fn test_without_drops_named_keys_only() {
        let params = QueryParams::parse("a=1&sort=x&b=2&dir=asc&c=3");
        let rest = params.without(&["sort", "dir"]);

        assert_eq!(rest.encode(), "a=1&b=2&c=3");
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let params: QueryParams = [("q", "fish & chips"), ("tag", "a/b")].into_iter().collect();

        assert_eq!(params.encode(), "q=fish+%26+chips&tag=a%2Fb");
    }

    #[test]
    fn test_empty_query() {
        let params = QueryParams::parse("");
        assert!(params.is_empty());
        assert_eq!(params, QueryParams::new());
        assert_eq!(params.encode(), "");
    }
}
