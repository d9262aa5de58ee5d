//! Parameter stores — one per source, one shape.
//!
//! The query string, the form body, and the raw body are all URL-encoded
//! key/value text. Each gets the same store: parse once into a map, then
//! answer per-key lookups (`Option`, never an error) and bulk copies.

use std::collections::HashMap;

use url::form_urlencoded;

/// Where a parameter came from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Source {
    /// The URL's query string.
    Query,
    /// The request body, parsed as a submitted form.
    Form,
    /// The raw body stream, parsed as URL-encoded data on first access.
    RawBody,
}

/// A parsed, immutable key → value mapping for one [`Source`].
///
/// Duplicate keys keep the last value, matching what the usual
/// form-decoding layers of web runtimes do with `a=1&a=2`.
#[derive(Clone, Debug, Default)]
pub struct Params {
    map: HashMap<String, String>,
}

impl Params {
    /// Parses URL-encoded bytes (`a=1&b=two`). Malformed input degrades:
    /// whatever decodes, decodes; nothing raises.
    pub(crate) fn parse(input: &[u8]) -> Self {
        let map = form_urlencoded::parse(input)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { map }
    }

    /// The value for `key`, or `None`. Absence is a signal, not an error.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// A copy of the full mapping — never a live view into the store.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.map.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_decodes_percent_escapes() {
        let p = Params::parse(b"name=alice&city=s%C3%A3o+paulo");
        assert_eq!(p.get("name"), Some("alice"));
        assert_eq!(p.get("city"), Some("são paulo"));
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn missing_key_is_none_not_an_error() {
        let p = Params::parse(b"a=1");
        assert_eq!(p.get("missing"), None);
    }

    #[test]
    fn duplicate_keys_keep_the_last_value() {
        let p = Params::parse(b"a=1&a=2");
        assert_eq!(p.get("a"), Some("2"));
    }

    #[test]
    fn malformed_input_degrades_to_what_decodes() {
        let p = Params::parse(b"ok=1&%zz");
        assert_eq!(p.get("ok"), Some("1"));
        // the broken pair decodes to *something*, it just never panics
    }

    #[test]
    fn empty_input_is_an_empty_map() {
        let p = Params::parse(b"");
        assert!(p.is_empty());
        assert!(p.to_map().is_empty());
    }

    #[test]
    fn to_map_is_a_copy() {
        let p = Params::parse(b"a=1");
        let mut copy = p.to_map();
        copy.insert("b".into(), "2".into());
        assert_eq!(p.get("b"), None);
    }
}
