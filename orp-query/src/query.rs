use crate::error::{QueryError, QueryResult};
use crate::value::QueryValue;
use percent_encoding::percent_decode_str;
use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::str::FromStr;
use tracing::debug;
use url::Url;

/// Parameters of a URL query component.
///
/// Built once by [`parse`](Self::parse) or [`from_url`](Self::from_url) and
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QueryString {
    params: BTreeMap<String, QueryValue>,
}

/// Percent-decodes a parameter value. `+` is kept as-is.
///
/// Sequences that do not decode to UTF-8 leave the raw text in place.
fn decode_component(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            debug!(value = raw, error = %err, "query value kept undecoded");
            raw.to_string()
        }
    }
}

impl QueryString {
    /// Parses `name=value` pairs separated by `&`.
    ///
    /// A single leading `?` is ignored. Each pair splits at its first `=`; a
    /// pair without `=` records an empty value and empty pairs are skipped.
    /// Names are taken verbatim, values are percent-decoded.
    ///
    /// Everything after the first `=` is the value, including further `=`
    /// signs: `x=1=2` records `"1=2"`, not `"1"`. Base64 padding and nested
    /// `key=value` payloads survive this way.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = BTreeMap::new();

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (name, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(raw);

            match params.entry(name.to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(QueryValue::Single(value));
                }
                Entry::Occupied(mut slot) => slot.get_mut().push(value),
            }
        }

        Self { params }
    }

    /// Parses the query component of an absolute URL.
    pub fn from_url(url: &str) -> QueryResult<Self> {
        let parsed = Url::parse(url).map_err(|source| QueryError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(parsed.query().map_or_else(Self::default, Self::parse))
    }

    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.params.get(name)
    }

    /// First value recorded for `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(QueryValue::first)
    }

    /// Every value recorded for `name`, empty if absent.
    pub fn all(&self, name: &str) -> &[String] {
        self.params
            .get(name)
            .map(QueryValue::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameters sorted by name.
    pub fn iter(&self) -> btree_map::Iter<'_, String, QueryValue> {
        self.params.iter()
    }
}

impl FromStr for QueryString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<'a> IntoIterator for &'a QueryString {
    type Item = (&'a String, &'a QueryValue);
    type IntoIter = btree_map::Iter<'a, String, QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
