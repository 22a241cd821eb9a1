//! Parameter sets for a single API call.
//!
//! The same [`Params`] collection feeds both query-string construction and JSON request
//! bodies. Values are a tagged union so that booleans, integers, raw image bytes and
//! identifier arrays keep their type until they are encoded.

use serde::ser::{Serialize, SerializeMap, Serializer};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Bool(bool),
    Int(i64),
    Bytes(Vec<u8>),
    Ids(Vec<Uuid>),
}

impl ParamValue {
    /// Render a scalar for use in a query string. Byte values have no query form.
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            ParamValue::Text(s) => Some(s.clone()),
            ParamValue::Bool(b) => Some(b.to_string()),
            ParamValue::Int(i) => Some(i.to_string()),
            ParamValue::Ids(ids) => Some(
                ids.iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            ParamValue::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ParamValue::Bytes(data) => Some(data),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<Uuid> for ParamValue {
    fn from(value: Uuid) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<Vec<u8>> for ParamValue {
    fn from(value: Vec<u8>) -> Self {
        ParamValue::Bytes(value)
    }
}

impl From<&[Uuid]> for ParamValue {
    fn from(value: &[Uuid]) -> Self {
        ParamValue::Ids(value.to_vec())
    }
}

/// Insertion-ordered key/value payload for one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing (in place) any existing value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Insert only when a value is present; absent optionals are omitted from the payload.
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Builder-style [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_replaces_existing_key_in_place() {
        let mut params = Params::new();
        params.insert("name", "first");
        params.insert("userData", "data");
        params.insert("name", "second");

        assert_eq!(params.len(), 2);
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "userData"]);
        assert_eq!(params.get("name"), Some(&ParamValue::Text("second".to_string())));
    }

    #[test]
    fn test_insert_opt_skips_none() {
        let mut params = Params::new();
        params.insert_opt("userData", None::<&str>);
        assert!(params.is_empty());

        params.insert_opt("userData", Some("tag"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_query_values() {
        let id = Uuid::parse_str("c5c24a82-6845-4031-9d5d-978df9175426").unwrap();
        assert_eq!(ParamValue::from(true).to_query_value().as_deref(), Some("true"));
        assert_eq!(ParamValue::from(5u32).to_query_value().as_deref(), Some("5"));
        assert_eq!(
            ParamValue::from(&[id, id][..]).to_query_value().as_deref(),
            Some("c5c24a82-6845-4031-9d5d-978df9175426,c5c24a82-6845-4031-9d5d-978df9175426")
        );
        assert!(ParamValue::from(vec![1u8, 2]).to_query_value().is_none());
    }

    #[test]
    fn test_serializes_as_json_object() {
        let id = Uuid::parse_str("c5c24a82-6845-4031-9d5d-978df9175426").unwrap();
        let params = Params::new()
            .with("personGroupId", "sample_group")
            .with("faceIds", &[id][..])
            .with("maxNumOfCandidatesReturned", 2u32)
            .with("analyzesAge", false);

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "personGroupId": "sample_group",
                "faceIds": ["c5c24a82-6845-4031-9d5d-978df9175426"],
                "maxNumOfCandidatesReturned": 2,
                "analyzesAge": false
            })
        );
    }
}
