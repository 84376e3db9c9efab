//! Explicit-presence helpers for partial updates.
//!
//! Every model attribute is an `Option<T>` that is skipped when `None`, so
//! an update only carries the fields the caller set. Attributes that the
//! caller must also be able to *clear* use [`Nullable`], which adds a third
//! state that serializes as JSON `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that is absent, explicitly null, or set.
///
/// Use with `#[serde(default, skip_serializing_if = "Nullable::is_absent")]`:
///
/// | state       | encoded as      | decoded from   |
/// |-------------|-----------------|----------------|
/// | `Absent`    | key omitted     | key missing    |
/// | `Null`      | `"key": null`   | `"key": null`  |
/// | `Value(v)`  | `"key": v`      | `"key": v`     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// Not present; leaves the remote value untouched.
    Absent,
    /// Present as `null`; clears the remote value.
    Null,
    /// Present with a value.
    Value(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Absent
    }
}

impl<T> Nullable<T> {
    /// Returns true if the field is not present.
    pub fn is_absent(&self) -> bool {
        matches!(self, Nullable::Absent)
    }

    /// Returns true if the field is present as `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    /// Returns the value, if set.
    pub fn value(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Builds a present field; `None` becomes `Null`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::Value(v),
            None => Nullable::Null,
        }
    }

    /// Converts into an `Option`, collapsing `Absent` and `Null`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Value(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Nullable::Value(v) => v.serialize(serializer),
            Nullable::Absent | Nullable::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the key is present; a missing key falls back to
        // `Default`, which is `Absent`.
        Option::<T>::deserialize(deserializer).map(Nullable::from_option)
    }
}

/// Decodes a list attribute, treating `null` like a missing key.
///
/// Use with `#[serde(default, deserialize_with = "null_as_empty")]`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Patch {
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        assignee_id: Nullable<i64>,
    }

    #[test]
    fn test_absent_is_omitted() {
        let json = serde_json::to_string(&Patch::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_null_is_encoded() {
        let patch = Patch {
            assignee_id: Nullable::Null,
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"assignee_id":null}"#);
    }

    #[test]
    fn test_value_is_encoded() {
        let patch = Patch {
            assignee_id: 7.into(),
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"assignee_id":7}"#);
    }

    #[test]
    fn test_decode_distinguishes_states() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"assignee_id":null}"#).unwrap();
        let set: Patch = serde_json::from_str(r#"{"assignee_id":0}"#).unwrap();

        assert!(absent.assignee_id.is_absent());
        assert!(null.assignee_id.is_null());
        assert_eq!(set.assignee_id.value(), Some(&0));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Nullable::from_option(None::<i64>), Nullable::Null);
        assert_eq!(Nullable::from_option(Some(3)), Nullable::Value(3));
        assert_eq!(Nullable::Value(3).into_option(), Some(3));
    }

    #[derive(Debug, Default, Deserialize)]
    struct Tagged {
        #[serde(default, deserialize_with = "null_as_empty")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_list_decodes_as_empty() {
        let null: Tagged = serde_json::from_str(r#"{"tags":null}"#).unwrap();
        let missing: Tagged = serde_json::from_str("{}").unwrap();
        let set: Tagged = serde_json::from_str(r#"{"tags":["vip"]}"#).unwrap();

        assert!(null.tags.is_empty());
        assert!(missing.tags.is_empty());
        assert_eq!(set.tags, vec!["vip".to_string()]);
    }
}
