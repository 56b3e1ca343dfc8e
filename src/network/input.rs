//! Raw network input shapes accepted from profiles and the command line

use crate::error::ConfigError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Network input as it appears in a profile
///
/// Three generations coexist: a bare string (copy the ISO configuration), a
/// mapping without `type` (legacy keys `nic`, `ip`, `NetworkManager`), and a
/// mapping with `type` (current keys `iface`, `ip`, `dhcp`, `gateway`, `dns`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NetworkInput {
    Legacy(String),
    Mapping(NetworkMapping),
}

/// Recognized keys of a mapping-shaped network input; unknown keys are ignored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkMapping {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub nic_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iface: Option<String>,

    /// Legacy interface key; `Some(None)` when given as `null`
    #[serde(
        default,
        deserialize_with = "present_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub nic: Option<Option<String>>,

    /// Address with prefix; `Some(None)` when given as `null`
    #[serde(
        default,
        deserialize_with = "present_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub ip: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhcp: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns: Option<Vec<String>>,

    /// Legacy NetworkManager flag
    #[serde(
        rename = "NetworkManager",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub network_manager: Option<Value>,
}

impl NetworkMapping {
    /// The explicit `type`, if one is given and non-empty
    #[must_use]
    #[inline]
    pub fn explicit_type(&self) -> Option<&str> {
        self.nic_type.as_deref().filter(|t| !t.is_empty())
    }

    /// Value of `ip`, whether the key is absent or `null`
    #[must_use]
    #[inline]
    pub fn ip_address(&self) -> Option<&str> {
        self.ip.as_ref().and_then(Option::as_deref)
    }

    /// Value of the legacy `nic` key, whether the key is absent or `null`
    #[must_use]
    #[inline]
    pub fn nic_name(&self) -> Option<&str> {
        self.nic.as_ref().and_then(Option::as_deref)
    }

    #[must_use]
    #[inline]
    pub fn dhcp_requested(&self) -> bool {
        self.dhcp.as_ref().is_some_and(is_truthy)
    }

    #[must_use]
    #[inline]
    pub fn network_manager_requested(&self) -> bool {
        self.network_manager.as_ref().is_some_and(is_truthy)
    }

    /// Whether any static addressing field carries a value
    #[must_use]
    #[inline]
    pub fn has_static_fields(&self) -> bool {
        let filled = |field: Option<&str>| field.is_some_and(|v| !v.is_empty());
        filled(self.ip_address())
            || filled(self.gateway.as_deref())
            || self.dns.as_ref().is_some_and(|d| !d.is_empty())
    }
}

impl NetworkInput {
    /// Read an untyped JSON value into one of the input shapes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The value is neither a string nor a mapping
    /// - A recognized key holds a value of the wrong type
    #[inline]
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::String(marker) => Ok(Self::Legacy(marker)),
            Value::Object(_) => serde_json::from_value(value)
                .map(Self::Mapping)
                .map_err(|e| ConfigError::malformed(format!("invalid network mapping: {e}"))),
            other => Err(ConfigError::malformed(format!(
                "network configuration must be a string or a mapping, found {}",
                json_kind(&other)
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for NetworkInput {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

impl From<NetworkMapping> for NetworkInput {
    #[inline]
    fn from(mapping: NetworkMapping) -> Self {
        Self::Mapping(mapping)
    }
}

/// Keeps an explicit `null` distinct from a missing key
fn present_key<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// JSON truthiness: `null`, `false`, zero, and empty strings, arrays or
/// objects are falsy
#[must_use]
#[inline]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
