use std::fmt;
use std::str::FromStr;

use macaddr::MacAddr6;
use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// NOTE: this is basically a wrapper around macaddr::MacAddr6 which additionally
// accepts the bare 12-hex-digit form and comes with serde / schemars support
#[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone)]
pub struct MacAddr(MacAddr6);

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    MalformedAddress(String),
}

impl std::error::Error for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedAddress(addr) => {
                write!(f, "[ValidationError] malformed hardware address: {}", addr)
            }
        }
    }
}

impl MacAddr {
    pub fn new(bytes: [u8; 6]) -> Self {
        Self(MacAddr6::from(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[allow(dead_code)]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

fn decode_pair(pair: &str) -> Option<u8> {
    if pair.len() != 2 || !pair.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(pair, 16).ok()
}

fn decode_grouped(s: &str, separator: char) -> Option<[u8; 6]> {
    let mut bytes = [0u8; 6];
    let mut count = 0;
    for group in s.split(separator) {
        if count == bytes.len() {
            return None;
        }
        bytes[count] = decode_pair(group)?;
        count += 1;
    }
    if count == bytes.len() {
        Some(bytes)
    } else {
        None
    }
}

fn decode_bare(s: &str) -> Option<[u8; 6]> {
    if s.len() != 12 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let mut bytes = [0u8; 6];
    for (i, pair) in s.as_bytes().chunks(2).enumerate() {
        bytes[i] = decode_pair(std::str::from_utf8(pair).ok()?)?;
    }
    Some(bytes)
}

impl FromStr for MacAddr {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // a uniform separator style is required: either colons, hyphens or
        // no separators at all
        let bytes = match (s.contains(':'), s.contains('-')) {
            (true, true) => None,
            (true, false) => decode_grouped(s, ':'),
            (false, true) => decode_grouped(s, '-'),
            (false, false) => decode_bare(s),
        };

        match bytes {
            Some(bytes) => Ok(Self::new(bytes)),
            None => Err(ValidationError::MalformedAddress(s.to_string())),
        }
    }
}

impl Serialize for MacAddr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl JsonSchema for MacAddr {
    fn schema_name() -> String {
        "MacAddr".to_string()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            ..Default::default()
        }
        .into()
    }
}
