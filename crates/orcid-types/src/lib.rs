//! Scalar vocabulary shared by the ORCID record model and the mock service.
//!
//! The upstream API carries a handful of scalars with a closed or constrained value space
//! (`visibility`, `put-code`). Modelling them as types here keeps both codecs and the HTTP
//! layer from passing bare strings around.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing scalar vocabulary values.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypeError {
    /// The visibility string is not one of the upstream vocabulary values
    #[error("unknown visibility '{0}'")]
    UnknownVisibility(String),

    /// The put-code string is not a base-10 integer
    #[error("invalid put-code '{0}'")]
    InvalidPutCode(String),
}

/// Who may see a piece of profile data.
///
/// The wire spelling is identical in the JSON and XML encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Visible to everyone.
    Public,
    /// Visible to trusted parties.
    Limited,
    /// Visible to signed-in registry users.
    RegisteredOnly,
    /// Visible to the record holder only.
    Private,
}

impl Visibility {
    /// Convert to the upstream wire string.
    pub fn to_wire(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Limited => "limited",
            Visibility::RegisteredOnly => "registered-only",
            Visibility::Private => "private",
        }
    }

    /// Parse from the upstream wire string.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "public" => Some(Visibility::Public),
            "limited" => Some(Visibility::Limited),
            "registered-only" => Some(Visibility::RegisteredOnly),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_wire())
    }
}

impl FromStr for Visibility {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Visibility::from_wire(s).ok_or_else(|| TypeError::UnknownVisibility(s.to_owned()))
    }
}

impl serde::Serialize for Visibility {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_wire())
    }
}

impl<'de> serde::Deserialize<'de> for Visibility {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Identifier of one activity item (work, employment, researcher URL, ...) within a profile.
///
/// Put-codes are assigned by the registry and are only meaningful together with the
/// owning ORCID iD.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PutCode(i64);

impl PutCode {
    /// Wrap a raw put-code value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for PutCode {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PutCode {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(PutCode)
            .map_err(|_| TypeError::InvalidPutCode(s.to_owned()))
    }
}

impl serde::Serialize for PutCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PutCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(PutCode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_wire_strings_round_trip() {
        for v in [
            Visibility::Public,
            Visibility::Limited,
            Visibility::RegisteredOnly,
            Visibility::Private,
        ] {
            assert_eq!(Visibility::from_wire(v.to_wire()), Some(v));
        }
    }

    #[test]
    fn visibility_rejects_upper_case() {
        let err = "PUBLIC".parse::<Visibility>().expect_err("should reject");
        assert_eq!(err, TypeError::UnknownVisibility("PUBLIC".into()));
    }

    #[test]
    fn visibility_serializes_as_wire_string() {
        let json = serde_json::to_string(&Visibility::RegisteredOnly).expect("serialize");
        assert_eq!(json, "\"registered-only\"");
        let parsed: Visibility = serde_json::from_str("\"limited\"").expect("deserialize");
        assert_eq!(parsed, Visibility::Limited);
    }

    #[test]
    fn put_code_parses_integers_only() {
        assert_eq!("123456".parse::<PutCode>(), Ok(PutCode::new(123456)));
        assert_eq!(" 42 ".parse::<PutCode>(), Ok(PutCode::new(42)));
        assert_eq!(
            "abc".parse::<PutCode>(),
            Err(TypeError::InvalidPutCode("abc".into()))
        );
    }

    #[test]
    fn put_code_serializes_as_number() {
        let json = serde_json::to_string(&PutCode::new(789012)).expect("serialize");
        assert_eq!(json, "789012");
    }
}
