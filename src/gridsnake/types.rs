use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

struct DeserializeI64OrStringVisitor;

impl<'de> de::Visitor<'de> for DeserializeI64OrStringVisitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or an integer string")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v)
            .map_err(|_| E::custom(format!("coordinate {v} is out of range")))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // hosts built on stringly-typed view layers sometimes hand
        // coordinates over as strings. anything non-integral is an error
        // rather than a default.
        v.parse::<i64>()
            .map_err(|_| E::custom(format!("coordinate {v:?} is not an integer")))
    }
}

fn from_string_or_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DeserializeI64OrStringVisitor)
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub struct Coord {
    #[serde(deserialize_with = "from_string_or_i64")]
    pub x: i64,
    #[serde(deserialize_with = "from_string_or_i64")]
    pub y: i64,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
