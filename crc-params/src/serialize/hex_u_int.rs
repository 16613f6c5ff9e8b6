use serde::{self, de, Deserializer, Serializer};

pub(crate) fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // Register values are written as hex strings when generating human-readable formats such as YAML,
    // which also keeps 64-bit values intact in formats limited to signed integers, like TOML.
    if serializer.is_human_readable() {
        serializer.serialize_str(format!("{value:#x}").as_str())
    } else {
        serializer.serialize_u64(*value)
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(UnsignedIntVisitor)
}

/// Accepts plain integers as well as strings in any notation understood by `parse_int`.
pub(super) struct UnsignedIntVisitor;

impl de::Visitor<'_> for UnsignedIntVisitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            formatter,
            "an unsigned integer, or a string such as \"0x1021\" or \"4129\""
        )
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_int::parse::<u64>(v.trim()).map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}
