use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;
use std::fmt;

pub type CategoryId = i64;
pub type LangId = i64;
pub type ProductId = i64;
pub type ShopId = i64;

/// Parses a category id typed by a human or read from configuration.
pub fn parse_category_id(raw: &str) -> Option<CategoryId> {
    raw.trim().parse::<CategoryId>().ok()
}

pub fn deserialize_flexible_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlexibleI64Visitor;
    impl<'de> Visitor<'de> for FlexibleI64Visitor {
        type Value = i64;
        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("integer or string int")
        }
        #[inline]
        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v)
        }
        #[inline]
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }
        #[inline]
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            parse_category_id(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &"string int"))
        }
    }
    deserializer.deserialize_any(FlexibleI64Visitor)
}

pub fn deserialize_optional_flexible_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptionalFlexibleI64Visitor;
    impl<'de> Visitor<'de> for OptionalFlexibleI64Visitor {
        type Value = Option<i64>;
        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("integer, null, empty string, or string int")
        }
        #[inline]
        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }
        #[inline]
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(v)
                .map(Some)
                .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }
        #[inline]
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v.trim().is_empty() {
                return Ok(None);
            }
            parse_category_id(v)
                .map(Some)
                .ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
        }
        #[inline]
        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
        #[inline]
        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }
    deserializer.deserialize_any(OptionalFlexibleI64Visitor)
}

/// Accepts `true`/`false`, `0`/`1` and their string forms.
pub fn deserialize_flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlexibleBoolVisitor;
    impl<'de> Visitor<'de> for FlexibleBoolVisitor {
        type Value = bool;
        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("boolean, 0/1, or string boolean")
        }
        #[inline]
        fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
            Ok(v)
        }
        #[inline]
        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
            }
        }
        #[inline]
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
            }
        }
        #[inline]
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v.trim().to_lowercase().as_str() {
                "1" | "true" => Ok(true),
                "0" | "false" | "" => Ok(false),
                _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
            }
        }
    }
    deserializer.deserialize_any(FlexibleBoolVisitor)
}

#[derive(Deserialize)]
struct FlexibleId(#[serde(deserialize_with = "deserialize_flexible_i64")] i64);

pub fn deserialize_flexible_i64_vec<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids: Vec<FlexibleId> = Vec::deserialize(deserializer)?;
    Ok(ids.into_iter().map(|FlexibleId(id)| id).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "deserialize_flexible_i64")]
        id: i64,
        #[serde(default, deserialize_with = "deserialize_optional_flexible_i64")]
        parent: Option<i64>,
        #[serde(deserialize_with = "deserialize_flexible_bool")]
        active: bool,
        #[serde(default, deserialize_with = "deserialize_flexible_i64_vec")]
        links: Vec<i64>,
    }

    #[test]
    fn string_and_integer_ids_normalize_to_the_same_value() {
        let a: Probe =
            serde_json::from_str(r#"{"id": "12", "parent": 2, "active": "1", "links": ["3", 4]}"#)
                .unwrap();
        let b: Probe =
            serde_json::from_str(r#"{"id": 12, "parent": "2", "active": true, "links": [3, "4"]}"#)
                .unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(a.parent, b.parent);
        assert_eq!(a.active, b.active);
        assert_eq!(a.links, vec![3, 4]);
        assert_eq!(a.links, b.links);
    }

    #[test]
    fn empty_parent_means_none() {
        let p: Probe = serde_json::from_str(r#"{"id": 1, "parent": "", "active": 0}"#).unwrap();
        assert_eq!(p.parent, None);
        assert!(!p.active);
        assert!(p.links.is_empty());
    }

    #[test]
    fn garbage_ids_are_rejected() {
        assert!(serde_json::from_str::<Probe>(r#"{"id": "abc", "active": 1}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"id": 1, "active": 7}"#).is_err());
    }

    #[test]
    fn parse_category_id_trims() {
        assert_eq!(parse_category_id(" 42 "), Some(42));
        assert_eq!(parse_category_id("4x"), None);
    }
}
