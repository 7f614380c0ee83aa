//! Serde integration: header-keyed rows into any `Deserialize` type.
//!
//! This is the bind-by-name path only: struct field names (after
//! `#[serde(rename)]`) must match header names. For bind-by-index shapes or
//! primary-key extraction, use the [`record`](crate::record) binding tables.

use indexmap::IndexMap;
use serde::de::{self, DeserializeOwned, IntoDeserializer, MapAccess, Visitor};
use serde::forward_to_deserialize_any;

use crate::{parse_with_header, Delimiter, Error, Result};

/// Parse `text` with its first row as the header and deserialize every data
/// row into `T`. Empty input (or a header-only input) yields an empty list.
pub fn from_str<T: DeserializeOwned>(text: &str, delimiter: Delimiter) -> Result<Vec<T>> {
    let headered = parse_with_header(text, delimiter);
    headered
        .maps()
        .map(|row| T::deserialize(RowDeserializer { row }))
        .collect()
}

struct RowDeserializer {
    row: IndexMap<String, String>,
}

impl<'de> de::Deserializer<'de> for RowDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_map(RowAccess {
            entries: self.row.into_iter(),
            pending: None,
        })
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct RowAccess {
    entries: indexmap::map::IntoIter<String, String>,
    pending: Option<String>,
}

impl<'de> MapAccess<'de> for RowAccess {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.entries.next() {
            Some((name, cell)) => {
                self.pending = Some(cell);
                seed.deserialize(name.into_deserializer()).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        let cell = self
            .pending
            .take()
            .ok_or_else(|| Error::Deserialize("value requested before key".to_string()))?;
        seed.deserialize(CellDeserializer { cell })
    }
}

struct CellDeserializer {
    cell: String,
}

impl CellDeserializer {
    fn parse<T: std::str::FromStr>(&self, target: &'static str) -> Result<T> {
        self.cell
            .parse()
            .map_err(|_| Error::Deserialize(format!("cannot parse {:?} as {target}", self.cell)))
    }
}

macro_rules! deserialize_parsed {
    ($($method:ident => $ty:ty => $visit:ident,)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: Visitor<'de>,
            {
                let value: $ty = self.parse(stringify!($ty))?;
                visitor.$visit(value)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for CellDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_string(self.cell)
    }

    deserialize_parsed! {
        deserialize_bool => bool => visit_bool,
        deserialize_i8 => i8 => visit_i8,
        deserialize_i16 => i16 => visit_i16,
        deserialize_i32 => i32 => visit_i32,
        deserialize_i64 => i64 => visit_i64,
        deserialize_i128 => i128 => visit_i128,
        deserialize_u8 => u8 => visit_u8,
        deserialize_u16 => u16 => visit_u16,
        deserialize_u32 => u32 => visit_u32,
        deserialize_u64 => u64 => visit_u64,
        deserialize_u128 => u128 => visit_u128,
        deserialize_f32 => f32 => visit_f32,
        deserialize_f64 => f64 => visit_f64,
        deserialize_char => char => visit_char,
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        if self.cell.is_empty() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_enum(self.cell.into_deserializer())
    }

    forward_to_deserialize_any! {
        str string bytes byte_buf unit unit_struct seq tuple tuple_struct map
        struct identifier ignored_any
    }
}
