//! Typed record mapping.
//!
//! A record shape declares, per field, which column feeds it, by zero-based
//! index or by header name, through a [`Bindings`] table built once per
//! shape and cached immutably. One field serves as the primary key for the
//! keyed-mapping output; repeated keys resolve last-wins.

mod cell;

use std::any;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::grid::lookup;
use crate::{Error, Grid, Result};

pub use cell::FromCell;

/// Where one field's source cell lives: a zero-based column index, or a
/// column name resolved through the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Index(usize),
    Name(&'static str),
}

impl From<usize> for Column {
    fn from(index: usize) -> Self {
        Column::Index(index)
    }
}

impl From<&'static str> for Column {
    fn from(name: &'static str) -> Self {
        Column::Name(name)
    }
}

/// A record shape with a static binding table.
///
/// Implementations build the table once and hand out a shared reference,
/// typically through a [`once_cell::sync::Lazy`] static (re-exported at the
/// crate root as [`xsvkit::once_cell`](crate::once_cell)):
///
/// ```
/// use xsvkit::once_cell::sync::Lazy;
/// use xsvkit::record::{Bindings, Record};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Item {
///     hash: String,
///     size: i32,
/// }
///
/// impl Record for Item {
///     fn bindings() -> &'static Bindings<Self> {
///         static BINDINGS: Lazy<Bindings<Item>> = Lazy::new(|| {
///             Bindings::new()
///                 .key("hash", 0, |item: &mut Item, value| item.hash = value)
///                 .field("size", 1, |item: &mut Item, value| item.size = value)
///         });
///         &BINDINGS
///     }
/// }
/// ```
pub trait Record: Default + Sized + 'static {
    fn bindings() -> &'static Bindings<Self>;
}

struct BoundField<T> {
    name: &'static str,
    column: Column,
    is_key: bool,
    assign: Box<dyn Fn(&mut T, &str) -> Result<()> + Send + Sync>,
}

impl<T> BoundField<T> {
    fn resolve<'r>(&self, header: Option<&[String]>, row: &'r [String]) -> Option<&'r str> {
        match self.column {
            Column::Index(index) => row.get(index).map(String::as_str),
            Column::Name(name) => header.and_then(|header| lookup(header, row, name)),
        }
    }
}

/// Immutable binding table for one record shape, built with a declarative
/// builder. Field registration order is the tie-break order for the key
/// fallback rule.
pub struct Bindings<T> {
    shape: &'static str,
    fields: Vec<BoundField<T>>,
}

impl<T: 'static> Default for Bindings<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Bindings<T> {
    pub fn new() -> Self {
        Self {
            shape: any::type_name::<T>(),
            fields: Vec::new(),
        }
    }

    /// Bind one field to a column. `name` identifies the field in coercion
    /// errors; `column` accepts a `usize` index or a `&'static str` header
    /// name.
    pub fn field<V: FromCell + 'static>(
        self,
        name: &'static str,
        column: impl Into<Column>,
        set: fn(&mut T, V),
    ) -> Self {
        self.bind(name, column.into(), false, set)
    }

    /// Bind one field and flag it as the primary key. When several fields
    /// are flagged, the first one registered wins.
    pub fn key<V: FromCell + 'static>(
        self,
        name: &'static str,
        column: impl Into<Column>,
        set: fn(&mut T, V),
    ) -> Self {
        self.bind(name, column.into(), true, set)
    }

    fn bind<V: FromCell + 'static>(
        mut self,
        name: &'static str,
        column: Column,
        is_key: bool,
        set: fn(&mut T, V),
    ) -> Self {
        let assign = Box::new(move |record: &mut T, text: &str| {
            let value = V::from_cell(text).ok_or_else(|| Error::Coerce {
                field: name,
                target: any::type_name::<V>(),
                text: text.to_string(),
            })?;
            set(record, value);
            Ok(())
        });
        self.fields.push(BoundField {
            name,
            column,
            is_key,
            assign,
        });
        self
    }

    /// The field whose raw cell text supplies lookup keys: the first field
    /// flagged as key, else the first field carrying any binding.
    fn key_field(&self) -> Result<&BoundField<T>> {
        self.fields
            .iter()
            .find(|field| field.is_key)
            .or_else(|| self.fields.first())
            .ok_or(Error::NoKeyBinding { shape: self.shape })
    }
}

/// Map one row to a record. Fields whose column is absent (index past the
/// row's end, or a name the header does not cover) stay at their default;
/// a cell that refuses coercion is a hard error.
fn build<T: Record>(header: Option<&[String]>, row: &[String]) -> Result<T> {
    let bindings = T::bindings();
    let mut record = T::default();
    for field in &bindings.fields {
        if let Some(cell) = field.resolve(header, row) {
            (field.assign)(&mut record, cell)?;
        }
    }
    Ok(record)
}

fn split(grid: &Grid, header: bool) -> (Option<&[String]>, &[Vec<String>]) {
    if header {
        (grid.header(), grid.data_rows())
    } else {
        (None, grid.rows())
    }
}

/// Map a parsed grid to an ordered record list, duplicates preserved in row
/// order. With `header` set, the first row is consumed as the header;
/// otherwise every row is data and name bindings resolve to nothing.
///
/// An empty grid yields an empty list, not an error.
pub fn map_records<T: Record>(grid: &Grid, header: bool) -> Result<Vec<T>> {
    let (header, rows) = split(grid, header);
    rows.iter().map(|row| build(header, row)).collect()
}

/// Map a parsed grid to a key-to-record mapping. The key field's raw cell
/// text (pre-coercion; empty when the row does not cover the key column) is
/// converted to `K`, and a later row with the same key overwrites the
/// earlier entry.
pub fn map_keyed_records<K, T>(grid: &Grid, header: bool) -> Result<IndexMap<K, T>>
where
    K: FromCell + Eq + Hash,
    T: Record,
{
    let bindings = T::bindings();
    let key_field = bindings.key_field()?;
    let (header, rows) = split(grid, header);

    let mut records = IndexMap::new();
    for row in rows {
        let raw = key_field.resolve(header, row).unwrap_or("");
        let key = K::from_cell(raw).ok_or_else(|| Error::Coerce {
            field: key_field.name,
            target: any::type_name::<K>(),
            text: raw.to_string(),
        })?;
        records.insert(key, build(header, row)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Unbound {
        value: i32,
    }

    impl Record for Unbound {
        fn bindings() -> &'static Bindings<Self> {
            static BINDINGS: once_cell::sync::Lazy<Bindings<Unbound>> =
                once_cell::sync::Lazy::new(Bindings::new);
            &BINDINGS
        }
    }

    #[test]
    fn shape_without_bindings_has_no_key() {
        let grid = Grid::from_rows(vec![vec!["1".to_string()]]);
        let err = map_keyed_records::<String, Unbound>(&grid, false).unwrap_err();
        assert!(matches!(err, Error::NoKeyBinding { shape } if shape.contains("Unbound")));
    }

    #[test]
    fn shape_without_bindings_still_maps_to_defaults() {
        let grid = Grid::from_rows(vec![vec!["1".to_string()]]);
        let records: Vec<Unbound> = map_records(&grid, false).unwrap();
        assert_eq!(records, vec![Unbound { value: 0 }]);
    }
}
