//! Delimited-text (comma/tab separated) parsing and structured
//! deserialization.
//!
//! One input, raw text plus a [`Delimiter`], and four output shapes:
//!
//! - [`rows`]: raw rows of cells, header row retained or stripped per flag;
//! - [`rows_with_header`]: header-keyed row mappings;
//! - [`records`]: typed records via per-shape [binding tables](record);
//! - [`keyed_records`]: records keyed by the declared primary field,
//!   last-duplicate-wins.
//!
//! The crate never touches files or resources; the caller loads the text.
//! Parsing is lenient by default (an unterminated quote at end of input
//! closes implicitly); [`parse_with_options`] plus
//! [`ParseOptions::with_strict`] opts into erroring instead.

pub mod de;
pub mod error;
pub mod grid;
pub mod options;
pub mod record;

mod parser;

use std::hash::Hash;

use indexmap::IndexMap;

// Re-exported so `Record` implementors can build their one-time binding
// statics without declaring the dependency themselves.
pub use once_cell;

pub use crate::error::{Error, Result};
pub use crate::grid::{Grid, HeaderedGrid};
pub use crate::options::{Delimiter, ParseOptions};
pub use crate::record::{Bindings, Column, FromCell, Record};

/// Parse text into a [`Grid`] with the lenient defaults. Total over any
/// input: empty text yields an empty grid, never an error.
pub fn parse(text: &str, delimiter: Delimiter) -> Grid {
    parser::parse_lenient(text, delimiter)
}

/// Parse text into a [`Grid`] under explicit [`ParseOptions`]; strict mode
/// can fail with [`Error::MalformedQuote`].
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Grid> {
    parser::parse(text, options)
}

/// Parse text and consume the first row as the header.
pub fn parse_with_header(text: &str, delimiter: Delimiter) -> HeaderedGrid {
    parse(text, delimiter).with_header()
}

/// Raw rows of cells; with `header` set, the first row is stripped.
pub fn rows(text: &str, delimiter: Delimiter, header: bool) -> Vec<Vec<String>> {
    let grid = parse(text, delimiter);
    if header {
        grid.into_data_rows()
    } else {
        grid.into_rows()
    }
}

/// Header-keyed row mappings, one per data row, in row order.
pub fn rows_with_header(text: &str, delimiter: Delimiter) -> Vec<IndexMap<String, String>> {
    parse_with_header(text, delimiter).into_maps()
}

/// Typed records in row order, duplicates preserved. See
/// [`record::map_records`] for the binding and default-value rules.
pub fn records<T: Record>(text: &str, delimiter: Delimiter, header: bool) -> Result<Vec<T>> {
    record::map_records(&parse(text, delimiter), header)
}

/// Typed records keyed by the shape's primary field, last-duplicate-wins.
/// See [`record::map_keyed_records`] for the key-extraction rules.
pub fn keyed_records<K, T>(text: &str, delimiter: Delimiter, header: bool) -> Result<IndexMap<K, T>>
where
    K: FromCell + Eq + Hash,
    T: Record,
{
    record::map_keyed_records(&parse(text, delimiter), header)
}
