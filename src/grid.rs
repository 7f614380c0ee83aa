use indexmap::IndexMap;

/// The full parsed rows-of-cells structure, before any header or type
/// interpretation. Row lengths may vary; nothing at this layer enforces a
/// column count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub(crate) fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first row, viewed as a sequence of column names.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows from index 1 onward, unprojected. This is the pure row-offset
    /// "skip header" mode for callers that want raw cells without the
    /// header row.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn into_data_rows(mut self) -> Vec<Vec<String>> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        self.rows.remove(0);
        self.rows
    }

    /// Consume the first row as the header and keep the rest as data rows.
    pub fn with_header(self) -> HeaderedGrid {
        HeaderedGrid::from_grid(self)
    }
}

/// A [`Grid`] whose first row has been consumed as column names.
///
/// Data rows project positionally against the header: position `i` maps to
/// the header name at position `i`. A row shorter than the header omits the
/// unmatched trailing names from its projection; a row longer than the
/// header discards the extra trailing cells. Header-name uniqueness is not
/// enforced; when duplicates collide in a projection, the last one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderedGrid {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl HeaderedGrid {
    /// An empty grid produces an empty header and no data rows.
    pub fn from_grid(grid: Grid) -> Self {
        let mut rows = grid.into_rows();
        let header = if rows.is_empty() {
            Vec::new()
        } else {
            rows.remove(0)
        };
        Self { header, rows }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Project one data row to its name-keyed mapping.
    pub fn project(&self, row: &[String]) -> IndexMap<String, String> {
        let mut map = IndexMap::with_capacity(self.header.len().min(row.len()));
        for (name, cell) in self.header.iter().zip(row) {
            map.insert(name.clone(), cell.clone());
        }
        map
    }

    /// Name-keyed projections of every data row, in row order.
    pub fn maps(&self) -> impl Iterator<Item = IndexMap<String, String>> + '_ {
        self.rows.iter().map(|row| self.project(row))
    }

    pub fn into_maps(self) -> Vec<IndexMap<String, String>> {
        self.rows.iter().map(|row| self.project(row)).collect()
    }
}

/// Resolve a column name against one row under projection semantics: of all
/// header positions carrying `name` that the row actually covers, the last
/// one wins. Returns `None` when the name is absent or the row is too short
/// to reach any of its positions.
pub(crate) fn lookup<'r>(header: &[String], row: &'r [String], name: &str) -> Option<&'r str> {
    header
        .iter()
        .enumerate()
        .rev()
        .find(|(idx, header_name)| header_name.as_str() == name && *idx < row.len())
        .map(|(idx, _)| row[idx].as_str())
}
