/// Conversion from one cell's text to a field or key value.
///
/// Strings pass through verbatim; scalars go through their standard
/// [`str::parse`] with no trimming or locale handling, so whatever the
/// literal parser rejects, this rejects. `None` means the cell text does
/// not convert; the caller attaches the field identity and offending text.
pub trait FromCell: Sized {
    fn from_cell(text: &str) -> Option<Self>;
}

impl FromCell for String {
    fn from_cell(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

macro_rules! from_cell_via_parse {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromCell for $ty {
                fn from_cell(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )*
    };
}

from_cell_via_parse!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);
