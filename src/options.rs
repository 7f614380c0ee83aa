/// Separator used outside quoted regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }

    pub(crate) fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }

    /// Resolve a delimiter from a loose selector string.
    ///
    /// `"tab"`, `"tsv"` and a literal tab select [`Delimiter::Tab`]; anything
    /// unrecognized falls back to [`Delimiter::Comma`]. The fallback is
    /// legacy-compatibility behavior, kept as an explicit branch.
    pub fn from_name(name: &str) -> Self {
        match name {
            "\t" => Delimiter::Tab,
            _ if name.eq_ignore_ascii_case("tab") || name.eq_ignore_ascii_case("tsv") => {
                Delimiter::Tab
            }
            _ => Delimiter::Comma,
        }
    }
}

/// Parser configuration.
///
/// The default is the lenient mode: an unterminated quote at end of input is
/// implicitly closed. `strict` turns that case into
/// [`Error::MalformedQuote`](crate::Error::MalformedQuote).
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub delimiter: Delimiter,
    pub strict: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_selector_falls_back_to_comma() {
        assert_eq!(Delimiter::from_name("tab"), Delimiter::Tab);
        assert_eq!(Delimiter::from_name("TSV"), Delimiter::Tab);
        assert_eq!(Delimiter::from_name("\t"), Delimiter::Tab);
        assert_eq!(Delimiter::from_name("csv"), Delimiter::Comma);
        assert_eq!(Delimiter::from_name("semicolon"), Delimiter::Comma);
        assert_eq!(Delimiter::from_name(""), Delimiter::Comma);
    }
}
