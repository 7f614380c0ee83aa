use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A quoted cell was still open at end of input. Raised only when
    /// [`ParseOptions::strict`](crate::ParseOptions) is set; the lenient
    /// default closes the quote implicitly.
    #[error("unterminated quote in cell opened at line {line}, column {column}")]
    MalformedQuote { line: usize, column: usize },

    /// The record shape has no field carrying a column binding, so no field
    /// is eligible to serve as the primary key.
    #[error("record shape `{shape}` has no column binding to use as a key")]
    NoKeyBinding { shape: &'static str },

    /// A cell's text could not be converted to the bound field's type.
    #[error("field `{field}`: cannot parse {text:?} as {target}")]
    Coerce {
        field: &'static str,
        target: &'static str,
        text: String,
    },

    /// Failure reported by serde while driving a row through a
    /// `Deserialize` impl.
    #[error("{0}")]
    Deserialize(String),
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Deserialize(msg.to_string())
    }
}
