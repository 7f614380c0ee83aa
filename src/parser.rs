use memchr::{memchr, memchr2, memchr_iter, memrchr};

use crate::{Delimiter, Error, Grid, ParseOptions, Result};

/// Parse delimited text into a [`Grid`] under explicit options. The scan is
/// always lenient; strict mode only decides whether an unterminated quote at
/// end of input is reported as [`Error::MalformedQuote`] or closed
/// implicitly.
pub(crate) fn parse(text: &str, options: &ParseOptions) -> Result<Grid> {
    let outcome = scan(text, options.delimiter);
    if options.strict {
        if let Some(opened_at) = outcome.unterminated_quote {
            let (line, column) = line_column(text, opened_at);
            return Err(Error::MalformedQuote { line, column });
        }
    }
    Ok(outcome.grid)
}

/// Lenient parse; total over any input.
pub(crate) fn parse_lenient(text: &str, delimiter: Delimiter) -> Grid {
    scan(text, delimiter).grid
}

struct ScanOutcome {
    grid: Grid,
    /// Byte offset of the opening quote of a cell still open at end of
    /// input.
    unterminated_quote: Option<usize>,
}

/// Single left-to-right scan with two states, unquoted and quoted. A cell
/// whose first character is `"` enters quoted mode, where the delimiter and
/// line feeds are literal content and `""` emits one literal quote. Outside
/// quoted mode the delimiter ends the cell, `\n` ends the cell and the row,
/// and a `\r` immediately before `\n` belongs to the terminator. Both
/// states are valid at end of input.
fn scan(text: &str, delimiter: Delimiter) -> ScanOutcome {
    let bytes = text.as_bytes();
    let delimiter = delimiter.as_byte();

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    // Tracks quote characters consumed for the current cell, so that a bare
    // `""` cell still counts as row content at end of input.
    let mut cell_started = false;
    let mut unterminated_quote = None;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'"' && cell.is_empty() && !cell_started {
            // Quoted mode; only a cell's first character opens it.
            cell_started = true;
            let opened_at = pos;
            pos += 1;
            loop {
                match memchr(b'"', &bytes[pos..]) {
                    Some(offset) => {
                        cell.push_str(&text[pos..pos + offset]);
                        pos += offset + 1;
                        if bytes.get(pos) == Some(&b'"') {
                            // Doubled quote: one literal quote, still quoted.
                            cell.push('"');
                            pos += 1;
                        } else {
                            break;
                        }
                    }
                    None => {
                        // Implicit close at end of input.
                        unterminated_quote = Some(opened_at);
                        cell.push_str(&text[pos..]);
                        pos = bytes.len();
                        break;
                    }
                }
            }
            continue;
        }

        match memchr2(delimiter, b'\n', &bytes[pos..]) {
            Some(offset) => {
                let end = pos + offset;
                let mut content_end = end;
                if bytes[end] == b'\n' && content_end > pos && bytes[content_end - 1] == b'\r' {
                    // CR directly before LF is part of the line terminator.
                    content_end -= 1;
                }
                cell.push_str(&text[pos..content_end]);
                row.push(std::mem::take(&mut cell));
                cell_started = false;
                if bytes[end] == b'\n' {
                    rows.push(std::mem::take(&mut row));
                }
                pos = end + 1;
            }
            None => {
                cell.push_str(&text[pos..]);
                pos = bytes.len();
            }
        }
    }

    // End of input ends the cell, and the row if it has any content. A
    // trailing newline thus never produces a spurious empty row.
    if cell_started || !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    ScanOutcome {
        grid: Grid::from_rows(rows),
        unterminated_quote,
    }
}

fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let before = &text.as_bytes()[..offset];
    let line = memchr_iter(b'\n', before).count() + 1;
    let line_start = memrchr(b'\n', before).map_or(0, |idx| idx + 1);
    let column = text[line_start..offset].chars().count() + 1;
    (line, column)
}
