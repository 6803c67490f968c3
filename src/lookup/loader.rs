use std::collections::HashMap;

use super::AirportRow;
use crate::{config::Columns, error::LookupDefect};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Field positions of the four required columns.
struct ColumnIndex {
    name: usize,
    short_code: usize,
    long_code: usize,
    locality: usize,
    width: usize,
}

impl ColumnIndex {
    /// Resolve required columns from the header row (case-insensitive).
    ///
    /// When a header name repeats, the last occurrence wins.
    fn from_header(header: &str, columns: &Columns) -> Result<Self, LookupDefect> {
        let fields: Vec<&str> = header.split(',').collect();
        let positions: HashMap<String, usize> = fields
            .iter()
            .enumerate()
            .map(|(i, field)| (field.trim().to_lowercase(), i))
            .collect();

        let find = |column: &str| {
            positions
                .get(&column.trim().to_lowercase())
                .copied()
                .ok_or_else(|| LookupDefect::MissingColumn(column.to_string()))
        };

        Ok(Self {
            name: find(&columns.name)?,
            short_code: find(&columns.short_code)?,
            long_code: find(&columns.long_code)?,
            locality: find(&columns.locality)?,
            width: fields.len(),
        })
    }
}

/// Split the document into validated airport rows.
pub(super) fn parse_rows(
    content: &str,
    columns: &Columns,
) -> Result<Vec<AirportRow>, LookupDefect> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let lines: Vec<&str> = content.lines().collect();

    // Blank lines after the last row are newline artifacts, not rows.
    let last_row = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .ok_or(LookupDefect::Empty)?;

    let index = ColumnIndex::from_header(lines[0], columns)?;

    lines[1..=last_row]
        .iter()
        .enumerate()
        .map(|(i, line)| parse_row(line, i + 2, &index, columns))
        .collect()
}

fn parse_row(
    line: &str,
    line_number: usize,
    index: &ColumnIndex,
    columns: &Columns,
) -> Result<AirportRow, LookupDefect> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < index.width {
        return Err(LookupDefect::ShortRow {
            line: line_number,
            found: fields.len(),
            expected: index.width,
        });
    }

    let field = |position: usize, column: &str| {
        let value = fields[position].trim();
        if value.is_empty() {
            Err(LookupDefect::EmptyField {
                line: line_number,
                column: column.to_string(),
            })
        } else {
            Ok(value.to_string())
        }
    };

    Ok(AirportRow {
        name: field(index.name, &columns.name)?,
        short_code: field(index.short_code, &columns.short_code)?,
        long_code: field(index.long_code, &columns.long_code)?,
        locality: field(index.locality, &columns.locality)?,
    })
}
