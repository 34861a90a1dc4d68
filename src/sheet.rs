//! Registration spreadsheet reader
//!
//! Thin collaborator around calamine: exposes the first sheet's rows as
//! header-mapped string records and nothing more. Decoding the xlsx
//! container is entirely calamine's problem; everything after the
//! header mapping is plain data the rest of the crate can consume.

use crate::error::ReadError;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// One data row of the first sheet, every cell rendered as trimmed text.
///
/// `row_number` is the 1-based spreadsheet row (the header is row 1),
/// used to name rows in validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub row_number: usize,
    pub gender: String,
    pub category: String,
    pub birth_year: String,
    pub snatch_opener: String,
    pub cj_opener: String,
    pub usaw_id: String,
    pub first_name: String,
    pub last_name: String,
    pub club: String,
    pub coach: String,
}

/// Header-to-position mapping for the columns the start list needs.
///
/// Extra columns in the sheet are ignored; a missing one is a
/// [`ReadError::MissingColumn`].
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    gender: usize,
    category: usize,
    birth_year: usize,
    snatch_opener: usize,
    cj_opener: usize,
    usaw_id: usize,
    first_name: usize,
    last_name: usize,
    club: usize,
    coach: usize,
}

impl ColumnMap {
    fn resolve(headers: &[String]) -> Result<Self, ReadError> {
        Ok(Self {
            gender: column(headers, "gender")?,
            category: column(headers, "category")?,
            birth_year: column(headers, "birthYear")?,
            snatch_opener: column(headers, "snatchOpener")?,
            cj_opener: column(headers, "cjOpener")?,
            usaw_id: column(headers, "usawID")?,
            first_name: column(headers, "firstName")?,
            last_name: column(headers, "lastName")?,
            club: column(headers, "club")?,
            coach: column(headers, "coach")?,
        })
    }

    fn row(&self, row_number: usize, cells: &[String]) -> RawRow {
        let field = |i: usize| cells.get(i).cloned().unwrap_or_default();
        RawRow {
            row_number,
            gender: field(self.gender),
            category: field(self.category),
            birth_year: field(self.birth_year),
            snatch_opener: field(self.snatch_opener),
            cj_opener: field(self.cj_opener),
            usaw_id: field(self.usaw_id),
            first_name: field(self.first_name),
            last_name: field(self.last_name),
            club: field(self.club),
            coach: field(self.coach),
        }
    }
}

fn column(headers: &[String], name: &'static str) -> Result<usize, ReadError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(ReadError::MissingColumn(name))
}

/// Read the registration rows from the first sheet of `path`.
///
/// Registration info must be in the first sheet. Fully blank rows
/// (xlsx ranges routinely trail them) are skipped; partially blank
/// rows are kept and left to normalization to reject field by field.
///
/// # Errors
/// Fails if the workbook cannot be opened, has no sheets, has an empty
/// first sheet, or is missing a required header column.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, ReadError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ReadError::NoSheets)?
        .map_err(|source| ReadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or(ReadError::EmptySheet)?
        .iter()
        .map(cell_text)
        .collect();

    map_rows(&headers, rows.map(|cells| cells.iter().map(cell_text).collect()))
}

/// Map already-textified rows through the header row.
///
/// Split out of [`read_rows`] so the mapping is testable without an
/// xlsx file on disk. Data rows are numbered from 2 (the header is
/// spreadsheet row 1).
pub fn map_rows<I>(headers: &[String], data_rows: I) -> Result<Vec<RawRow>, ReadError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let map = ColumnMap::resolve(headers)?;
    let mut out = Vec::new();

    for (offset, cells) in data_rows.into_iter().enumerate() {
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        out.push(map.row(offset + 2, &cells));
    }

    Ok(out)
}

/// Render a cell as trimmed text.
///
/// Integral floats print without the trailing `.0` that calamine's
/// Display would keep for them; xlsx stores every number as a float,
/// so birth years and openers arrive as `2000.0`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            (*f as i64).to_string()
        }
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        [
            "gender",
            "category",
            "birthYear",
            "snatchOpener",
            "cjOpener",
            "usawID",
            "firstName",
            "lastName",
            "club",
            "coach",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_map_rows_maps_by_header() {
        let rows = map_rows(
            &headers(),
            vec![cells(&[
                "F", "58", "2000", "60", "75", "123", "Ada", "Lovelace", "Analytical", "Babbage",
            ])],
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.row_number, 2);
        assert_eq!(row.gender, "F");
        assert_eq!(row.category, "58");
        assert_eq!(row.birth_year, "2000");
        assert_eq!(row.usaw_id, "123");
        assert_eq!(row.coach, "Babbage");
    }

    #[test]
    fn test_map_rows_respects_column_order() {
        // Same columns, shuffled: the header row decides, not position.
        let mut shuffled = headers();
        shuffled.reverse();
        let mut values = cells(&[
            "F", "58", "2000", "60", "75", "123", "Ada", "Lovelace", "Analytical", "Babbage",
        ]);
        values.reverse();

        let rows = map_rows(&shuffled, vec![values]).unwrap();
        assert_eq!(rows[0].gender, "F");
        assert_eq!(rows[0].snatch_opener, "60");
    }

    #[test]
    fn test_map_rows_missing_column() {
        let mut incomplete = headers();
        incomplete.retain(|h| h != "snatchOpener");
        let err = map_rows(&incomplete, Vec::<Vec<String>>::new()).unwrap_err();
        assert!(matches!(err, ReadError::MissingColumn("snatchOpener")));
    }

    #[test]
    fn test_map_rows_skips_blank_rows() {
        let blank = vec![String::new(); 10];
        let data = vec![
            cells(&["F", "58", "2000", "60", "75", "1", "A", "B", "C", "D"]),
            blank,
            cells(&["M", "69", "1995", "100", "120", "2", "E", "F", "G", "H"]),
        ];
        let rows = map_rows(&headers(), data).unwrap();
        assert_eq!(rows.len(), 2);
        // Row numbers still track spreadsheet positions across the gap.
        assert_eq!(rows[0].row_number, 2);
        assert_eq!(rows[1].row_number, 4);
    }

    #[test]
    fn test_map_rows_short_row_pads_empty() {
        let data = vec![cells(&["F", "58", "2000"])];
        let rows = map_rows(&headers(), data).unwrap();
        assert_eq!(rows[0].birth_year, "2000");
        assert_eq!(rows[0].coach, "");
    }

    #[test]
    fn test_cell_text_integral_float() {
        assert_eq!(cell_text(&Data::Float(2000.0)), "2000");
        assert_eq!(cell_text(&Data::Float(60.5)), "60.5");
    }

    #[test]
    fn test_cell_text_variants() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("  Ada  ".to_string())), "Ada");
        assert_eq!(cell_text(&Data::Int(105)), "105");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
    }
}
