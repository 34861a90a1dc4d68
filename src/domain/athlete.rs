//! Athlete record normalization
//!
//! Turns raw spreadsheet rows into validated, immutable [`Athlete`]
//! values. Every sentinel state of the raw data (unknown gender or
//! class label, non-numeric cell, underage lifter) becomes a typed
//! error naming the offending row.

use crate::domain::{Division, Gender, WeightClass};
use crate::error::{DomainError, RowError, ValidationReport};
use crate::sheet::RawRow;

/// One normalized registration entry.
///
/// Built once from a raw row, then read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Athlete {
    pub usaw_id: String,
    pub first_name: String,
    pub last_name: String,
    pub club: String,
    pub coach: String,
    pub gender: Gender,
    pub birth_year: i32,
    pub weight_class: WeightClass,
    pub division: Division,
    pub snatch_opener: i32,
    pub cj_opener: i32,
}

impl Athlete {
    /// Normalize a single raw row.
    ///
    /// `current_year` is passed in rather than read from the clock so
    /// division assignment stays a pure function of its inputs.
    ///
    /// # Errors
    /// Returns a [`RowError`] carrying the spreadsheet row number when
    /// any field fails validation.
    pub fn from_row(row: &RawRow, current_year: i32) -> Result<Self, RowError> {
        let fail = |source: DomainError| RowError {
            row: row.row_number,
            source,
        };

        let gender = Gender::parse(&row.gender)
            .ok_or_else(|| fail(DomainError::UnknownGender(row.gender.clone())))?;
        let weight_class = WeightClass::parse(&row.category)
            .ok_or_else(|| fail(DomainError::UnknownWeightClass(row.category.clone())))?;
        let birth_year = parse_int("birthYear", &row.birth_year).map_err(fail)?;
        let snatch_opener = parse_int("snatchOpener", &row.snatch_opener).map_err(fail)?;
        let cj_opener = parse_int("cjOpener", &row.cj_opener).map_err(fail)?;

        let age = current_year - birth_year;
        let division =
            Division::for_age(age).ok_or_else(|| fail(DomainError::NoDivision { birth_year, age }))?;

        Ok(Self {
            usaw_id: row.usaw_id.clone(),
            first_name: row.first_name.clone(),
            last_name: row.last_name.clone(),
            club: row.club.clone(),
            coach: row.coach.clone(),
            gender,
            birth_year,
            weight_class,
            division,
            snatch_opener,
            cj_opener,
        })
    }
}

/// Normalize a whole sheet, collecting every row failure.
///
/// Either all rows normalize or the full error list comes back, so the
/// operator can fix the sheet in one pass instead of one row per run.
pub fn normalize_rows(
    rows: &[RawRow],
    current_year: i32,
) -> Result<Vec<Athlete>, ValidationReport> {
    let mut athletes = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for row in rows {
        match Athlete::from_row(row, current_year) {
            Ok(athlete) => athletes.push(athlete),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(athletes)
    } else {
        Err(ValidationReport::new(errors))
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, DomainError> {
    value.trim().parse().map_err(|_| DomainError::NotANumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(row_number: usize) -> RawRow {
        RawRow {
            row_number,
            gender: "F".to_string(),
            category: "58".to_string(),
            birth_year: "2000".to_string(),
            snatch_opener: "60".to_string(),
            cj_opener: "75".to_string(),
            usaw_id: "123456".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            club: "Analytical".to_string(),
            coach: "Babbage".to_string(),
        }
    }

    #[test]
    fn test_from_row_happy_path() {
        let athlete = Athlete::from_row(&raw(2), 2024).unwrap();
        assert_eq!(athlete.gender, Gender::Female);
        assert_eq!(athlete.weight_class, WeightClass::parse("58").unwrap());
        assert_eq!(athlete.birth_year, 2000);
        assert_eq!(athlete.division, Division::Senior);
        assert_eq!(athlete.snatch_opener, 60);
        assert_eq!(athlete.cj_opener, 75);
        assert_eq!(athlete.usaw_id, "123456");
        assert_eq!(athlete.coach, "Babbage");
    }

    #[test]
    fn test_from_row_is_idempotent() {
        let row = raw(2);
        let first = Athlete::from_row(&row, 2024).unwrap();
        let second = Athlete::from_row(&row, 2024).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_gender_rejected() {
        let mut row = raw(5);
        row.gender = "other".to_string();
        let err = Athlete::from_row(&row, 2024).unwrap_err();
        assert_eq!(err.row, 5);
        assert!(matches!(err.source, DomainError::UnknownGender(_)));
    }

    #[test]
    fn test_unknown_weight_class_rejected() {
        let mut row = raw(3);
        row.category = "200".to_string();
        let err = Athlete::from_row(&row, 2024).unwrap_err();
        assert!(matches!(err.source, DomainError::UnknownWeightClass(_)));
    }

    fn expect_not_a_number(row: RawRow, field: &str) {
        let err = Athlete::from_row(&row, 2024).unwrap_err();
        match err.source {
            DomainError::NotANumber { field: got, .. } => assert_eq!(got, field),
            other => panic!("expected NotANumber for {field}, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_birth_year_rejected() {
        let mut row = raw(4);
        row.birth_year = "19x5".to_string();
        expect_not_a_number(row, "birthYear");
    }

    #[test]
    fn test_empty_snatch_opener_rejected() {
        let mut row = raw(4);
        row.snatch_opener = String::new();
        expect_not_a_number(row, "snatchOpener");
    }

    #[test]
    fn test_non_numeric_cj_opener_rejected() {
        let mut row = raw(4);
        row.cj_opener = "heavy".to_string();
        expect_not_a_number(row, "cjOpener");
    }

    #[test]
    fn test_underage_rejected() {
        let mut row = raw(6);
        row.birth_year = "2015".to_string();
        let err = Athlete::from_row(&row, 2024).unwrap_err();
        assert_eq!(
            err.source,
            DomainError::NoDivision {
                birth_year: 2015,
                age: 9
            }
        );
    }

    #[test]
    fn test_division_follows_birth_year() {
        let mut row = raw(2);
        row.birth_year = "1985".to_string();
        let athlete = Athlete::from_row(&row, 2024).unwrap();
        assert_eq!(athlete.division, Division::Master);
    }

    #[test]
    fn test_normalize_rows_collects_all_errors() {
        let mut bad_gender = raw(2);
        bad_gender.gender = "??".to_string();
        let mut bad_year = raw(4);
        bad_year.birth_year = "unknown".to_string();
        let rows = vec![bad_gender, raw(3), bad_year];

        let report = normalize_rows(&rows, 2024).unwrap_err();
        let rows_in_error: Vec<usize> = report.errors().iter().map(|e| e.row).collect();
        assert_eq!(rows_in_error, vec![2, 4]);
    }

    #[test]
    fn test_normalize_rows_all_valid() {
        let rows = vec![raw(2), raw(3), raw(4)];
        let athletes = normalize_rows(&rows, 2024).unwrap();
        assert_eq!(athletes.len(), 3);
    }
}
