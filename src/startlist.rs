//! Session sorting, grouping, and row rendering
//!
//! The sort is a sequence of stable single-key passes applied
//! outermost-key-last, so the final pass's key is the primary one and
//! every tie falls back to the previous pass's order. This multi-pass
//! composition (not a single comparator) is what fixes the tie-break
//! behavior between athletes sharing a key. The session split is a
//! fixed offset equal to the female count, not a searched gender
//! boundary.

use crate::domain::{Athlete, Gender};

/// Column headers, repeated at the top of each session.
pub const HEADER: [&str; 11] = [
    "Lot #",
    "USAW #",
    "Year of Birth",
    "Division",
    "Weight Class",
    "First Name",
    "Last Name",
    "Snatch",
    "C&J",
    "Club",
    "Coach",
];

/// How the start list is ordered within each gender session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Gender, then snatch opener ascending (the default).
    ByOpener,
    /// Gender, then weight-class index, then snatch opener ascending.
    ByWeightClass,
}

/// Order athletes for the start list.
///
/// Stable passes, innermost key first: snatch opener, then (in
/// [`SortMode::ByWeightClass`]) weight-class index, then gender.
/// Female sorts before male, so the female session leads.
pub fn sort_athletes(athletes: &mut [Athlete], mode: SortMode) {
    athletes.sort_by_key(|a| a.snatch_opener);
    if mode == SortMode::ByWeightClass {
        athletes.sort_by_key(|a| a.weight_class.index());
    }
    athletes.sort_by_key(|a| a.gender);
}

/// Offset of the session separator in the sorted sequence.
///
/// Always the female count. The separator lands at this fixed offset
/// rather than at a searched gender boundary; after the gender sort
/// pass the two coincide.
pub fn session_split(athletes: &[Athlete]) -> usize {
    athletes.iter().filter(|a| a.gender == Gender::Female).count()
}

/// Render the sorted athletes into CSV records.
///
/// Header first, then the female session; at the split offset a blank
/// row and a repeated header introduce the male session. A
/// single-gender list gets no separator at the end (the split offset
/// equals the length), but an all-male list gets an empty female
/// session up front, matching the fixed-offset rule.
pub fn render_rows(athletes: &[Athlete]) -> Vec<Vec<String>> {
    let split = session_split(athletes);
    let mut rows = Vec::with_capacity(athletes.len() + 3);

    rows.push(header_row());
    for (i, athlete) in athletes.iter().enumerate() {
        if i == split {
            rows.push(vec![String::new(); HEADER.len()]);
            rows.push(header_row());
        }
        rows.push(athlete_row(athlete));
    }

    rows
}

fn header_row() -> Vec<String> {
    HEADER.iter().map(|h| h.to_string()).collect()
}

fn athlete_row(a: &Athlete) -> Vec<String> {
    vec![
        // Lot numbers are drawn at the meet; the column stays blank.
        " ".to_string(),
        a.usaw_id.clone(),
        a.birth_year.to_string(),
        a.division.label().to_string(),
        a.weight_class.label().to_string(),
        a.first_name.clone(),
        a.last_name.clone(),
        a.snatch_opener.to_string(),
        a.cj_opener.to_string(),
        a.club.clone(),
        a.coach.clone(),
    ]
}
