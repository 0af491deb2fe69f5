//! Date matcher (spec §4e). Exhaustively tries substrings of length 4..8,
//! parsing as `[d]d[sep]mm[sep]yy(yy)` with a separator from a fixed set
//! or no separator at all, silently rejecting anything that isn't a
//! plausible calendar date.

use crate::matching::{Match, MatchPayload, Pattern, DatePayload};

const SEPARATORS: [char; 6] = [' ', '/', '\\', '-', '.', ','];
const MIN_LEN: usize = 4;
const MAX_LEN: usize = 8;

struct ParsedDate {
    day: u32,
    month: u32,
    year: i32,
    year_is_four_digit: bool,
    has_separator: bool,
}

pub fn matches(password: &str) -> Vec<Match> {
    let chars: Vec<char> = password.chars().collect();
    let n = chars.len();
    let mut out = Vec::new();

    for i in 0..n {
        for len in MIN_LEN..=MAX_LEN {
            if i + len > n {
                break;
            }
            let span = &chars[i..i + len];
            let parsed = parse_with_separator(span).or_else(|| parse_without_separator(span));
            if let Some(p) = parsed {
                let token: String = span.iter().collect();
                let entropy = date_entropy(&p);
                out.push(Match {
                    i,
                    j: i + len - 1,
                    token,
                    pattern: Pattern::Date,
                    cardinality: if p.has_separator { 4 * 31 * 12 * 100 } else { 31 * 12 * 100 },
                    entropy,
                    payload: MatchPayload::Date(DatePayload {
                        year: p.year,
                        month: p.month,
                        day: p.day,
                        has_separator: p.has_separator,
                    }),
                });
            }
        }
    }
    out
}

fn parse_without_separator(span: &[char]) -> Option<ParsedDate> {
    if !span.iter().all(|c| c.is_ascii_digit()) {
        return None;
    }
    for day_len in [2usize, 1] {
        for year_len in [4usize, 2] {
            if day_len + 2 + year_len != span.len() {
                continue;
            }
            let day_str: String = span[0..day_len].iter().collect();
            let month_str: String = span[day_len..day_len + 2].iter().collect();
            let year_str: String = span[day_len + 2..].iter().collect();
            if let Some(p) = build_date(&day_str, &month_str, &year_str, false) {
                return Some(p);
            }
        }
    }
    None
}

fn parse_with_separator(span: &[char]) -> Option<ParsedDate> {
    for &sep in &SEPARATORS {
        let positions: Vec<usize> = span
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == sep)
            .map(|(idx, _)| idx)
            .collect();
        if positions.len() != 2 {
            continue;
        }
        let (p0, p1) = (positions[0], positions[1]);
        if p0 == 0 || p1 == p0 + 1 || p1 + 1 >= span.len() {
            continue;
        }
        let day_str: String = span[0..p0].iter().collect();
        let month_str: String = span[p0 + 1..p1].iter().collect();
        let year_str: String = span[p1 + 1..].iter().collect();
        if let Some(p) = build_date(&day_str, &month_str, &year_str, true) {
            return Some(p);
        }
    }
    None
}

fn build_date(day_str: &str, month_str: &str, year_str: &str, has_separator: bool) -> Option<ParsedDate> {
    if day_str.is_empty()
        || !(1..=2).contains(&day_str.len())
        || !(1..=2).contains(&month_str.len())
        || !(day_str.chars().all(|c| c.is_ascii_digit())
            && month_str.chars().all(|c| c.is_ascii_digit())
            && year_str.chars().all(|c| c.is_ascii_digit()))
    {
        return None;
    }
    if year_str.len() != 2 && year_str.len() != 4 {
        return None;
    }
    let day: u32 = day_str.parse().ok()?;
    let month: u32 = month_str.parse().ok()?;
    let year: i32 = year_str.parse().ok()?;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return None;
    }
    if !is_valid_day_for_month(day, month, year_str.len() == 4, year) {
        return None;
    }

    Some(ParsedDate {
        day,
        month,
        year,
        year_is_four_digit: year_str.len() == 4,
        has_separator,
    })
}

fn is_valid_day_for_month(day: u32, month: u32, four_digit_year: bool, year: i32) -> bool {
    let full_year = if four_digit_year {
        year
    } else if year <= 30 {
        2000 + year
    } else {
        1900 + year
    };
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(full_year) {
                29
            } else {
                28
            }
        }
        _ => return false,
    };
    day <= days_in_month
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn date_entropy(p: &ParsedDate) -> f64 {
    // base: day (31) * month (12) * two-digit year space (100), the
    // exhaustive guess space regardless of which actual date was chosen.
    let mut base = 31.0 * 12.0 * 100.0;
    if p.year_is_four_digit {
        // a few plausible centuries to also search (per teacher's
        // `DateEstimator`, separator/format choices each cost a small
        // constant factor rather than scaling with the full 4-digit range).
        base *= 4.0;
    }
    if p.has_separator {
        base *= 4.0;
    }
    base.log2()
}
