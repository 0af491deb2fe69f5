//! Regex matcher (spec §4e). Fixed-cardinality pattern matches: digit
//! runs (cardinality 10, entropy scales with length) and recent years
//! (cardinality 119, flat entropy regardless of length).

use regex::Regex;

use crate::matching::{Match, MatchPayload, Pattern, RegexPayload};

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"\d{3,}").unwrap();
    static ref RECENT_YEAR: Regex = Regex::new(r"19\d\d|200\d|201\d|202\d").unwrap();
}

const DIGITS_CARDINALITY: u64 = 10;
const RECENT_YEAR_CARDINALITY: u64 = 119;

pub fn matches(password: &str) -> Vec<Match> {
    let mut out = Vec::new();
    out.extend(digit_matches(password));
    out.extend(recent_year_matches(password));
    out
}

fn byte_to_char_index(password: &str, byte_idx: usize) -> usize {
    password[..byte_idx].chars().count()
}

fn digit_matches(password: &str) -> Vec<Match> {
    DIGITS
        .find_iter(password)
        .map(|m| {
            let i = byte_to_char_index(password, m.start());
            let length = m.as_str().chars().count();
            let j = i + length - 1;
            Match {
                i,
                j,
                token: m.as_str().to_string(),
                pattern: Pattern::Regex,
                cardinality: DIGITS_CARDINALITY,
                entropy: length as f64 * (DIGITS_CARDINALITY as f64).log2(),
                payload: MatchPayload::Regex(RegexPayload { regex_name: "digits" }),
            }
        })
        .collect()
}

fn recent_year_matches(password: &str) -> Vec<Match> {
    RECENT_YEAR
        .find_iter(password)
        .map(|m| {
            let i = byte_to_char_index(password, m.start());
            let length = m.as_str().chars().count();
            let j = i + length - 1;
            Match {
                i,
                j,
                token: m.as_str().to_string(),
                pattern: Pattern::Regex,
                cardinality: RECENT_YEAR_CARDINALITY,
                entropy: (RECENT_YEAR_CARDINALITY as f64).log2(),
                payload: MatchPayload::Regex(RegexPayload { regex_name: "recent_year" }),
            }
        })
        .collect()
}
