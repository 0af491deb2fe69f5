//! Sequence matcher (spec §4e). Maximal monotonic arithmetic progressions
//! of length >= 3 (`abcd`, `9876`).

use crate::matching::{Match, MatchPayload, Pattern, SequencePayload};

const MIN_SEQUENCE_LENGTH: usize = 3;

pub fn matches(password: &str) -> Vec<Match> {
    let chars: Vec<char> = password.chars().collect();
    let n = chars.len();
    let mut out = Vec::new();

    let mut i = 0;
    while i < n {
        if i + 1 >= n {
            break;
        }
        let delta = chars[i + 1] as i32 - chars[i] as i32;
        if delta != 1 && delta != -1 {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j + 1 < n && (chars[j + 1] as i32 - chars[j] as i32) == delta {
            j += 1;
        }
        let length = j - i + 1;
        if length >= MIN_SEQUENCE_LENGTH {
            let token: String = chars[i..=j].iter().collect();
            let ascending = delta == 1;
            let entropy = sequence_entropy(chars[i], length, ascending);
            out.push(Match {
                i,
                j,
                token,
                pattern: Pattern::Sequence,
                cardinality: 26,
                entropy,
                payload: MatchPayload::Sequence(SequencePayload { ascending }),
            });
            i = j + 1;
            continue;
        }
        i += 1;
    }
    out
}

/// Mirrors the teacher's `SequenceEstimator` (`scoring.rs::SequenceEstimator`),
/// translated from a guesses product into additive bits: lower base guesses
/// for obvious starting points, a +1 bit penalty for descending runs.
fn sequence_entropy(first_char: char, length: usize, ascending: bool) -> f64 {
    let base_guesses: f64 = if ['a', 'A', 'z', 'Z', '0', '1', '9'].contains(&first_char) {
        4.0
    } else if first_char.is_ascii_digit() {
        10.0
    } else {
        26.0
    };
    let descending_penalty = if ascending { 0.0 } else { 1.0 };
    base_guesses.log2() + (length as f64).log2() + descending_penalty
}
