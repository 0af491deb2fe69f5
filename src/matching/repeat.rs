//! Repeat matcher (spec §4e). Maximal runs of one repeated character,
//! length >= 3.

use crate::entropy::password_cardinality;
use crate::matching::{Match, MatchPayload, Pattern, RepeatPayload};

const MIN_REPEAT_LENGTH: usize = 3;

pub fn matches(password: &str) -> Vec<Match> {
    let chars: Vec<char> = password.chars().collect();
    let n = chars.len();
    let mut out = Vec::new();

    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && chars[j + 1] == chars[i] {
            j += 1;
        }
        let length = j - i + 1;
        if length >= MIN_REPEAT_LENGTH {
            let token: String = chars[i..=j].iter().collect();
            let cardinality = password_cardinality(&chars[i].to_string()).max(1);
            let entropy = (cardinality as f64 * length as f64).log2();
            out.push(Match {
                i,
                j,
                token,
                pattern: Pattern::Repeat,
                cardinality,
                entropy,
                payload: MatchPayload::Repeat(RepeatPayload { repeated_char: chars[i] }),
            });
        }
        i = j + 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_repeated_run() {
        let found = matches("aaaaaa");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].token, "aaaaaa");
        assert_eq!(found[0].i, 0);
        assert_eq!(found[0].j, 5);
    }

    #[test]
    fn short_repeats_are_ignored() {
        assert!(matches("aa").is_empty());
    }

    #[test]
    fn multiple_runs_are_all_found() {
        let found = matches("xaaabbbx");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].token, "aaa");
        assert_eq!(found[1].token, "bbb");
    }
}
